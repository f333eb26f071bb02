//! Integration tests for configuration validation and environment overrides.

use kumite_scoring::{KumiteConfig, KumiteError, DEFAULT_WIN_THRESHOLD};

#[test]
fn defaults_are_valid() {
    let config = KumiteConfig::default();
    assert_eq!(config.win_threshold, DEFAULT_WIN_THRESHOLD);
    assert_eq!(config.match_duration, 180);
    assert!(config.auto_winner_on_penalty);
    assert!(config.validate().is_ok());
    assert_eq!(config.win_threshold_half_points(), 12);
}

#[test]
fn out_of_range_values_fail_validation() {
    let zero = KumiteConfig {
        win_threshold: 0,
        ..KumiteConfig::default()
    };
    assert!(matches!(zero.validate(), Err(KumiteError::InvalidConfig(_))));

    let long = KumiteConfig {
        match_duration: 900,
        ..KumiteConfig::default()
    };
    assert!(matches!(long.validate(), Err(KumiteError::InvalidConfig(_))));
}

#[test]
fn partial_json_fills_in_defaults() {
    let config: KumiteConfig = serde_json::from_str(r#"{"winThreshold":8}"#).unwrap();
    assert_eq!(config.win_threshold, 8);
    assert_eq!(config.match_duration, 180);
    assert!(config.auto_winner_on_penalty);
}

// The only test in this binary that touches the environment.
#[test]
fn environment_overrides_apply_when_valid() {
    std::env::set_var("KUMITE_WIN_THRESHOLD", "8");
    std::env::set_var("KUMITE_AUTO_WINNER_ON_PENALTY", "off");
    let config = KumiteConfig::default().with_env_overrides();
    assert_eq!(config.win_threshold, 8);
    assert!(!config.auto_winner_on_penalty);

    std::env::set_var("KUMITE_WIN_THRESHOLD", "0");
    let config = KumiteConfig::default().with_env_overrides();
    assert_eq!(config, KumiteConfig::default());

    std::env::set_var("KUMITE_WIN_THRESHOLD", "lots");
    let config = KumiteConfig::default().with_env_overrides();
    assert_eq!(config.win_threshold, DEFAULT_WIN_THRESHOLD);
    assert!(!config.auto_winner_on_penalty);

    std::env::remove_var("KUMITE_WIN_THRESHOLD");
    std::env::remove_var("KUMITE_AUTO_WINNER_ON_PENALTY");
}
