//! Scoring configuration: defaults, validation, environment overrides.

use crate::models::{KumiteError, DEFAULT_MATCH_SECONDS, MAX_MATCH_SECONDS, MIN_MATCH_SECONDS};
use serde::{Deserialize, Serialize};
use std::env;

/// Default points needed to win a match.
pub const DEFAULT_WIN_THRESHOLD: u32 = 6;

/// Threshold used by WKF rules.
pub const WKF_WIN_THRESHOLD: u32 = 8;

/// Read at resolution time; changes apply from the next evaluation on.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KumiteConfig {
    /// Points (wazari = 0.5, ippon = 1) at which a side wins.
    pub win_threshold: u32,
    /// Match duration in seconds.
    pub match_duration: u32,
    /// Hansoku, shikaku and kiken award the match to the opponent.
    pub auto_winner_on_penalty: bool,
}

impl Default for KumiteConfig {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            match_duration: DEFAULT_MATCH_SECONDS,
            auto_winner_on_penalty: true,
        }
    }
}

impl KumiteConfig {
    pub fn validate(&self) -> Result<(), KumiteError> {
        if self.win_threshold < 1 {
            return Err(KumiteError::InvalidConfig(
                "winThreshold must be at least 1".to_string(),
            ));
        }
        if !(MIN_MATCH_SECONDS..=MAX_MATCH_SECONDS).contains(&self.match_duration) {
            return Err(KumiteError::InvalidConfig(format!(
                "matchDuration must be between {} and {} seconds",
                MIN_MATCH_SECONDS, MAX_MATCH_SECONDS
            )));
        }
        Ok(())
    }

    /// Threshold expressed in half points, to compare against `ScoreState::half_points`.
    pub fn win_threshold_half_points(&self) -> u32 {
        self.win_threshold.saturating_mul(2)
    }

    /// Apply `KUMITE_*` environment variables over this config. Unparseable or
    /// out-of-range values are ignored with a warning.
    pub fn with_env_overrides(self) -> Self {
        let mut config = self.clone();
        if let Some(value) = env_default("KUMITE_WIN_THRESHOLD") {
            match value.parse() {
                Ok(n) => config.win_threshold = n,
                Err(_) => log::warn!("Ignoring KUMITE_WIN_THRESHOLD={:?}: not a number", value),
            }
        }
        if let Some(value) = env_default("KUMITE_MATCH_DURATION") {
            match value.parse() {
                Ok(n) => config.match_duration = n,
                Err(_) => log::warn!("Ignoring KUMITE_MATCH_DURATION={:?}: not a number", value),
            }
        }
        if let Some(flag) = env_flag("KUMITE_AUTO_WINNER_ON_PENALTY") {
            config.auto_winner_on_penalty = flag;
        }
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Ignoring environment overrides: {}", e);
                self
            }
        }
    }
}

fn env_default(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_flag(key: &str) -> Option<bool> {
    env_default(key).map(|value| {
        matches!(
            value.to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}
