//! Integration tests for scoring actions and penalty ladders.

use kumite_scoring::{
    apply_action, declare_winner, record_penalty, record_point, KumiteConfig, KumiteError,
    MatchSession, ScoreField, ScoreValue, Side,
};

fn session() -> MatchSession {
    MatchSession::new(KumiteConfig::default())
}

#[test]
fn wazari_and_ippon_increment_and_record_previous_count() {
    let mut s = session();
    apply_action(&mut s, Side::Aka, ScoreField::Wazari, None).unwrap();
    apply_action(&mut s, Side::Aka, ScoreField::Wazari, None).unwrap();
    apply_action(&mut s, Side::Shiro, ScoreField::Ippon, None).unwrap();

    assert_eq!(s.scores.aka.wazari, 2);
    assert_eq!(s.scores.shiro.ippon, 1);
    assert_eq!(s.points(Side::Aka), 1.0);
    assert_eq!(s.points(Side::Shiro), 1.0);

    let entries = s.history.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].previous_value, ScoreValue::Count(1));
    assert_eq!(entries[1].new_value, ScoreValue::Count(2));
    assert_eq!(entries[1].description, "Waza-ari (+1)");
    assert_eq!(entries[2].side, Side::Shiro);
    assert!(entries[0].id < entries[1].id && entries[1].id < entries[2].id);
}

#[test]
fn counters_ignore_explicit_values() {
    let mut s = session();
    apply_action(&mut s, Side::Aka, ScoreField::Ippon, Some(ScoreValue::Count(5))).unwrap();
    assert_eq!(s.scores.aka.ippon, 1);
}

#[test]
fn flags_default_to_true_and_accept_explicit_values() {
    let mut s = session();
    apply_action(&mut s, Side::Shiro, ScoreField::Atenai, None).unwrap();
    assert!(s.scores.shiro.atenai);
    let entry = s.history.last().unwrap();
    assert_eq!(entry.previous_value, ScoreValue::Flag(false));
    assert_eq!(entry.new_value, ScoreValue::Flag(true));

    apply_action(&mut s, Side::Shiro, ScoreField::Atenai, Some(ScoreValue::Flag(false))).unwrap();
    assert!(!s.scores.shiro.atenai);
    assert_eq!(s.history.len(), 2);
}

#[test]
fn flag_with_count_value_is_refused() {
    let mut s = session();
    assert_eq!(
        apply_action(&mut s, Side::Aka, ScoreField::Kinshi, Some(ScoreValue::Count(1))),
        Err(KumiteError::ValueMismatch {
            field: ScoreField::Kinshi
        })
    );
    assert!(s.history.is_empty());
}

#[test]
fn ladder_steps_require_their_predecessor() {
    let mut s = session();
    assert_eq!(
        record_penalty(&mut s, Side::Aka, ScoreField::KinshiNi, None),
        Err(KumiteError::PenaltyOutOfOrder {
            field: ScoreField::KinshiNi
        })
    );
    assert!(!s.scores.aka.kinshi_ni);
    assert!(s.history.is_empty());

    record_penalty(&mut s, Side::Aka, ScoreField::Kinshi, None).unwrap();
    record_penalty(&mut s, Side::Aka, ScoreField::KinshiNi, None).unwrap();
    assert!(s.scores.aka.kinshi_ni);

    assert!(record_penalty(&mut s, Side::Aka, ScoreField::AtenaiChui, None).is_err());
    record_penalty(&mut s, Side::Aka, ScoreField::Atenai, None).unwrap();
    record_penalty(&mut s, Side::Aka, ScoreField::AtenaiChui, None).unwrap();
    assert!(s.scores.aka.atenai_chui);
}

#[test]
fn ladder_steps_cannot_be_cleared_under_a_later_step() {
    let mut s = session();
    record_penalty(&mut s, Side::Shiro, ScoreField::Kinshi, None).unwrap();
    record_penalty(&mut s, Side::Shiro, ScoreField::KinshiNi, None).unwrap();

    assert_eq!(
        record_penalty(&mut s, Side::Shiro, ScoreField::Kinshi, Some(false)),
        Err(KumiteError::PenaltyOutOfOrder {
            field: ScoreField::Kinshi
        })
    );
    record_penalty(&mut s, Side::Shiro, ScoreField::KinshiNi, Some(false)).unwrap();
    record_penalty(&mut s, Side::Shiro, ScoreField::Kinshi, Some(false)).unwrap();
    assert!(!s.scores.shiro.kinshi);
}

#[test]
fn point_and_penalty_entry_points_reject_the_other_kind() {
    let mut s = session();
    assert!(matches!(
        record_point(&mut s, Side::Aka, ScoreField::Shikaku),
        Err(KumiteError::UnknownAction(_))
    ));
    assert!(matches!(
        record_penalty(&mut s, Side::Aka, ScoreField::Wazari, None),
        Err(KumiteError::UnknownAction(_))
    ));
    assert!(s.history.is_empty());
}

#[test]
fn nothing_changes_once_the_match_is_decided() {
    let mut s = session();
    record_point(&mut s, Side::Aka, ScoreField::Wazari).unwrap();
    declare_winner(&mut s, Side::Shiro, None).unwrap();
    let scores = s.scores.clone();

    for field in [ScoreField::Wazari, ScoreField::Ippon, ScoreField::Kinshi] {
        for side in Side::BOTH {
            assert_eq!(
                apply_action(&mut s, side, field, None),
                Err(KumiteError::MatchDecided)
            );
        }
    }
    assert_eq!(s.scores, scores);
    assert_eq!(s.history.len(), 1);
}

#[test]
fn points_never_decrease_while_live() {
    let mut s = session();
    let mut last = 0.0;
    let sequence = [
        ScoreField::Wazari,
        ScoreField::Kinshi,
        ScoreField::Ippon,
        ScoreField::Atenai,
        ScoreField::Wazari,
    ];
    for field in sequence {
        apply_action(&mut s, Side::Aka, field, None).unwrap();
        let now = s.points(Side::Aka);
        assert!(now >= last);
        last = now;
    }
    assert_eq!(last, 2.0);
}

#[test]
fn action_names_parse_from_their_wire_form() {
    assert_eq!("kinshiHansoku".parse::<ScoreField>(), Ok(ScoreField::KinshiHansoku));
    assert_eq!("ippon".parse::<ScoreField>(), Ok(ScoreField::Ippon));
    assert!("nombre".parse::<ScoreField>().is_err());
    assert_eq!("red".parse::<Side>(), Ok(Side::Aka));
    assert_eq!("SHIRO".parse::<Side>(), Ok(Side::Shiro));
}
