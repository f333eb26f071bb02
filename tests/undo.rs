//! Integration tests for undo.

use kumite_scoring::{
    build_bracket, declare_winner, record_penalty, record_point, undo_last_action, Competitor,
    KumiteConfig, KumiteError, MatchCoord, MatchSession, ScoreField, ScoreValue, Side, Slot,
};
use std::sync::Arc;

fn session() -> MatchSession {
    MatchSession::new(KumiteConfig::default())
}

#[test]
fn undo_restores_the_previous_count() {
    let mut s = session();
    record_point(&mut s, Side::Aka, ScoreField::Wazari).unwrap();
    let scores = s.scores.clone();
    let len = s.history.len();

    record_point(&mut s, Side::Aka, ScoreField::Wazari).unwrap();
    let undone = undo_last_action(&mut s).unwrap();

    assert_eq!(undone.action_kind, ScoreField::Wazari);
    assert_eq!(undone.previous_value, ScoreValue::Count(1));
    assert_eq!(s.scores, scores);
    assert_eq!(s.history.len(), len);
}

#[test]
fn undo_walks_back_one_action_at_a_time() {
    let mut s = session();
    record_point(&mut s, Side::Shiro, ScoreField::Ippon).unwrap();
    record_penalty(&mut s, Side::Aka, ScoreField::Kinshi, None).unwrap();

    undo_last_action(&mut s).unwrap();
    assert!(!s.scores.aka.kinshi);
    assert_eq!(s.scores.shiro.ippon, 1);

    undo_last_action(&mut s).unwrap();
    assert_eq!(s.scores.shiro.ippon, 0);
    assert!(s.history.is_empty());
}

#[test]
fn undo_with_empty_history_is_refused() {
    let mut s = session();
    assert_eq!(undo_last_action(&mut s), Err(KumiteError::NothingToUndo));
}

#[test]
fn undoing_a_penalty_win_reopens_the_match() {
    let mut s = session();
    record_penalty(&mut s, Side::Aka, ScoreField::Shikaku, None).unwrap();
    assert_eq!(s.outcome.winner_side, Some(Side::Shiro));

    undo_last_action(&mut s).unwrap();

    assert_eq!(s.outcome.winner_side, None);
    assert_eq!(s.outcome.winner_name, "");
    assert!(!s.outcome.is_winner_dialog_open);
    assert!(!s.scores.aka.shikaku);
    assert!(s.bracket.get(MatchCoord::START).unwrap().winner.is_none());

    // scoring works again
    record_point(&mut s, Side::Aka, ScoreField::Wazari).unwrap();
    assert_eq!(s.scores.aka.wazari, 1);
}

#[test]
fn undoing_a_threshold_win_takes_the_winner_out_of_the_bracket() {
    let field: Vec<Arc<Competitor>> = (1..=4)
        .map(|i| Arc::new(Competitor::new(i, format!("P{i}"), 18)))
        .collect();
    let mut s = MatchSession::with_bracket(KumiteConfig::default(), build_bracket(&field));
    for _ in 0..6 {
        record_point(&mut s, Side::Shiro, ScoreField::Ippon).unwrap();
    }
    assert_eq!(
        s.bracket.get(MatchCoord::new(1, 0)).unwrap().pair[0].label(),
        "P2"
    );

    undo_last_action(&mut s).unwrap();

    assert!(!s.is_decided());
    assert_eq!(s.scores.shiro.ippon, 5);
    assert_eq!(
        s.bracket.get(MatchCoord::new(1, 0)).unwrap().pair[0],
        Slot::Pending { round: 0, index: 0 }
    );
}

#[test]
fn undo_after_a_hantei_clears_that_decision_too() {
    let mut s = session();
    record_point(&mut s, Side::Aka, ScoreField::Wazari).unwrap();
    declare_winner(&mut s, Side::Shiro, None).unwrap();

    undo_last_action(&mut s).unwrap();

    assert!(!s.is_decided());
    assert_eq!(s.scores.aka.wazari, 0);
}

#[test]
fn hantei_with_no_history_cannot_be_undone() {
    let mut s = session();
    declare_winner(&mut s, Side::Aka, None).unwrap();
    assert_eq!(undo_last_action(&mut s), Err(KumiteError::NothingToUndo));
    assert!(s.is_decided());
}
