//! Winner resolution: threshold and penalty rules, plus manual (hantei) decisions.
//!
//! Every mutating entry point calls into here synchronously, so a score over
//! the threshold without a recorded winner is never observable.

use crate::config::KumiteConfig;
use crate::logic::progression::record_winner_in_bracket;
use crate::models::{KumiteError, MatchSession, ScoreField, ScoreValue, Scores, Side};

/// Side whose points reached the threshold. Aka is checked first.
pub fn threshold_winner(scores: &Scores, config: &KumiteConfig) -> Option<Side> {
    let threshold = config.win_threshold_half_points();
    Side::BOTH
        .into_iter()
        .find(|side| scores.side(*side).half_points() >= threshold)
}

/// Declare a winner if the score rule says so. No-op when already decided.
/// Returns the side declared by this call.
pub fn evaluate_winner(session: &mut MatchSession) -> Option<Side> {
    if session.is_decided() || session.current_match().is_none() {
        return None;
    }
    let side = threshold_winner(&session.scores, &session.config)?;
    match declare_winner(session, side, None) {
        Ok(()) => Some(side),
        Err(e) => {
            log::debug!("Threshold reached by {} but not declared: {}", side, e);
            None
        }
    }
}

/// Hook run after every applied scoring action.
pub(crate) fn resolve_after_mutation(
    session: &mut MatchSession,
    side: Side,
    field: ScoreField,
    value: ScoreValue,
) {
    if field.is_terminal_penalty()
        && value == ScoreValue::Flag(true)
        && session.config.auto_winner_on_penalty
    {
        let opponent = side.opponent();
        if let Err(e) = declare_winner(session, opponent, None) {
            log::debug!("{} for {} did not award {}: {}", field, side, opponent, e);
        }
    }
    evaluate_winner(session);
}

/// Award the current match to `side`.
///
/// Stops the clock, fills in the outcome (opening the winner dialog) and writes
/// the winning slot into the bracket. `name` overrides the slot's label.
pub fn declare_winner(
    session: &mut MatchSession,
    side: Side,
    name: Option<&str>,
) -> Result<(), KumiteError> {
    if session.is_decided() {
        return Err(KumiteError::MatchDecided);
    }
    let slot = session
        .current_match()
        .ok_or(KumiteError::NoCurrentMatch)?
        .slot(side)
        .clone();
    if !slot.is_competitor() {
        return Err(KumiteError::ByeCannotWin);
    }

    let winner_name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| slot.label())
        .to_string();

    session.timer.stop();
    session.outcome.decide(side, winner_name.clone());
    record_winner_in_bracket(session, slot);
    log::info!(
        "Match ({}, {}) won by {} ({})",
        session.cursor.round,
        session.cursor.index,
        winner_name,
        side
    );
    Ok(())
}
