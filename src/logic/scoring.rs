//! Scoring actions: points and penalties on one side of the live match.

use crate::logic::resolution::resolve_after_mutation;
use crate::models::{KumiteError, MatchSession, ScoreField, ScoreValue, Side};

/// Apply one scoring action to `side`.
///
/// Counters (wazari, ippon) increase by one and ignore `explicit`. Flags take
/// `explicit` or default to `true`. The change and its history entry are made
/// together, then the winner check runs.
///
/// Refused, with the session untouched, when the match is decided, the value
/// does not fit the field, or a penalty ladder would go out of order.
pub fn apply_action(
    session: &mut MatchSession,
    side: Side,
    field: ScoreField,
    explicit: Option<ScoreValue>,
) -> Result<(), KumiteError> {
    if session.is_decided() {
        return Err(KumiteError::MatchDecided);
    }

    let state = session.scores.side(side);
    let previous = state.get(field);
    let new_value = match (field.is_counter(), previous) {
        (true, ScoreValue::Count(n)) => ScoreValue::Count(n.saturating_add(1)),
        (true, ScoreValue::Flag(_)) => return Err(KumiteError::ValueMismatch { field }),
        (false, _) => explicit.unwrap_or(ScoreValue::Flag(true)),
    };

    match new_value {
        ScoreValue::Flag(true) => {
            if let Some(before) = field.ladder_predecessor() {
                if !state.is_set(before) {
                    return Err(KumiteError::PenaltyOutOfOrder { field });
                }
            }
        }
        ScoreValue::Flag(false) => {
            if let Some(after) = field.ladder_successor() {
                if state.is_set(after) {
                    return Err(KumiteError::PenaltyOutOfOrder { field });
                }
            }
        }
        ScoreValue::Count(_) if !field.is_counter() => {
            return Err(KumiteError::ValueMismatch { field });
        }
        ScoreValue::Count(_) => {}
    }

    session.scores.side_mut(side).set(field, new_value)?;
    session.history.record(side, field, previous, new_value);
    log::debug!("{} {}: {} -> {}", side, field, previous, new_value);

    resolve_after_mutation(session, side, field, new_value);
    Ok(())
}

/// Award a wazari or ippon.
pub fn record_point(
    session: &mut MatchSession,
    side: Side,
    kind: ScoreField,
) -> Result<(), KumiteError> {
    if !kind.is_counter() {
        return Err(KumiteError::UnknownAction(kind.to_string()));
    }
    apply_action(session, side, kind, None)
}

/// Set (or with `Some(false)`, clear) a penalty flag.
pub fn record_penalty(
    session: &mut MatchSession,
    side: Side,
    kind: ScoreField,
    value: Option<bool>,
) -> Result<(), KumiteError> {
    if kind.is_counter() {
        return Err(KumiteError::UnknownAction(kind.to_string()));
    }
    apply_action(session, side, kind, value.map(ScoreValue::Flag))
}
