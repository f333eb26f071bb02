//! Single-step undo of scoring actions.

use crate::models::{HistoryEntry, KumiteError, MatchSession};

/// Revert the most recent scoring action.
///
/// Restores the field's previous value. If the match was decided, the winner is
/// cleared whatever caused it, and the bracket forgets that winner too, so play
/// resumes. Returns the undone entry.
pub fn undo_last_action(session: &mut MatchSession) -> Result<HistoryEntry, KumiteError> {
    let entry = session
        .history
        .last()
        .cloned()
        .ok_or(KumiteError::NothingToUndo)?;

    session
        .scores
        .side_mut(entry.side)
        .set(entry.action_kind, entry.previous_value)?;
    session.history.pop();

    if session.is_decided() {
        session.outcome.clear_winner();
        let cursor = session.cursor;
        session.bracket.retract_winner(cursor);
        log::info!(
            "Undo reopened match ({}, {})",
            cursor.round,
            cursor.index
        );
    }

    log::debug!(
        "Undid {} {}: back to {}",
        entry.side,
        entry.action_kind,
        entry.previous_value
    );
    Ok(entry)
}
