//! Tournament progression: winners into the bracket, cursor movement, resets.

use crate::logic::bracket_builder::build_bracket;
use crate::models::{Competitor, KumiteError, MatchCoord, MatchSession, Slot};
use std::sync::Arc;

/// Write `winner` into the current match and its successor slot in the next round.
pub(crate) fn record_winner_in_bracket(session: &mut MatchSession, winner: Slot) -> bool {
    let cursor = session.cursor;
    session.bracket.record_winner(cursor, winner)
}

/// Move the cursor to the next match: next index in the round, else the first
/// match of the following round. Resets scores, outcome winner, history and clock,
/// and shows the new pairing's names.
///
/// Returns `TournamentComplete` (session untouched) after the final match.
pub fn advance_to_next_match(session: &mut MatchSession) -> Result<MatchCoord, KumiteError> {
    let next = match session.bracket.next_coord(session.cursor) {
        Some(next) => next,
        None => {
            log::info!(
                "Tournament complete; no match after ({}, {})",
                session.cursor.round,
                session.cursor.index
            );
            return Err(KumiteError::TournamentComplete);
        }
    };
    session.cursor = next;
    session.reset_live_state();
    log::info!(
        "Advanced to match ({}, {}): {} vs {}",
        next.round,
        next.index,
        session.scores.aka.display_name,
        session.scores.shiro.display_name
    );
    Ok(next)
}

/// Throw everything away and start over on the two-placeholder bracket.
/// Configuration is kept.
pub fn reset_tournament(session: &mut MatchSession) {
    let config = session.config.clone();
    *session = MatchSession::new(config);
    log::info!("Tournament reset (session {})", session.id);
}

/// Replace the bracket with one built from `entrants` and start again at its
/// first match. Area is kept; `category` replaces the label when given.
pub fn load_entrants(
    session: &mut MatchSession,
    entrants: &[Arc<Competitor>],
    category: Option<String>,
) {
    session.bracket = build_bracket(entrants);
    session.cursor = MatchCoord::START;
    session.reset_live_state();
    if let Some(category) = category {
        session.outcome.category = category;
    }
    log::info!(
        "Loaded {} entrants into a {}-round bracket",
        entrants.len(),
        session.bracket.len()
    );
}
