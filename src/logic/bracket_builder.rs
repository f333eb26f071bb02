//! Bracket construction: entrants in order -> single-elimination rounds.

use crate::models::{Bracket, Competitor, Match, Slot};
use std::sync::Arc;

/// Build a single-elimination bracket from entrants in their given order.
///
/// - Fewer than 2 entrants gives an empty bracket.
/// - Otherwise the field is padded with `Bye` slots up to the next power of two,
///   after all real entrants.
/// - Round 0 pairs slots sequentially: (0,1), (2,3), ...
/// - Each later round has half the previous round's matches, with slots `Pending`
///   on the two feeding matches.
///
/// Byes are not advanced here. No randomness: same order, same bracket.
pub fn build_bracket(entrants: &[Arc<Competitor>]) -> Bracket {
    if entrants.len() < 2 {
        return Bracket::empty();
    }

    let size = entrants.len().next_power_of_two();
    let mut slots: Vec<Slot> = entrants.iter().cloned().map(Slot::competitor).collect();
    slots.resize(size, Slot::Bye);

    let first_round: Vec<Match> = slots
        .chunks(2)
        .map(|pair| Match::new(pair[0].clone(), pair[1].clone()))
        .collect();

    let mut rounds = vec![first_round];
    while let Some(previous) = rounds.last().filter(|r| r.len() > 1) {
        let round = rounds.len() - 1;
        // round 0 is a power of two, so every later round halves evenly
        let matches = (0..previous.len() / 2)
            .map(|i| {
                Match::new(
                    Slot::Pending { round, index: 2 * i },
                    Slot::Pending {
                        round,
                        index: 2 * i + 1,
                    },
                )
            })
            .collect();
        rounds.push(matches);
    }

    Bracket::new(rounds)
}

/// Two placeholder competitors, AKA vs SHIRO: the bracket before any import.
pub fn default_bracket() -> Bracket {
    let entrants = [
        Arc::new(Competitor::new(1, "AKA", 0)),
        Arc::new(Competitor::new(2, "SHIRO", 0)),
    ];
    build_bracket(&entrants)
}
