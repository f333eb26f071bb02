//! Match, MatchCoord and the Bracket arena.
//!
//! Match records are shared behind `Arc` and never mutated: every write builds
//! a new record and swaps it into its `(round, index)` position, so a clone of
//! the bracket taken earlier (for a display snapshot, say) keeps seeing the
//! old record.

use crate::models::competitor::Slot;
use crate::models::score::Side;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Position of a match inside the bracket.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct MatchCoord {
    pub round: usize,
    pub index: usize,
}

impl MatchCoord {
    pub const START: MatchCoord = MatchCoord { round: 0, index: 0 };

    pub fn new(round: usize, index: usize) -> Self {
        Self { round, index }
    }

    /// Slot in the following round that receives this match's winner.
    pub fn successor(&self) -> (MatchCoord, usize) {
        (
            MatchCoord::new(self.round + 1, self.index / 2),
            self.index % 2,
        )
    }
}

/// A single pairing: slot 0 fights as aka, slot 1 as shiro.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub pair: [Slot; 2],
    /// None until the match is decided.
    pub winner: Option<Slot>,
}

impl Match {
    pub fn new(first: Slot, second: Slot) -> Self {
        Self {
            pair: [first, second],
            winner: None,
        }
    }

    pub fn slot(&self, side: Side) -> &Slot {
        &self.pair[side.index()]
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    fn with_winner(&self, winner: Option<Slot>) -> Self {
        Self {
            pair: self.pair.clone(),
            winner,
        }
    }

    fn with_slot(&self, position: usize, slot: Slot) -> Self {
        let mut pair = self.pair.clone();
        pair[position] = slot;
        Self {
            pair,
            winner: self.winner.clone(),
        }
    }
}

/// Single-elimination bracket: ordered rounds of ordered matches.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bracket {
    rounds: Vec<Vec<Arc<Match>>>,
}

impl Bracket {
    pub fn new(rounds: Vec<Vec<Match>>) -> Self {
        Self {
            rounds: rounds
                .into_iter()
                .map(|round| round.into_iter().map(Arc::new).collect())
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Number of rounds.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn rounds(&self) -> &[Vec<Arc<Match>>] {
        &self.rounds
    }

    pub fn round(&self, round: usize) -> Option<&[Arc<Match>]> {
        self.rounds.get(round).map(Vec::as_slice)
    }

    pub fn get(&self, coord: MatchCoord) -> Option<&Arc<Match>> {
        self.rounds.get(coord.round)?.get(coord.index)
    }

    pub fn contains(&self, coord: MatchCoord) -> bool {
        self.get(coord).is_some()
    }

    /// Coordinate after `coord` in play order, rolling over into the next round.
    /// None when `coord` was the final match.
    pub fn next_coord(&self, coord: MatchCoord) -> Option<MatchCoord> {
        let round_len = self.rounds.get(coord.round).map_or(0, Vec::len);
        let next = if coord.index + 1 < round_len {
            MatchCoord::new(coord.round, coord.index + 1)
        } else {
            MatchCoord::new(coord.round + 1, 0)
        };
        self.contains(next).then_some(next)
    }

    /// Write `winner` into the match at `coord` and into its successor slot, if any.
    /// Returns false (and changes nothing) when `coord` is out of range or already decided.
    pub fn record_winner(&mut self, coord: MatchCoord, winner: Slot) -> bool {
        let updated = match self.get(coord) {
            Some(m) if !m.is_decided() => m.with_winner(Some(winner.clone())),
            _ => return false,
        };
        self.replace(coord, updated);
        let (next, position) = coord.successor();
        if let Some(next_match) = self.get(next) {
            let updated = next_match.with_slot(position, winner);
            self.replace(next, updated);
        }
        true
    }

    /// Undo `record_winner`: the match at `coord` becomes undecided again and its
    /// successor slot goes back to a pending placeholder.
    pub fn retract_winner(&mut self, coord: MatchCoord) -> bool {
        let updated = match self.get(coord) {
            Some(m) if m.is_decided() => m.with_winner(None),
            _ => return false,
        };
        self.replace(coord, updated);
        let (next, position) = coord.successor();
        if let Some(next_match) = self.get(next) {
            let updated = next_match.with_slot(
                position,
                Slot::Pending {
                    round: coord.round,
                    index: coord.index,
                },
            );
            self.replace(next, updated);
        }
        true
    }

    fn replace(&mut self, coord: MatchCoord, m: Match) {
        if let Some(slot) = self
            .rounds
            .get_mut(coord.round)
            .and_then(|round| round.get_mut(coord.index))
        {
            *slot = Arc::new(m);
        }
    }
}
