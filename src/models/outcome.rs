//! MatchOutcome: the "is this match finished" authority plus match labels.

use crate::models::score::Side;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    /// Set once the match is decided; every scoring action is ignored while set.
    pub winner_side: Option<Side>,
    pub winner_name: String,
    pub is_winner_dialog_open: bool,
    /// Category label from the entrant import.
    pub category: String,
    pub area: String,
    pub is_area_locked: bool,
}

impl MatchOutcome {
    pub fn is_decided(&self) -> bool {
        self.winner_side.is_some()
    }

    pub fn decide(&mut self, side: Side, name: impl Into<String>) {
        self.winner_side = Some(side);
        self.winner_name = name.into();
        self.is_winner_dialog_open = true;
    }

    /// Back to a live match. Category and area are kept.
    pub fn clear_winner(&mut self) {
        self.winner_side = None;
        self.winner_name.clear();
        self.is_winner_dialog_open = false;
    }
}
