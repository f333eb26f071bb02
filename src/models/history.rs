//! HistoryEntry and the append-only HistoryLedger used for undo.

use crate::models::score::{ScoreField, ScoreValue, Side};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One applied scoring action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub side: Side,
    pub action_kind: ScoreField,
    pub description: String,
    pub previous_value: ScoreValue,
    pub new_value: ScoreValue,
}

/// Scoring actions of the current match, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
    next_id: u64,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry for `side.field: previous -> new`. Returns the new entry's id.
    pub fn record(
        &mut self,
        side: Side,
        field: ScoreField,
        previous_value: ScoreValue,
        new_value: ScoreValue,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(HistoryEntry {
            id,
            timestamp: Utc::now(),
            side,
            action_kind: field,
            description: field.describe(new_value),
            previous_value,
            new_value,
        });
        id
    }

    /// Remove and return the most recent entry.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
