//! Competitor and bracket Slot data structures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifier for a competitor: assigned 1, 2, 3, ... in entrant order.
pub type CompetitorId = u32;

/// Label shown for an empty (bye) slot.
pub const BYE_LABEL: &str = "BYE";

/// Label shown for a slot still waiting on an earlier match.
pub const PENDING_LABEL: &str = "--";

/// A competitor in the bracket. Immutable once created.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub id: CompetitorId,
    pub display_name: String,
    pub age: u32,
}

impl Competitor {
    pub fn new(id: CompetitorId, display_name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            age,
        }
    }
}

/// One side of a bracket pairing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot {
    /// A real competitor, shared with the entrant list and other slots.
    Competitor { competitor: Arc<Competitor> },
    /// No competitor. Never wins.
    Bye,
    /// Winner of the match at `(round, index)`, not yet decided.
    Pending { round: usize, index: usize },
}

impl Slot {
    pub fn competitor(competitor: Arc<Competitor>) -> Self {
        Slot::Competitor { competitor }
    }

    /// Name to show for this slot: the competitor's display name, or a placeholder label.
    pub fn label(&self) -> &str {
        match self {
            Slot::Competitor { competitor } => &competitor.display_name,
            Slot::Bye => BYE_LABEL,
            Slot::Pending { .. } => PENDING_LABEL,
        }
    }

    /// True only for a real competitor (a slot that may be declared winner).
    pub fn is_competitor(&self) -> bool {
        matches!(self, Slot::Competitor { .. })
    }

    pub fn as_competitor(&self) -> Option<&Arc<Competitor>> {
        match self {
            Slot::Competitor { competitor } => Some(competitor),
            _ => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
