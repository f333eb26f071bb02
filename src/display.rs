//! Display mirror: snapshots of the session pushed one way to a secondary screen.
//!
//! The sink only publishes. Subscribers get a `Receiver` and nothing that can
//! reach back into the session.

use crate::models::{Match, MatchCoord, MatchOutcome, MatchSession, Scores, SessionId};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Clock state as shown on the display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerView {
    pub is_running: bool,
    pub remaining_seconds: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub cursor: MatchCoord,
    pub current: Option<Match>,
    pub next: Option<Match>,
}

/// Everything the display needs, taken after a state change.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySnapshot {
    pub session_id: SessionId,
    pub scores: Scores,
    pub timer: TimerView,
    pub match_info: MatchInfo,
    pub outcome: MatchOutcome,
}

impl DisplaySnapshot {
    pub fn from_session(session: &MatchSession) -> Self {
        Self {
            session_id: session.id,
            scores: session.scores.clone(),
            timer: TimerView {
                is_running: session.timer.is_running,
                remaining_seconds: session.timer.remaining_seconds,
            },
            match_info: MatchInfo {
                cursor: session.cursor,
                current: session.current_match().map(|m| m.as_ref().clone()),
                next: session.next_match().map(|m| m.as_ref().clone()),
            },
            outcome: session.outcome.clone(),
        }
    }
}

/// Destination for display snapshots. Delivery is best effort.
pub trait DisplaySink: Send + Sync {
    fn publish(&self, snapshot: &DisplaySnapshot);
}

/// Drops every snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DisplaySink for NullSink {
    fn publish(&self, _snapshot: &DisplaySnapshot) {}
}

/// Fans snapshots out over a tokio broadcast channel.
#[derive(Clone, Debug)]
pub struct ChannelBroadcaster {
    sender: broadcast::Sender<DisplaySnapshot>,
}

impl ChannelBroadcaster {
    /// `capacity` snapshots are buffered per slow subscriber before it lags.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DisplaySnapshot> {
        self.sender.subscribe()
    }
}

impl DisplaySink for ChannelBroadcaster {
    fn publish(&self, snapshot: &DisplaySnapshot) {
        if self.sender.send(snapshot.clone()).is_err() {
            log::warn!("No display connected; snapshot not mirrored");
        }
    }
}
