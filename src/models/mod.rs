//! Data structures for kumite scoring: competitors, bracket, scores, history, session.

mod bracket;
mod competitor;
mod history;
mod outcome;
mod score;
mod session;
mod timer;

pub use bracket::{Bracket, Match, MatchCoord};
pub use competitor::{Competitor, CompetitorId, Slot, BYE_LABEL, PENDING_LABEL};
pub use history::{HistoryEntry, HistoryLedger};
pub use outcome::MatchOutcome;
pub use score::{ScoreField, ScoreState, ScoreValue, Scores, Side};
pub use session::{KumiteError, MatchSession, SessionId};
pub use timer::{
    Timer, TimerEvent, DEFAULT_MATCH_SECONDS, MAX_MATCH_SECONDS, MIN_MATCH_SECONDS,
    WARNING_AT_SECONDS,
};
