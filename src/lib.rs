//! Kumite scoring: single-elimination bracket, live score and penalty state,
//! automatic and manual winner resolution, undo history.

pub mod config;
pub mod display;
pub mod logic;
pub mod models;
pub mod scoreboard;
pub mod storage;

pub use config::{KumiteConfig, DEFAULT_WIN_THRESHOLD, WKF_WIN_THRESHOLD};
pub use display::{ChannelBroadcaster, DisplaySink, DisplaySnapshot, NullSink};
pub use logic::{
    advance_to_next_match, apply_action, build_bracket, declare_winner, default_bracket,
    evaluate_winner, import_entrants, import_entrants_csv, load_entrants, parse_entrants,
    record_penalty, record_point, reset_timer, reset_tournament, select_time, start_timer,
    stop_timer, threshold_winner, tick_timer, undo_last_action, Entrant, EntrantList, ImportError,
};
pub use models::{
    Bracket, Competitor, CompetitorId, HistoryEntry, HistoryLedger, KumiteError, Match,
    MatchCoord, MatchOutcome, MatchSession, ScoreField, ScoreState, ScoreValue, Scores,
    SessionId, Side, Slot, Timer, TimerEvent,
};
pub use scoreboard::{Command, Scoreboard};
pub use storage::{JsonFileStore, MemoryStore, SessionStore, StorageError};
