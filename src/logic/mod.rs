//! Kumite business logic: bracket building, scoring, winner resolution,
//! progression, undo, clock and entrant import.

mod bracket_builder;
mod clock;
mod import;
mod progression;
mod resolution;
mod scoring;
mod undo;

pub use bracket_builder::{build_bracket, default_bracket};
pub use clock::{reset_timer, select_time, start_timer, stop_timer, tick_timer};
pub use import::{
    import_entrants, import_entrants_csv, parse_entrants, Entrant, EntrantList, ImportError,
};
pub use progression::{advance_to_next_match, load_entrants, reset_tournament};
pub use resolution::{declare_winner, evaluate_winner, threshold_winner};
pub use scoring::{apply_action, record_penalty, record_point};
pub use undo::undo_last_action;
