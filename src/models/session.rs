//! MatchSession and KumiteError.

use crate::config::KumiteConfig;
use crate::logic::default_bracket;
use crate::models::bracket::{Bracket, Match, MatchCoord};
use crate::models::history::HistoryLedger;
use crate::models::outcome::MatchOutcome;
use crate::models::score::{ScoreField, Scores, Side};
use crate::models::timer::Timer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Operations the session refuses. All of them leave the session untouched and
/// are reachable through ordinary rapid input, so callers treat them as no-ops.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KumiteError {
    /// The current match already has a winner.
    MatchDecided,
    /// Undo with an empty history.
    NothingToUndo,
    /// Advance past the final match.
    TournamentComplete,
    /// The bracket has no match at the cursor (empty bracket).
    NoCurrentMatch,
    /// A penalty ladder step was set before its predecessor, or cleared before its successor.
    PenaltyOutOfOrder { field: ScoreField },
    /// Explicit value of the wrong type for the field.
    ValueMismatch { field: ScoreField },
    /// Action kind or side name not recognised.
    UnknownAction(String),
    /// The named side holds a BYE or an undecided slot.
    ByeCannotWin,
    /// Area already chosen for this tournament.
    AreaLocked,
    /// Area name empty after trimming.
    BlankArea,
    InvalidConfig(String),
    /// Match duration outside the selectable range.
    InvalidTime(u32),
    /// Start requested with the clock at zero.
    NoTimeLeft,
}

impl std::fmt::Display for KumiteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KumiteError::MatchDecided => write!(f, "Match already has a winner"),
            KumiteError::NothingToUndo => write!(f, "Nothing to undo"),
            KumiteError::TournamentComplete => write!(f, "Tournament is complete"),
            KumiteError::NoCurrentMatch => write!(f, "No match at the current position"),
            KumiteError::PenaltyOutOfOrder { field } => {
                write!(f, "Penalty {} is out of ladder order", field)
            }
            KumiteError::ValueMismatch { field } => {
                write!(f, "Value does not fit field {}", field)
            }
            KumiteError::UnknownAction(name) => write!(f, "Unknown action {:?}", name),
            KumiteError::ByeCannotWin => write!(f, "A BYE or undecided slot cannot win"),
            KumiteError::AreaLocked => write!(f, "Area is already locked"),
            KumiteError::BlankArea => write!(f, "Area name is empty"),
            KumiteError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            KumiteError::InvalidTime(secs) => write!(f, "Invalid match duration: {}s", secs),
            KumiteError::NoTimeLeft => write!(f, "No time left on the clock"),
        }
    }
}

impl std::error::Error for KumiteError {}

/// Identifier of a tournament session; a new one is minted on every reset.
pub type SessionId = Uuid;

/// Everything about the tournament being scored: bracket, cursor, live scores,
/// outcome, undo history and clock.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSession {
    pub id: SessionId,
    pub config: KumiteConfig,
    pub bracket: Bracket,
    /// Match being fought.
    pub cursor: MatchCoord,
    pub scores: Scores,
    pub outcome: MatchOutcome,
    pub history: HistoryLedger,
    pub timer: Timer,
}

impl MatchSession {
    /// Fresh session on the two-placeholder (AKA vs SHIRO) bracket.
    pub fn new(config: KumiteConfig) -> Self {
        Self::with_bracket(config, default_bracket())
    }

    /// Fresh session on `bracket`, cursor at the first match.
    pub fn with_bracket(config: KumiteConfig, bracket: Bracket) -> Self {
        let timer = Timer::new(config.match_duration);
        let mut session = Self {
            id: Uuid::new_v4(),
            config,
            bracket,
            cursor: MatchCoord::START,
            scores: Scores::default(),
            outcome: MatchOutcome::default(),
            history: HistoryLedger::new(),
            timer,
        };
        session.prime_display_names();
        session
    }

    pub fn current_match(&self) -> Option<&Arc<Match>> {
        self.bracket.get(self.cursor)
    }

    /// Match after the current one in play order.
    pub fn next_match(&self) -> Option<&Arc<Match>> {
        self.bracket
            .next_coord(self.cursor)
            .and_then(|coord| self.bracket.get(coord))
    }

    pub fn is_decided(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Copy the current pairing's slot labels into both score states.
    pub fn prime_display_names(&mut self) {
        let names = self
            .current_match()
            .map(|m| [m.pair[0].label().to_string(), m.pair[1].label().to_string()]);
        if let Some([aka, shiro]) = names {
            self.scores.aka.display_name = aka;
            self.scores.shiro.display_name = shiro;
        }
    }

    /// Zero both score states, reopen the outcome, drop history and refill the clock.
    pub fn reset_live_state(&mut self) {
        self.scores = Scores::default();
        self.outcome.clear_winner();
        self.history.clear();
        self.timer.reset();
        self.prime_display_names();
    }

    /// Points of one side (`wazari * 0.5 + ippon`).
    pub fn points(&self, side: Side) -> f64 {
        self.scores.side(side).points()
    }

    /// Record the competition area (trimmed) and lock it. A blank name is refused
    /// and leaves the area unlocked.
    pub fn set_area(&mut self, area: &str) -> Result<(), KumiteError> {
        if self.outcome.is_area_locked {
            return Err(KumiteError::AreaLocked);
        }
        let area = area.trim();
        if area.is_empty() {
            return Err(KumiteError::BlankArea);
        }
        self.outcome.area = area.to_string();
        self.outcome.is_area_locked = true;
        Ok(())
    }

    /// Close the winner dialog; the match stays decided.
    pub fn dismiss_winner(&mut self) {
        self.outcome.is_winner_dialog_open = false;
    }

    /// Replace the configuration. Takes effect at the next evaluation; the
    /// current match is not re-evaluated.
    pub fn update_config(&mut self, config: KumiteConfig) -> Result<(), KumiteError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }
}
