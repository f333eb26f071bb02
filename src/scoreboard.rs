//! Scoreboard: the command surface over one MatchSession.
//!
//! Every applied command is followed by a display snapshot and a write-through
//! to storage. Refused commands change nothing and emit nothing.

use crate::config::KumiteConfig;
use crate::display::{DisplaySink, DisplaySnapshot};
use crate::logic::{
    advance_to_next_match, declare_winner, import_entrants, record_penalty, record_point,
    reset_timer, reset_tournament, select_time, start_timer, stop_timer, tick_timer,
    undo_last_action, EntrantList,
};
use crate::models::{
    Bracket, KumiteError, MatchCoord, MatchOutcome, MatchSession, ScoreField, Scores, Side,
    TimerEvent,
};
use crate::storage::{
    self, SessionStore, KEY_BRACKET, KEY_CONFIG, KEY_CURSOR, KEY_OUTCOME, KEY_SCORES,
};
use serde::{Deserialize, Serialize};

/// A user-facing action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Command {
    SelectTime {
        seconds: u32,
    },
    StartTimer,
    StopTimer,
    ResetTimer,
    /// Wazari or ippon.
    RecordPoint {
        side: Side,
        kind: ScoreField,
    },
    /// Penalty flag; `value` defaults to true.
    RecordPenalty {
        side: Side,
        kind: ScoreField,
        #[serde(default)]
        value: Option<bool>,
    },
    /// Hantei: judges award the match.
    DeclareWinner {
        side: Side,
        #[serde(default)]
        name: Option<String>,
    },
    DismissWinner,
    AdvanceToNextMatch,
    UndoLastAction,
    ResetTournament,
    SetArea {
        area: String,
    },
    UpdateConfig {
        config: KumiteConfig,
    },
}

pub struct Scoreboard {
    session: MatchSession,
    sink: Box<dyn DisplaySink>,
    store: Box<dyn SessionStore>,
}

impl Scoreboard {
    /// Fresh session with `config`; nothing is read from `store`.
    pub fn new(
        config: KumiteConfig,
        sink: Box<dyn DisplaySink>,
        store: Box<dyn SessionStore>,
    ) -> Self {
        Self {
            session: MatchSession::new(config),
            sink,
            store,
        }
    }

    /// Rebuild the session from whatever `store` holds. Missing or unreadable
    /// keys fall back to first-run defaults; a cursor outside the bracket goes
    /// back to the first match.
    pub fn restore(sink: Box<dyn DisplaySink>, store: Box<dyn SessionStore>) -> Self {
        let config = storage::load::<KumiteConfig>(&*store, KEY_CONFIG)
            .filter(|c| c.validate().is_ok())
            .unwrap_or_default()
            .with_env_overrides();

        let mut session = match storage::load::<Bracket>(&*store, KEY_BRACKET) {
            Some(bracket) => MatchSession::with_bracket(config, bracket),
            None => MatchSession::new(config),
        };
        if let Some(cursor) = storage::load::<MatchCoord>(&*store, KEY_CURSOR) {
            if session.bracket.contains(cursor) {
                session.cursor = cursor;
            } else {
                log::warn!(
                    "Stored cursor ({}, {}) is outside the bracket; starting at the first match",
                    cursor.round,
                    cursor.index
                );
            }
        }
        match storage::load::<Scores>(&*store, KEY_SCORES) {
            Some(scores) => session.scores = scores,
            None => session.prime_display_names(),
        }
        if let Some(outcome) = storage::load::<MatchOutcome>(&*store, KEY_OUTCOME) {
            session.outcome = outcome;
        }
        log::info!(
            "Session {} ready at match ({}, {})",
            session.id,
            session.cursor.round,
            session.cursor.index
        );

        Self {
            session,
            sink,
            store,
        }
    }

    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::from_session(&self.session)
    }

    /// Apply `command`. On `Err` the session is unchanged; callers treat that as a no-op.
    pub fn execute(&mut self, command: Command) -> Result<(), KumiteError> {
        let result = self.apply(&command);
        match &result {
            Ok(()) => self.mirror(),
            Err(e) => log::debug!("Ignored {:?}: {}", command, e),
        }
        result
    }

    fn apply(&mut self, command: &Command) -> Result<(), KumiteError> {
        let session = &mut self.session;
        match command {
            Command::SelectTime { seconds } => select_time(session, *seconds),
            Command::StartTimer => start_timer(session),
            Command::StopTimer => {
                stop_timer(session);
                Ok(())
            }
            Command::ResetTimer => {
                reset_timer(session);
                Ok(())
            }
            Command::RecordPoint { side, kind } => record_point(session, *side, *kind),
            Command::RecordPenalty { side, kind, value } => {
                record_penalty(session, *side, *kind, *value)
            }
            Command::DeclareWinner { side, name } => {
                declare_winner(session, *side, name.as_deref())
            }
            Command::DismissWinner => {
                session.dismiss_winner();
                Ok(())
            }
            Command::AdvanceToNextMatch => advance_to_next_match(session).map(|_| ()),
            Command::UndoLastAction => undo_last_action(session).map(|_| ()),
            Command::ResetTournament => {
                reset_tournament(session);
                Ok(())
            }
            Command::SetArea { area } => session.set_area(area),
            Command::UpdateConfig { config } => session.update_config(config.clone()),
        }
    }

    /// Replace the bracket with `list`. Returns the number of competitors loaded.
    pub fn import_entrants(&mut self, list: EntrantList) -> usize {
        let count = import_entrants(&mut self.session, list);
        self.mirror();
        count
    }

    /// One second of clock time. Publishes only while the clock was running.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.session.timer.is_running {
            return None;
        }
        let event = tick_timer(&mut self.session);
        self.sink.publish(&self.snapshot());
        event
    }

    fn mirror(&mut self) {
        self.sink.publish(&self.snapshot());

        let store = &mut *self.store;
        storage::save(store, KEY_CONFIG, &self.session.config);
        storage::save(store, KEY_BRACKET, &self.session.bracket);
        storage::save(store, KEY_SCORES, &self.session.scores);
        storage::save(store, KEY_CURSOR, &self.session.cursor);
        storage::save(store, KEY_OUTCOME, &self.session.outcome);
    }
}
