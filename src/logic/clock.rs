//! Timer commands against the session clock.

use crate::models::{KumiteError, MatchSession, TimerEvent, MAX_MATCH_SECONDS, MIN_MATCH_SECONDS};

/// Choose the match duration; the clock stops and is refilled.
pub fn select_time(session: &mut MatchSession, seconds: u32) -> Result<(), KumiteError> {
    if !(MIN_MATCH_SECONDS..=MAX_MATCH_SECONDS).contains(&seconds) {
        return Err(KumiteError::InvalidTime(seconds));
    }
    session.timer.select(seconds);
    Ok(())
}

pub fn start_timer(session: &mut MatchSession) -> Result<(), KumiteError> {
    if session.timer.start() {
        Ok(())
    } else {
        Err(KumiteError::NoTimeLeft)
    }
}

pub fn stop_timer(session: &mut MatchSession) {
    session.timer.stop();
}

pub fn reset_timer(session: &mut MatchSession) {
    session.timer.reset();
}

/// One second of clock time. Expiry stops the clock but never decides the match.
pub fn tick_timer(session: &mut MatchSession) -> Option<TimerEvent> {
    let event = session.timer.tick();
    match event {
        Some(TimerEvent::ThirtySecondWarning) => log::info!("30 seconds left"),
        Some(TimerEvent::Expired) => log::info!(
            "Time up in match ({}, {})",
            session.cursor.round,
            session.cursor.index
        ),
        None => {}
    }
    event
}
