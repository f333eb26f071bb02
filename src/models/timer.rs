//! Match countdown clock.
//!
//! The timer only knows about its own fields. It is driven from outside by
//! `tick` once per second; the session reacts to the events it returns but
//! the timer never looks at scores.

use serde::{Deserialize, Serialize};

/// Default match duration in seconds.
pub const DEFAULT_MATCH_SECONDS: u32 = 180;

/// Remaining time at which the one-shot warning fires.
pub const WARNING_AT_SECONDS: u32 = 30;

/// Selectable match durations must fall in this range.
pub const MIN_MATCH_SECONDS: u32 = 30;
pub const MAX_MATCH_SECONDS: u32 = 600;

/// Something notable that happened during a tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerEvent {
    ThirtySecondWarning,
    /// Reached zero; the clock has stopped itself.
    Expired,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    pub selected_seconds: u32,
    pub remaining_seconds: u32,
    pub is_running: bool,
    #[serde(default)]
    warning_fired: bool,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_SECONDS)
    }
}

impl Timer {
    pub fn new(seconds: u32) -> Self {
        Self {
            selected_seconds: seconds,
            remaining_seconds: seconds,
            is_running: false,
            warning_fired: false,
        }
    }

    /// Choose a new duration; stops the clock and refills it.
    pub fn select(&mut self, seconds: u32) {
        *self = Self::new(seconds);
    }

    /// Start (or resume) the countdown. Returns false when there is no time left.
    pub fn start(&mut self) -> bool {
        if self.remaining_seconds == 0 {
            return false;
        }
        self.is_running = true;
        true
    }

    pub fn stop(&mut self) {
        self.is_running = false;
    }

    /// Stop and refill to the selected duration.
    pub fn reset(&mut self) {
        let selected = self.selected_seconds;
        self.select(selected);
    }

    /// Advance one second while running.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.is_running || self.remaining_seconds == 0 {
            return None;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.is_running = false;
            return Some(TimerEvent::Expired);
        }
        if self.remaining_seconds == WARNING_AT_SECONDS && !self.warning_fired {
            self.warning_fired = true;
            return Some(TimerEvent::ThirtySecondWarning);
        }
        None
    }
}
