//! Rest-timer countdown
//!
//! A one-shot countdown between sets, driven by explicit one-second ticks so
//! the host (browser event loop or test) owns the clock. Reaching zero emits
//! a single `Finished` edge; after a short grace display the timer asks to be
//! dismissed.

use serde::{Deserialize, Serialize};

/// Seconds the finished state stays visible before auto-dismiss
pub const FINISH_GRACE_SECONDS: u32 = 2;

/// Countdown lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Created or reset, not counting
    Ready,
    Running,
    Paused,
    /// Reached zero; grace window ticking
    Finished,
    Dismissed,
}

/// Edge produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Countdown still in progress
    Counting,
    /// The countdown just hit zero; play the cue
    Finished,
    /// Grace window elapsed; hide the timer
    AutoDismiss,
    /// Tick ignored (not running)
    Idle,
}

/// One-shot rest countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestTimer {
    initial_seconds: u32,
    remaining_seconds: u32,
    grace_remaining: u32,
    state: TimerState,
}

impl RestTimer {
    pub fn new(initial_seconds: u32) -> Self {
        Self {
            initial_seconds,
            remaining_seconds: initial_seconds,
            grace_remaining: FINISH_GRACE_SECONDS,
            state: TimerState::Ready,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Fraction elapsed, 0.0 at start to 1.0 at zero
    pub fn progress(&self) -> f64 {
        if self.initial_seconds == 0 {
            return 1.0;
        }
        f64::from(self.initial_seconds - self.remaining_seconds) / f64::from(self.initial_seconds)
    }

    pub fn start(&mut self) {
        if matches!(self.state, TimerState::Ready | TimerState::Paused) {
            self.state = if self.remaining_seconds == 0 {
                TimerState::Finished
            } else {
                TimerState::Running
            };
        }
    }

    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    /// Back to the full duration, not counting
    pub fn reset(&mut self) {
        self.remaining_seconds = self.initial_seconds;
        self.grace_remaining = FINISH_GRACE_SECONDS;
        self.state = TimerState::Ready;
    }

    pub fn dismiss(&mut self) {
        self.state = TimerState::Dismissed;
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> TickEvent {
        match self.state {
            TimerState::Running => {
                self.remaining_seconds -= 1;
                if self.remaining_seconds == 0 {
                    self.state = TimerState::Finished;
                    TickEvent::Finished
                } else {
                    TickEvent::Counting
                }
            }
            TimerState::Finished => {
                if self.grace_remaining > 0 {
                    self.grace_remaining -= 1;
                }
                if self.grace_remaining == 0 {
                    self.state = TimerState::Dismissed;
                    TickEvent::AutoDismiss
                } else {
                    TickEvent::Counting
                }
            }
            _ => TickEvent::Idle,
        }
    }
}

/// Format seconds as `m:ss` for display
pub fn format_seconds(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
