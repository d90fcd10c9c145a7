//! Workout-session state machine
//!
//! A session tracks which sets of a day's fixed template have been logged and
//! decides when the workout is complete. It is an explicit reducer:
//! `Idle -> Active -> Complete | Missed`, with no other transitions.
//!
//! The backend drives the same type when resuming a persisted workout, so
//! "is this workout done" has exactly one implementation.

use crate::models::DayType;
use crate::program::{self, EXERCISES_PER_DAY, SETS_PER_EXERCISE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// No sets logged yet
    Idle,
    /// At least one set logged, not all
    Active,
    /// Every template set logged; terminal
    Complete,
    /// Explicitly tagged as missed; terminal
    Missed,
}

/// Errors from invalid session transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("exercise index {0} is outside the 7-exercise template")]
    ExerciseOutOfRange(usize),

    #[error("set number {0} is outside the 3-set template range")]
    SetNumberOutOfRange(i32),

    #[error("session is already closed ({0:?})")]
    Closed(SessionPhase),
}

/// Outcome of logging one set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOutcome {
    /// False when the pair was already logged (idempotent re-log)
    pub newly_logged: bool,
    /// True exactly when this log completed the workout
    pub just_completed: bool,
}

/// In-memory state of one workout session
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    day_type: DayType,
    logged: BTreeSet<(usize, i32)>,
    phase: SessionPhase,
}

impl WorkoutSession {
    /// Start an empty session for a day type
    pub fn new(day_type: DayType) -> Self {
        Self {
            day_type,
            logged: BTreeSet::new(),
            phase: SessionPhase::Idle,
        }
    }

    /// Rehydrate a session from persisted sets, matching each set's exercise
    /// name against the day's template. Sets referencing an exercise not in
    /// the template are silently dropped.
    pub fn resume<'a, I>(day_type: DayType, sets: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        let mut session = Self::new(day_type);
        for (exercise_name, set_number) in sets {
            if let Some(index) = program::template_index(day_type, exercise_name) {
                let _ = session.log_set(index, set_number);
            }
        }
        session
    }

    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Total sets in the template (always 21)
    pub fn total_sets(&self) -> i32 {
        program::total_sets()
    }

    /// Distinct (exercise, set) pairs logged so far
    pub fn completed_count(&self) -> i32 {
        self.logged.len() as i32
    }

    /// Fraction complete, reaching 1.0 exactly at the final set
    pub fn progress(&self) -> f64 {
        f64::from(self.completed_count()) / f64::from(self.total_sets())
    }

    pub fn is_set_logged(&self, exercise_index: usize, set_number: i32) -> bool {
        self.logged.contains(&(exercise_index, set_number))
    }

    /// Log one set. Idempotent: re-logging an already-logged pair reports
    /// `newly_logged: false` and never double-counts.
    pub fn log_set(
        &mut self,
        exercise_index: usize,
        set_number: i32,
    ) -> Result<LogOutcome, SessionError> {
        match self.phase {
            SessionPhase::Idle | SessionPhase::Active => {}
            closed => return Err(SessionError::Closed(closed)),
        }
        if exercise_index >= EXERCISES_PER_DAY {
            return Err(SessionError::ExerciseOutOfRange(exercise_index));
        }
        if !(1..=SETS_PER_EXERCISE).contains(&set_number) {
            return Err(SessionError::SetNumberOutOfRange(set_number));
        }

        let newly_logged = self.logged.insert((exercise_index, set_number));
        let just_completed = self.completed_count() == self.total_sets();
        self.phase = if just_completed {
            SessionPhase::Complete
        } else {
            SessionPhase::Active
        };

        Ok(LogOutcome {
            newly_logged,
            just_completed,
        })
    }

    /// Tag the session as missed. Only reachable before completion.
    pub fn mark_missed(&mut self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Idle | SessionPhase::Active => {
                self.phase = SessionPhase::Missed;
                Ok(())
            }
            closed => Err(SessionError::Closed(closed)),
        }
    }
}
