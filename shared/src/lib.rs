//! Heavylight Shared Library
//!
//! Domain logic shared between the backend and the browser (via the wasm
//! crate): the fixed Heavy/Light/Medium program templates, the
//! workout-session state machine, calendar/streak/volume aggregation, the
//! rest-timer countdown, and the API types.

pub mod calendar;
pub mod models;
pub mod program;
pub mod session;
pub mod timer;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use models::{DayType, ExerciseKind};
pub use session::{SessionPhase, WorkoutSession};
pub use units::WeightUnit;
