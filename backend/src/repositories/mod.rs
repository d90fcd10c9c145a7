//! Database repositories
//!
//! Provides the data access layer for database operations.

pub mod catalog;
pub mod user;
pub mod workout;

pub use catalog::{CatalogRepository, ExerciseRecord, MuscleGroupRecord};
pub use user::{SettingsRecord, UpdateSettings, UserRepository};
pub use workout::{
    CreateWorkout, SetRecord, UpsertSet, UpdateWorkout, WorkoutRepository, WorkoutRecord,
};
