//! API request and response types

use crate::calendar::{CalendarCell, MuscleVolume};
use crate::models::{DayType, ExerciseKind};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Auth
// ============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Settings
// ============================================================================

/// Per-user training settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub current_week: i32,
    pub weeks_until_deload: i32,
    pub heavy_rest_seconds: i32,
    pub light_rest_seconds: i32,
    pub medium_rest_seconds: i32,
    pub weight_unit: String,
}

/// Partial settings update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_week: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks_until_deload: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heavy_rest_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_rest_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium_rest_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,
}

// ============================================================================
// Exercises
// ============================================================================

/// Catalog exercise response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub id: String,
    pub name: String,
    pub muscle_group: String,
    pub muscle_group_name: String,
    pub kind: ExerciseKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Create a catalog exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExerciseRequest {
    pub name: String,
    pub muscle_group: String,
    pub kind: ExerciseKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Exercise list filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExerciseListQuery {
    pub muscle_group: Option<String>,
}

// ============================================================================
// Workouts
// ============================================================================

/// Create a workout for a day type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutRequest {
    pub day_type: DayType,
    /// Civil day; defaults to today (UTC) when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub is_deload: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial workout update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWorkoutRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Workout list filter: `?day_type=heavy&active=true` narrows to today's
/// active (incomplete, not missed) workout of that type
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutListQuery {
    pub day_type: Option<DayType>,
    pub active: Option<bool>,
}

/// One logged set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSetResponse {
    pub id: String,
    pub exercise_name: String,
    pub muscle_group: String,
    pub set_number: i32,
    /// Weight in the user's display unit
    pub weight: f64,
    pub unit: String,
    /// Canonical stored weight
    pub weight_kg: f64,
    pub reps: i32,
    pub target_reps: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Workout with its sets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub id: String,
    pub date: NaiveDate,
    pub day_type: DayType,
    pub completed: bool,
    pub is_deload: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missed_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missed_reason_color: Option<String>,
    pub sets: Vec<WorkoutSetResponse>,
}

// ============================================================================
// Set logging
// ============================================================================

/// Log one set against a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSetRequest {
    pub workout_id: String,
    pub exercise_name: String,
    pub muscle_group: String,
    pub set_number: i32,
    /// Weight in `unit` (defaults to kg); stored canonically in kg
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub reps: i32,
    pub target_reps: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Session progress after a set is logged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionProgress {
    pub completed_count: i32,
    pub total_sets: i32,
    pub workout_completed: bool,
    /// Rest period that applies after this set, from the user's settings
    pub rest_seconds: i32,
}

/// Response to logging a set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSetResponse {
    pub set: WorkoutSetResponse,
    pub progress: SessionProgress,
}

// ============================================================================
// Missed days
// ============================================================================

/// Tag a calendar day as missed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagMissedRequest {
    /// Civil day, `YYYY-MM-DD`
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Untag a missed day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearMissedRequest {
    pub date: String,
}

/// Untag outcome: the placeholder row is deleted when it carried no work
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearMissedResponse {
    pub deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout: Option<WorkoutResponse>,
}

// ============================================================================
// Stats
// ============================================================================

/// Calendar window query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarQuery {
    pub weeks: Option<u32>,
}

/// Calendar grid with streak summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// Sunday-aligned weeks of seven cells each
    pub weeks: Vec<Vec<CalendarCell>>,
    pub streak: u32,
    pub total_workouts: usize,
}

/// Trailing-7-day volume per muscle group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeResponse {
    pub muscle_groups: Vec<MuscleVolume>,
}

// ============================================================================
// History
// ============================================================================

/// A workout in the history view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryWorkout {
    pub id: String,
    pub date: NaiveDate,
    pub day_type: DayType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub set_count: usize,
    /// Sum of weight x reps across sets, in the display unit
    pub volume: f64,
    pub sets: Vec<WorkoutSetResponse>,
}

/// One Sunday-start week of history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryWeek {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub workout_count: usize,
    pub set_count: usize,
    pub volume: f64,
    pub workouts: Vec<HistoryWorkout>,
}

/// Week-grouped workout history with trailing-week stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub weeks: Vec<HistoryWeek>,
    pub workouts_this_week: usize,
    pub sets_this_week: usize,
    pub volume_this_week: f64,
    pub weight_unit: String,
}
