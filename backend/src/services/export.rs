//! Training-data export service
//!
//! Exports the user's completed-workout sets as CSV, weights in canonical
//! kilograms so the file re-imports without unit ambiguity.

use crate::error::ApiError;
use crate::repositories::WorkoutRepository;
use crate::services::workout::decimal_to_f64;
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Hard bound on exported workouts
const EXPORT_LIMIT: i64 = 10_000;

/// One CSV row: a logged set with its workout context
#[derive(Debug, Serialize)]
struct SetCsvRow {
    date: NaiveDate,
    day_type: String,
    exercise: String,
    muscle_group: String,
    set_number: i32,
    weight_kg: f64,
    reps: i32,
    target_reps: String,
    notes: String,
}

/// Export service
pub struct ExportService;

impl ExportService {
    /// Export all completed sets as CSV
    pub async fn export_sets_csv(pool: &PgPool, user_id: Uuid) -> Result<String, ApiError> {
        let workouts = WorkoutRepository::list_completed(pool, user_id, EXPORT_LIMIT)
            .await
            .map_err(ApiError::Internal)?;

        let mut writer = csv::Writer::from_writer(Vec::new());

        for workout in workouts {
            let sets = WorkoutRepository::sets_for_workout(pool, workout.id)
                .await
                .map_err(ApiError::Internal)?;

            for set in sets {
                writer
                    .serialize(SetCsvRow {
                        date: workout.date,
                        day_type: workout.day_type.clone(),
                        exercise: set.exercise_name,
                        muscle_group: set.muscle_group_slug,
                        set_number: set.set_number,
                        weight_kg: decimal_to_f64(&set.weight_kg),
                        reps: set.reps,
                        target_reps: set.target_reps,
                        notes: set.notes.unwrap_or_default(),
                    })
                    .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV write error: {}", e)))?;
            }
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV flush error: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV encoding error: {}", e)))
    }
}
