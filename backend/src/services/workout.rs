//! Workout service
//!
//! Owns the workout lifecycle: conditional creation, resumption, set logging
//! with canonical-kg storage, completion at the 21st template set, and
//! missed-day tagging. Completion decisions go through the shared
//! [`WorkoutSession`] state machine, rehydrated from persisted sets.

use crate::error::ApiError;
use crate::repositories::{
    CatalogRepository, CreateWorkout, SetRecord, UpsertSet, UpdateWorkout, UserRepository,
    WorkoutRecord, WorkoutRepository,
};
use crate::services::settings::SettingsService;
use chrono::Utc;
use heavylight_shared::models::DayType;
use heavylight_shared::program::{self, SETS_PER_EXERCISE};
use heavylight_shared::session::{SessionPhase, WorkoutSession};
use heavylight_shared::types::{
    ClearMissedRequest, ClearMissedResponse, CreateWorkoutRequest, LogSetRequest, LogSetResponse,
    SessionProgress, TagMissedRequest, UpdateWorkoutRequest, WorkoutListQuery, WorkoutResponse,
    WorkoutSetResponse,
};
use heavylight_shared::units::WeightUnit;
use heavylight_shared::validation::{
    parse_civil_date, validate_color_token, validate_reps, validate_weight_kg,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Day type recorded on placeholder rows created by missed-day tagging
const MISSED_PLACEHOLDER_DAY_TYPE: DayType = DayType::Medium;

/// Workout service for the session lifecycle
pub struct WorkoutService;

impl WorkoutService {
    /// Create a workout for a day type. The insert is conditional on the
    /// active-workout unique index; a second creation for the same day
    /// type/day surfaces as a conflict instead of a duplicate.
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateWorkoutRequest,
    ) -> Result<WorkoutResponse, ApiError> {
        let date = req.date.unwrap_or_else(|| Utc::now().date_naive());

        let input = CreateWorkout {
            user_id,
            date,
            day_type: req.day_type.as_str().to_string(),
            is_deload: req.is_deload,
            notes: req.notes,
        };

        let workout = WorkoutRepository::create_active(pool, &input)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| {
                ApiError::Conflict(format!(
                    "An active {} workout already exists for {}",
                    req.day_type, date
                ))
            })?;

        let unit = Self::display_unit(pool, user_id).await?;
        Self::to_response(workout, Vec::new(), unit)
    }

    /// List workouts, newest first. With `day_type` and `active=true` the
    /// result narrows to today's active workout of that type (zero or one
    /// entries), which is how a client resumes a session.
    pub async fn list(
        pool: &PgPool,
        user_id: Uuid,
        query: WorkoutListQuery,
    ) -> Result<Vec<WorkoutResponse>, ApiError> {
        let unit = Self::display_unit(pool, user_id).await?;

        if query.active.unwrap_or(false) {
            let day_type = query.day_type.ok_or_else(|| {
                ApiError::Validation("day_type is required when filtering active".to_string())
            })?;
            let today = Utc::now().date_naive();

            let active =
                WorkoutRepository::find_active(pool, user_id, day_type.as_str(), today)
                    .await
                    .map_err(ApiError::Internal)?;

            return match active {
                Some(workout) => {
                    let sets = WorkoutRepository::sets_for_workout(pool, workout.id)
                        .await
                        .map_err(ApiError::Internal)?;
                    Ok(vec![Self::to_response(workout, sets, unit)?])
                }
                None => Ok(Vec::new()),
            };
        }

        let workouts = WorkoutRepository::list_for_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let mut responses = Vec::with_capacity(workouts.len());
        for workout in workouts {
            let sets = WorkoutRepository::sets_for_workout(pool, workout.id)
                .await
                .map_err(ApiError::Internal)?;
            responses.push(Self::to_response(workout, sets, unit)?);
        }
        Ok(responses)
    }

    /// Fetch one workout with its sets, scoped to the owner
    pub async fn get(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<WorkoutResponse, ApiError> {
        let workout = WorkoutRepository::get_by_id(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))?;

        let sets = WorkoutRepository::sets_for_workout(pool, workout.id)
            .await
            .map_err(ApiError::Internal)?;

        let unit = Self::display_unit(pool, user_id).await?;
        Self::to_response(workout, sets, unit)
    }

    /// Partially update a workout
    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        req: UpdateWorkoutRequest,
    ) -> Result<WorkoutResponse, ApiError> {
        let updates = UpdateWorkout {
            completed: req.completed,
            is_deload: req.is_deload,
            notes: req.notes,
        };

        let workout = WorkoutRepository::update(pool, id, user_id, &updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))?;

        let sets = WorkoutRepository::sets_for_workout(pool, workout.id)
            .await
            .map_err(ApiError::Internal)?;

        let unit = Self::display_unit(pool, user_id).await?;
        Self::to_response(workout, sets, unit)
    }

    /// Delete a workout and its sets
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = WorkoutRepository::delete(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Workout not found".to_string()));
        }
        Ok(())
    }

    /// Log one set against an open workout.
    ///
    /// The weight arrives in the client's unit and is stored canonically in
    /// kilograms. Re-logging a (exercise, set_number) pair overwrites. The
    /// set upsert and the completion transition commit in one transaction,
    /// with completion decided by the session machine over the persisted
    /// sets, so the count can never be inflated past 21.
    pub async fn log_set(
        pool: &PgPool,
        user_id: Uuid,
        req: LogSetRequest,
    ) -> Result<LogSetResponse, ApiError> {
        let workout_id = Uuid::parse_str(&req.workout_id)
            .map_err(|_| ApiError::Validation("Invalid workout id".to_string()))?;

        let workout = WorkoutRepository::get_by_id(pool, workout_id, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))?;

        if workout.completed {
            return Err(ApiError::Conflict(
                "Workout is already completed".to_string(),
            ));
        }
        if workout.missed_reason.is_some() {
            return Err(ApiError::Conflict(
                "Workout is tagged as missed".to_string(),
            ));
        }

        let day_type = Self::parse_day_type(&workout)?;

        if !(1..=SETS_PER_EXERCISE).contains(&req.set_number) {
            return Err(ApiError::Validation(format!(
                "Set number must be between 1 and {}",
                SETS_PER_EXERCISE
            )));
        }

        let input_unit = match req.unit.as_deref() {
            Some(s) => s.parse::<WeightUnit>().map_err(ApiError::Validation)?,
            None => WeightUnit::Kg,
        };
        let weight_kg = input_unit.to_kg(req.weight);
        validate_weight_kg(weight_kg).map_err(ApiError::Validation)?;
        validate_reps(req.reps).map_err(ApiError::Validation)?;

        let group = CatalogRepository::muscle_group_by_slug(pool, &req.muscle_group)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Unknown muscle group: {}", req.muscle_group))
            })?;

        // Catalog exercises keep their seeded classification; a new name
        // under a known group defaults to isolation.
        let kind = program::catalog_exercise(&group.slug, &req.exercise_name)
            .map(|e| e.kind.as_str())
            .unwrap_or("isolation");

        let exercise = CatalogRepository::get_or_create_exercise(
            pool,
            group.id,
            &req.exercise_name,
            kind,
            None,
            None,
        )
        .await
        .map_err(ApiError::Internal)?;

        let mut tx = pool.begin().await.map_err(ApiError::Database)?;

        let set_id = WorkoutRepository::upsert_set(
            &mut *tx,
            &UpsertSet {
                workout_id,
                exercise_id: exercise.id,
                set_number: req.set_number,
                weight_kg,
                reps: req.reps,
                target_reps: req.target_reps,
                notes: req.notes,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        // Rehydrate the session from what is now persisted; sets naming an
        // exercise outside today's template do not advance completion.
        let sets = WorkoutRepository::sets_for_workout(&mut *tx, workout_id)
            .await
            .map_err(ApiError::Internal)?;
        let session = Self::session_from_sets(day_type, &sets);

        let workout_completed = session.phase() == SessionPhase::Complete;
        if workout_completed {
            WorkoutRepository::mark_completed(&mut *tx, workout_id)
                .await
                .map_err(ApiError::Internal)?;
            info!(workout_id = %workout_id, "Workout completed");
        }

        tx.commit().await.map_err(ApiError::Database)?;

        let settings = UserRepository::get_or_create_settings(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let unit = SettingsService::display_unit(&settings);

        let set = WorkoutRepository::get_set(pool, set_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("Logged set vanished")))?;

        Ok(LogSetResponse {
            set: Self::set_to_response(&set, unit),
            progress: SessionProgress {
                completed_count: session.completed_count(),
                total_sets: session.total_sets(),
                workout_completed,
                rest_seconds: SettingsService::rest_seconds_for(&settings, day_type),
            },
        })
    }

    /// Tag a civil day as missed. Reuses the day's workout row when one
    /// exists; otherwise creates a placeholder. Returns the workout and
    /// whether a row was created.
    pub async fn tag_missed(
        pool: &PgPool,
        user_id: Uuid,
        req: TagMissedRequest,
    ) -> Result<(WorkoutResponse, bool), ApiError> {
        let date = parse_civil_date(&req.date).map_err(ApiError::Validation)?;
        if let Some(ref color) = req.color {
            validate_color_token(color).map_err(ApiError::Validation)?;
        }

        let existing = WorkoutRepository::find_by_date(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?;

        let (workout, created) = match existing {
            Some(workout) => {
                let updated = WorkoutRepository::set_missed(
                    pool,
                    workout.id,
                    req.reason.as_deref(),
                    req.color.as_deref(),
                )
                .await
                .map_err(ApiError::Internal)?;
                (updated, false)
            }
            None => {
                let created = WorkoutRepository::create_missed(
                    pool,
                    user_id,
                    date,
                    MISSED_PLACEHOLDER_DAY_TYPE.as_str(),
                    req.reason.as_deref(),
                    req.color.as_deref(),
                )
                .await
                .map_err(ApiError::Internal)?;
                (created, true)
            }
        };

        let sets = WorkoutRepository::sets_for_workout(pool, workout.id)
            .await
            .map_err(ApiError::Internal)?;
        let unit = Self::display_unit(pool, user_id).await?;

        Ok((Self::to_response(workout, sets, unit)?, created))
    }

    /// Untag a missed day. A placeholder that carries no sets and was never
    /// completed is deleted outright; a row with logged work only has its
    /// tag cleared.
    pub async fn clear_missed(
        pool: &PgPool,
        user_id: Uuid,
        req: ClearMissedRequest,
    ) -> Result<ClearMissedResponse, ApiError> {
        let date = parse_civil_date(&req.date).map_err(ApiError::Validation)?;

        let Some(workout) = WorkoutRepository::find_by_date(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?
        else {
            return Ok(ClearMissedResponse {
                deleted: false,
                workout: None,
            });
        };

        let set_count = WorkoutRepository::count_sets(pool, workout.id)
            .await
            .map_err(ApiError::Internal)?;

        if set_count == 0 && !workout.completed {
            WorkoutRepository::delete(pool, workout.id, user_id)
                .await
                .map_err(ApiError::Internal)?;
            return Ok(ClearMissedResponse {
                deleted: true,
                workout: None,
            });
        }

        let cleared = WorkoutRepository::clear_missed(pool, workout.id)
            .await
            .map_err(ApiError::Internal)?;
        let sets = WorkoutRepository::sets_for_workout(pool, cleared.id)
            .await
            .map_err(ApiError::Internal)?;
        let unit = Self::display_unit(pool, user_id).await?;

        Ok(ClearMissedResponse {
            deleted: false,
            workout: Some(Self::to_response(cleared, sets, unit)?),
        })
    }

    /// Rehydrate a session from persisted set rows
    pub(crate) fn session_from_sets(day_type: DayType, sets: &[SetRecord]) -> WorkoutSession {
        WorkoutSession::resume(
            day_type,
            sets.iter()
                .filter(|s| s.completed)
                .map(|s| (s.exercise_name.as_str(), s.set_number)),
        )
    }

    pub(crate) fn parse_day_type(workout: &WorkoutRecord) -> Result<DayType, ApiError> {
        workout
            .day_type
            .parse::<DayType>()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))
    }

    pub(crate) fn to_response(
        workout: WorkoutRecord,
        sets: Vec<SetRecord>,
        unit: WeightUnit,
    ) -> Result<WorkoutResponse, ApiError> {
        let day_type = Self::parse_day_type(&workout)?;

        Ok(WorkoutResponse {
            id: workout.id.to_string(),
            date: workout.date,
            day_type,
            completed: workout.completed,
            is_deload: workout.is_deload,
            notes: workout.notes,
            missed_reason: workout.missed_reason,
            missed_reason_color: workout.missed_reason_color,
            sets: sets.iter().map(|s| Self::set_to_response(s, unit)).collect(),
        })
    }

    pub(crate) fn set_to_response(set: &SetRecord, unit: WeightUnit) -> WorkoutSetResponse {
        let weight_kg = decimal_to_f64(&set.weight_kg);
        WorkoutSetResponse {
            id: set.id.to_string(),
            exercise_name: set.exercise_name.clone(),
            muscle_group: set.muscle_group_slug.clone(),
            set_number: set.set_number,
            weight: unit.from_kg(weight_kg),
            unit: unit.to_string(),
            weight_kg,
            reps: set.reps,
            target_reps: set.target_reps.clone(),
            completed: set.completed,
            notes: set.notes.clone(),
        }
    }

    async fn display_unit(pool: &PgPool, user_id: Uuid) -> Result<WeightUnit, ApiError> {
        let settings = UserRepository::get_or_create_settings(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        Ok(SettingsService::display_unit(&settings))
    }
}

/// Lossy NUMERIC to f64 for API responses
pub(crate) fn decimal_to_f64(value: &Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
