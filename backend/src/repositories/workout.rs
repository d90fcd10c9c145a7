//! Workout and set repository
//!
//! Workouts live on civil days (DATE column). The partial unique index on
//! (user_id, day_type, date) for open workouts makes "one active workout per
//! day type per day" a database invariant; creation is a conditional insert,
//! never read-then-write. Sets are unique per (workout, exercise, set_number)
//! and re-logging overwrites.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

/// Workout record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub day_type: String,
    pub completed: bool,
    pub is_deload: bool,
    pub notes: Option<String>,
    pub missed_reason: Option<String>,
    pub missed_reason_color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Set record joined with its exercise and muscle group
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SetRecord {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub muscle_group_slug: String,
    pub set_number: i32,
    pub weight_kg: Decimal,
    pub reps: i32,
    pub target_reps: String,
    pub completed: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a workout
#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub day_type: String,
    pub is_deload: bool,
    pub notes: Option<String>,
}

/// Input for partially updating a workout
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkout {
    pub completed: Option<bool>,
    pub is_deload: Option<bool>,
    pub notes: Option<String>,
}

/// Input for upserting a set
#[derive(Debug, Clone)]
pub struct UpsertSet {
    pub workout_id: Uuid,
    pub exercise_id: Uuid,
    pub set_number: i32,
    pub weight_kg: f64,
    pub reps: i32,
    pub target_reps: String,
    pub notes: Option<String>,
}

const WORKOUT_COLUMNS: &str = r#"
    id, user_id, date, day_type, completed, is_deload, notes,
    missed_reason, missed_reason_color, created_at, updated_at
"#;

const SET_COLUMNS: &str = r#"
    s.id, s.workout_id, s.exercise_id, e.name AS exercise_name,
    g.slug AS muscle_group_slug, s.set_number, s.weight_kg, s.reps,
    s.target_reps, s.completed, s.notes, s.created_at
"#;

/// Workout repository for database operations
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Conditionally create an active workout. Returns None when an active
    /// (incomplete, not missed) workout for that user/day type/day already
    /// exists; the partial unique index decides, so concurrent creators
    /// cannot both win.
    pub async fn create_active(
        pool: &PgPool,
        input: &CreateWorkout,
    ) -> Result<Option<WorkoutRecord>> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            INSERT INTO workouts (user_id, date, day_type, is_deload, notes)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, day_type, date)
                WHERE NOT completed AND missed_reason IS NULL
                DO NOTHING
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(input.user_id)
        .bind(input.date)
        .bind(&input.day_type)
        .bind(input.is_deload)
        .bind(&input.notes)
        .fetch_optional(pool)
        .await?;

        Ok(workout)
    }

    /// Create a placeholder row for a day tagged missed with no workout.
    /// Missed rows carry a reason, so they fall outside the active-workout
    /// partial index.
    pub async fn create_missed(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
        day_type: &str,
        reason: Option<&str>,
        color: Option<&str>,
    ) -> Result<WorkoutRecord> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            INSERT INTO workouts
                (user_id, date, day_type, completed, missed_reason, missed_reason_color)
            VALUES ($1, $2, $3, FALSE, $4, $5)
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(date)
        .bind(day_type)
        .bind(reason)
        .bind(color)
        .fetch_one(pool)
        .await?;

        Ok(workout)
    }

    /// Find the active (incomplete, not missed) workout for a day type on a
    /// given day
    pub async fn find_active(
        pool: &PgPool,
        user_id: Uuid,
        day_type: &str,
        date: NaiveDate,
    ) -> Result<Option<WorkoutRecord>> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            SELECT {WORKOUT_COLUMNS}
            FROM workouts
            WHERE user_id = $1 AND day_type = $2 AND date = $3
              AND NOT completed AND missed_reason IS NULL
            "#
        ))
        .bind(user_id)
        .bind(day_type)
        .bind(date)
        .fetch_optional(pool)
        .await?;

        Ok(workout)
    }

    /// Find any workout on a civil day (used by missed-day tagging)
    pub async fn find_by_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<WorkoutRecord>> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            SELECT {WORKOUT_COLUMNS}
            FROM workouts
            WHERE user_id = $1 AND date = $2
            ORDER BY created_at ASC
            LIMIT 1
            "#
        ))
        .bind(user_id)
        .bind(date)
        .fetch_optional(pool)
        .await?;

        Ok(workout)
    }

    /// Get a workout by ID, scoped to its owner
    pub async fn get_by_id(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<WorkoutRecord>> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            SELECT {WORKOUT_COLUMNS}
            FROM workouts
            WHERE id = $1 AND user_id = $2
            "#
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(workout)
    }

    /// List all workouts for a user, newest first
    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutRecord>> {
        let workouts = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            SELECT {WORKOUT_COLUMNS}
            FROM workouts
            WHERE user_id = $1
            ORDER BY date DESC, created_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(workouts)
    }

    /// List completed workouts for a user, newest first, bounded
    pub async fn list_completed(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<WorkoutRecord>> {
        let workouts = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            SELECT {WORKOUT_COLUMNS}
            FROM workouts
            WHERE user_id = $1 AND completed
            ORDER BY date DESC, created_at DESC
            LIMIT $2
            "#
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(workouts)
    }

    /// Partially update a workout, scoped to its owner
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        updates: &UpdateWorkout,
    ) -> Result<Option<WorkoutRecord>> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            UPDATE workouts SET
                completed = COALESCE($3, completed),
                is_deload = COALESCE($4, is_deload),
                notes = COALESCE($5, notes),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(updates.completed)
        .bind(updates.is_deload)
        .bind(&updates.notes)
        .fetch_optional(pool)
        .await?;

        Ok(workout)
    }

    /// Mark a workout completed
    pub async fn mark_completed<'e, E: PgExecutor<'e>>(executor: E, id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE workouts
            SET completed = TRUE, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Tag a workout as missed
    pub async fn set_missed(
        pool: &PgPool,
        id: Uuid,
        reason: Option<&str>,
        color: Option<&str>,
    ) -> Result<WorkoutRecord> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            UPDATE workouts SET
                missed_reason = $2,
                missed_reason_color = $3,
                completed = FALSE,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(reason)
        .bind(color)
        .fetch_one(pool)
        .await?;

        Ok(workout)
    }

    /// Clear the missed tag, leaving everything else untouched
    pub async fn clear_missed(pool: &PgPool, id: Uuid) -> Result<WorkoutRecord> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            UPDATE workouts SET
                missed_reason = NULL,
                missed_reason_color = NULL,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(workout)
    }

    /// Delete a workout, scoped to its owner; sets cascade
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM workouts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Sets for one workout, in exercise/set order
    pub async fn sets_for_workout<'e, E: PgExecutor<'e>>(
        executor: E,
        workout_id: Uuid,
    ) -> Result<Vec<SetRecord>> {
        let sets = sqlx::query_as::<_, SetRecord>(&format!(
            r#"
            SELECT {SET_COLUMNS}
            FROM workout_sets s
            JOIN exercises e ON e.id = s.exercise_id
            JOIN muscle_groups g ON g.id = e.muscle_group_id
            WHERE s.workout_id = $1
            ORDER BY e.name ASC, s.set_number ASC
            "#
        ))
        .bind(workout_id)
        .fetch_all(executor)
        .await?;

        Ok(sets)
    }

    /// Count of sets on a workout (distinct by construction)
    pub async fn count_sets<'e, E: PgExecutor<'e>>(executor: E, workout_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM workout_sets WHERE workout_id = $1
            "#,
        )
        .bind(workout_id)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    /// Upsert one set. The unique constraint on (workout_id, exercise_id,
    /// set_number) means a re-log overwrites the previous entry instead of
    /// appending, so completion counting can never be inflated.
    pub async fn upsert_set<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &UpsertSet,
    ) -> Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO workout_sets
                (workout_id, exercise_id, set_number, weight_kg, reps, target_reps, completed, notes)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7)
            ON CONFLICT (workout_id, exercise_id, set_number) DO UPDATE SET
                weight_kg = EXCLUDED.weight_kg,
                reps = EXCLUDED.reps,
                target_reps = EXCLUDED.target_reps,
                completed = TRUE,
                notes = EXCLUDED.notes
            RETURNING id
            "#,
        )
        .bind(input.workout_id)
        .bind(input.exercise_id)
        .bind(input.set_number)
        .bind(input.weight_kg)
        .bind(input.reps)
        .bind(&input.target_reps)
        .bind(&input.notes)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    /// Fetch one set with its exercise join
    pub async fn get_set(pool: &PgPool, set_id: Uuid) -> Result<Option<SetRecord>> {
        let set = sqlx::query_as::<_, SetRecord>(&format!(
            r#"
            SELECT {SET_COLUMNS}
            FROM workout_sets s
            JOIN exercises e ON e.id = s.exercise_id
            JOIN muscle_groups g ON g.id = e.muscle_group_id
            WHERE s.id = $1
            "#
        ))
        .bind(set_id)
        .fetch_optional(pool)
        .await?;

        Ok(set)
    }

    /// Completed sets with their workout dates over a trailing window,
    /// grouped client-side into per-muscle weekly volume
    pub async fn completed_sets_since(
        pool: &PgPool,
        user_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<(String, NaiveDate)>> {
        let rows = sqlx::query_as::<_, (String, NaiveDate)>(
            r#"
            SELECT g.slug, w.date
            FROM workout_sets s
            JOIN workouts w ON w.id = s.workout_id
            JOIN exercises e ON e.id = s.exercise_id
            JOIN muscle_groups g ON g.id = e.muscle_group_id
            WHERE w.user_id = $1 AND s.completed AND w.date >= $2
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
