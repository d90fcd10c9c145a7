//! Muscle-group and exercise reference data repository
//!
//! Muscle groups are a fixed, seeded table keyed by stable slugs. Exercises
//! are seeded from the default catalog; new names can be added under an
//! existing group but groups themselves never change at runtime.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Muscle group record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MuscleGroupRecord {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
}

/// Exercise record joined with its muscle group
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub id: Uuid,
    pub name: String,
    pub kind: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub muscle_group_id: Uuid,
    pub muscle_group_slug: String,
    pub muscle_group_name: String,
    pub created_at: DateTime<Utc>,
}

const EXERCISE_COLUMNS: &str = r#"
    e.id, e.name, e.kind, e.description, e.image_url, e.muscle_group_id,
    g.slug AS muscle_group_slug, g.name AS muscle_group_name, e.created_at
"#;

/// Catalog repository for reference-data operations
pub struct CatalogRepository;

impl CatalogRepository {
    /// Find a muscle group by its stable slug
    pub async fn muscle_group_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<MuscleGroupRecord>> {
        let group = sqlx::query_as::<_, MuscleGroupRecord>(
            r#"
            SELECT id, slug, name
            FROM muscle_groups
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(pool)
        .await?;

        Ok(group)
    }

    /// List all exercises, ordered by name
    pub async fn list_exercises(pool: &PgPool) -> Result<Vec<ExerciseRecord>> {
        let exercises = sqlx::query_as::<_, ExerciseRecord>(&format!(
            r#"
            SELECT {EXERCISE_COLUMNS}
            FROM exercises e
            JOIN muscle_groups g ON g.id = e.muscle_group_id
            ORDER BY e.name ASC
            "#
        ))
        .fetch_all(pool)
        .await?;

        Ok(exercises)
    }

    /// List exercises for one muscle group, ordered by name
    pub async fn list_exercises_by_group(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Vec<ExerciseRecord>> {
        let exercises = sqlx::query_as::<_, ExerciseRecord>(&format!(
            r#"
            SELECT {EXERCISE_COLUMNS}
            FROM exercises e
            JOIN muscle_groups g ON g.id = e.muscle_group_id
            WHERE g.slug = $1
            ORDER BY e.name ASC
            "#
        ))
        .bind(slug)
        .fetch_all(pool)
        .await?;

        Ok(exercises)
    }

    /// Find an exercise by muscle group and exact name
    pub async fn find_exercise(
        pool: &PgPool,
        muscle_group_id: Uuid,
        name: &str,
    ) -> Result<Option<ExerciseRecord>> {
        let exercise = sqlx::query_as::<_, ExerciseRecord>(&format!(
            r#"
            SELECT {EXERCISE_COLUMNS}
            FROM exercises e
            JOIN muscle_groups g ON g.id = e.muscle_group_id
            WHERE e.muscle_group_id = $1 AND e.name = $2
            "#
        ))
        .bind(muscle_group_id)
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(exercise)
    }

    /// Get an exercise by (group, name), creating it when absent. The unique
    /// constraint on (muscle_group_id, name) makes a concurrent first use
    /// converge on one row.
    pub async fn get_or_create_exercise(
        pool: &PgPool,
        muscle_group_id: Uuid,
        name: &str,
        kind: &str,
        description: Option<&str>,
        image_url: Option<&str>,
    ) -> Result<ExerciseRecord> {
        sqlx::query(
            r#"
            INSERT INTO exercises (muscle_group_id, name, kind, description, image_url)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (muscle_group_id, name) DO NOTHING
            "#,
        )
        .bind(muscle_group_id)
        .bind(name)
        .bind(kind)
        .bind(description)
        .bind(image_url)
        .execute(pool)
        .await?;

        let exercise = Self::find_exercise(pool, muscle_group_id, name)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Exercise vanished after upsert: {}", name))?;

        Ok(exercise)
    }
}
