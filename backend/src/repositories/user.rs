//! User and settings repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Training settings record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SettingsRecord {
    pub user_id: Uuid,
    pub current_week: i32,
    pub weeks_until_deload: i32,
    pub heavy_rest_seconds: i32,
    pub light_rest_seconds: i32,
    pub medium_rest_seconds: i32,
    pub weight_unit: String,
    pub updated_at: DateTime<Utc>,
}

/// Input for updating settings; None leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateSettings {
    pub current_week: Option<i32>,
    pub weeks_until_deload: Option<i32>,
    pub heavy_rest_seconds: Option<i32>,
    pub light_rest_seconds: Option<i32>,
    pub medium_rest_seconds: Option<i32>,
    pub weight_unit: Option<String>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(pool: &PgPool, email: &str, password_hash: &str) -> Result<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Check if email exists
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// Get settings for a user, creating the row with defaults on first
    /// access. The defaults live in the table definition so a concurrent
    /// first access is a harmless no-op insert.
    pub async fn get_or_create_settings(pool: &PgPool, user_id: Uuid) -> Result<SettingsRecord> {
        sqlx::query(
            r#"
            INSERT INTO user_settings (user_id)
            VALUES ($1)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .execute(pool)
        .await?;

        let settings = sqlx::query_as::<_, SettingsRecord>(
            r#"
            SELECT user_id, current_week, weeks_until_deload,
                   heavy_rest_seconds, light_rest_seconds, medium_rest_seconds,
                   weight_unit, updated_at
            FROM user_settings
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(settings)
    }

    /// Partially update settings
    pub async fn update_settings(
        pool: &PgPool,
        user_id: Uuid,
        updates: UpdateSettings,
    ) -> Result<SettingsRecord> {
        let settings = sqlx::query_as::<_, SettingsRecord>(
            r#"
            UPDATE user_settings SET
                current_week = COALESCE($2, current_week),
                weeks_until_deload = COALESCE($3, weeks_until_deload),
                heavy_rest_seconds = COALESCE($4, heavy_rest_seconds),
                light_rest_seconds = COALESCE($5, light_rest_seconds),
                medium_rest_seconds = COALESCE($6, medium_rest_seconds),
                weight_unit = COALESCE($7, weight_unit),
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING user_id, current_week, weeks_until_deload,
                      heavy_rest_seconds, light_rest_seconds, medium_rest_seconds,
                      weight_unit, updated_at
            "#,
        )
        .bind(user_id)
        .bind(updates.current_week)
        .bind(updates.weeks_until_deload)
        .bind(updates.heavy_rest_seconds)
        .bind(updates.light_rest_seconds)
        .bind(updates.medium_rest_seconds)
        .bind(updates.weight_unit)
        .fetch_one(pool)
        .await?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
