//! Training settings service
//!
//! Settings are created lazily on first access with the program defaults
//! (week 1, deload every 5 weeks, 120/60/120 s rest, kg).

use crate::error::ApiError;
use crate::repositories::{SettingsRecord, UpdateSettings, UserRepository};
use heavylight_shared::models::DayType;
use heavylight_shared::types::{SettingsResponse, UpdateSettingsRequest};
use heavylight_shared::units::WeightUnit;
use sqlx::PgPool;
use uuid::Uuid;

/// Settings service
pub struct SettingsService;

impl SettingsService {
    /// Fetch settings, creating the default row on first access
    pub async fn get(pool: &PgPool, user_id: Uuid) -> Result<SettingsResponse, ApiError> {
        let record = UserRepository::get_or_create_settings(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::to_response(record))
    }

    /// Partially update settings, creating the row first if needed
    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        req: UpdateSettingsRequest,
    ) -> Result<SettingsResponse, ApiError> {
        if let Some(week) = req.current_week {
            if week < 1 {
                return Err(ApiError::Validation(
                    "Current week must be at least 1".to_string(),
                ));
            }
        }
        if let Some(weeks) = req.weeks_until_deload {
            if weeks < 1 {
                return Err(ApiError::Validation(
                    "Weeks until deload must be at least 1".to_string(),
                ));
            }
        }
        for rest in [
            req.heavy_rest_seconds,
            req.light_rest_seconds,
            req.medium_rest_seconds,
        ]
        .into_iter()
        .flatten()
        {
            if !(0..=3600).contains(&rest) {
                return Err(ApiError::Validation(
                    "Rest period must be between 0 and 3600 seconds".to_string(),
                ));
            }
        }
        if let Some(ref unit) = req.weight_unit {
            unit.parse::<WeightUnit>().map_err(ApiError::Validation)?;
        }

        // Ensure the row exists before the partial update
        UserRepository::get_or_create_settings(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let record = UserRepository::update_settings(
            pool,
            user_id,
            UpdateSettings {
                current_week: req.current_week,
                weeks_until_deload: req.weeks_until_deload,
                heavy_rest_seconds: req.heavy_rest_seconds,
                light_rest_seconds: req.light_rest_seconds,
                medium_rest_seconds: req.medium_rest_seconds,
                weight_unit: req.weight_unit,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(Self::to_response(record))
    }

    /// Rest period for a day type, from a settings record
    pub fn rest_seconds_for(record: &SettingsRecord, day_type: DayType) -> i32 {
        match day_type {
            DayType::Heavy => record.heavy_rest_seconds,
            DayType::Light => record.light_rest_seconds,
            DayType::Medium => record.medium_rest_seconds,
        }
    }

    /// Display unit from a settings record, defaulting to kg on bad data
    pub fn display_unit(record: &SettingsRecord) -> WeightUnit {
        record.weight_unit.parse().unwrap_or_default()
    }

    fn to_response(record: SettingsRecord) -> SettingsResponse {
        SettingsResponse {
            current_week: record.current_week,
            weeks_until_deload: record.weeks_until_deload,
            heavy_rest_seconds: record.heavy_rest_seconds,
            light_rest_seconds: record.light_rest_seconds,
            medium_rest_seconds: record.medium_rest_seconds,
            weight_unit: record.weight_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(unit: &str) -> SettingsRecord {
        SettingsRecord {
            user_id: Uuid::new_v4(),
            current_week: 1,
            weeks_until_deload: 5,
            heavy_rest_seconds: 120,
            light_rest_seconds: 60,
            medium_rest_seconds: 120,
            weight_unit: unit.to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_rest_seconds_per_day_type() {
        let settings = record("kg");
        assert_eq!(
            SettingsService::rest_seconds_for(&settings, DayType::Heavy),
            120
        );
        assert_eq!(
            SettingsService::rest_seconds_for(&settings, DayType::Light),
            60
        );
        assert_eq!(
            SettingsService::rest_seconds_for(&settings, DayType::Medium),
            120
        );
    }

    #[test]
    fn test_display_unit_falls_back_to_kg() {
        assert_eq!(SettingsService::display_unit(&record("lbs")), WeightUnit::Lbs);
        assert_eq!(SettingsService::display_unit(&record("kg")), WeightUnit::Kg);
        assert_eq!(SettingsService::display_unit(&record("bogus")), WeightUnit::Kg);
    }
}
