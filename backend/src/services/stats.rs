//! Calendar and volume statistics service
//!
//! Thin database wrapper over the shared aggregation functions; all the date
//! math lives in `heavylight_shared::calendar` so the browser computes the
//! same answers.

use crate::error::ApiError;
use crate::repositories::WorkoutRepository;
use chrono::{Days, Utc};
use heavylight_shared::calendar::{
    build_grid, current_streak, weekly_volume, WorkoutDay, DEFAULT_WEEKS,
};
use heavylight_shared::types::{CalendarResponse, VolumeResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// Upper bound on the calendar window
const MAX_WEEKS: u32 = 52;

/// Stats service for calendar and volume aggregation
pub struct StatsService;

impl StatsService {
    /// Calendar grid with streak and completed-workout count for the window
    pub async fn calendar(
        pool: &PgPool,
        user_id: Uuid,
        weeks: Option<u32>,
    ) -> Result<CalendarResponse, ApiError> {
        let weeks = weeks.unwrap_or(DEFAULT_WEEKS).clamp(1, MAX_WEEKS);
        let today = Utc::now().date_naive();

        let records = WorkoutRepository::list_for_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let days: Vec<WorkoutDay> = records
            .into_iter()
            .filter_map(|w| {
                let day_type = w.day_type.parse().ok()?;
                Some(WorkoutDay {
                    date: w.date,
                    day_type,
                    completed: w.completed,
                    missed_reason: w.missed_reason,
                    missed_reason_color: w.missed_reason_color,
                })
            })
            .collect();

        let grid = build_grid(&days, weeks, today);
        let streak = current_streak(&days, today);

        let window_start = grid
            .first()
            .and_then(|week| week.first())
            .map(|cell| cell.date)
            .unwrap_or(today);
        let total_workouts = days
            .iter()
            .filter(|d| d.completed && d.date >= window_start && d.date <= today)
            .count();

        Ok(CalendarResponse {
            weeks: grid,
            streak,
            total_workouts,
        })
    }

    /// Completed sets per muscle group over the trailing seven days
    pub async fn volume(pool: &PgPool, user_id: Uuid) -> Result<VolumeResponse, ApiError> {
        let today = Utc::now().date_naive();
        let since = today - Days::new(6);

        let rows = WorkoutRepository::completed_sets_since(pool, user_id, since)
            .await
            .map_err(ApiError::Internal)?;

        let muscle_groups =
            weekly_volume(rows.iter().map(|(slug, date)| (slug.as_str(), *date)), today);

        Ok(VolumeResponse { muscle_groups })
    }
}

#[cfg(test)]
mod tests {
    // The aggregation logic itself is tested in heavylight_shared::calendar;
    // endpoint behavior is covered by the integration tests.
}
