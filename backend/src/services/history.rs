//! Workout history service
//!
//! Groups completed workouts into Sunday-start weeks with per-week set
//! counts and volume (sum of weight x reps), reported in the user's display
//! unit.

use crate::error::ApiError;
use crate::repositories::{SetRecord, UserRepository, WorkoutRepository};
use crate::services::settings::SettingsService;
use crate::services::workout::{decimal_to_f64, WorkoutService};
use chrono::{Days, Utc};
use heavylight_shared::calendar::week_start;
use heavylight_shared::types::{HistoryResponse, HistoryWeek, HistoryWorkout};
use heavylight_shared::units::WeightUnit;
use sqlx::PgPool;
use uuid::Uuid;

/// Most recent completed workouts shown in the history view
const HISTORY_LIMIT: i64 = 20;

/// History service
pub struct HistoryService;

impl HistoryService {
    /// Week-grouped history of completed workouts, newest first
    pub async fn history(pool: &PgPool, user_id: Uuid) -> Result<HistoryResponse, ApiError> {
        let settings = UserRepository::get_or_create_settings(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let unit = SettingsService::display_unit(&settings);

        let records = WorkoutRepository::list_completed(pool, user_id, HISTORY_LIMIT)
            .await
            .map_err(ApiError::Internal)?;

        let mut workouts = Vec::with_capacity(records.len());
        for record in records {
            let sets = WorkoutRepository::sets_for_workout(pool, record.id)
                .await
                .map_err(ApiError::Internal)?;
            workouts.push(Self::to_history_workout(record, sets, unit)?);
        }

        let today = Utc::now().date_naive();
        let this_week_start = today - Days::new(6);
        let this_week: Vec<&HistoryWorkout> = workouts
            .iter()
            .filter(|w| w.date >= this_week_start && w.date <= today)
            .collect();
        let workouts_this_week = this_week.len();
        let sets_this_week = this_week.iter().map(|w| w.set_count).sum();
        let volume_this_week = this_week.iter().map(|w| w.volume).sum();

        Ok(HistoryResponse {
            weeks: Self::group_by_week(workouts),
            workouts_this_week,
            sets_this_week,
            volume_this_week,
            weight_unit: unit.to_string(),
        })
    }

    fn to_history_workout(
        record: crate::repositories::WorkoutRecord,
        sets: Vec<SetRecord>,
        unit: WeightUnit,
    ) -> Result<HistoryWorkout, ApiError> {
        let day_type = WorkoutService::parse_day_type(&record)?;
        let volume_kg: f64 = sets
            .iter()
            .map(|s| decimal_to_f64(&s.weight_kg) * f64::from(s.reps))
            .sum();

        Ok(HistoryWorkout {
            id: record.id.to_string(),
            date: record.date,
            day_type,
            notes: record.notes,
            set_count: sets.len(),
            volume: unit.from_kg(volume_kg),
            sets: sets
                .iter()
                .map(|s| WorkoutService::set_to_response(s, unit))
                .collect(),
        })
    }

    /// Group a newest-first workout list into Sunday-start weeks, preserving
    /// order
    fn group_by_week(workouts: Vec<HistoryWorkout>) -> Vec<HistoryWeek> {
        let mut weeks: Vec<HistoryWeek> = Vec::new();

        for workout in workouts {
            let start = week_start(workout.date);
            match weeks.last_mut() {
                Some(week) if week.week_start == start => {
                    week.workout_count += 1;
                    week.set_count += workout.set_count;
                    week.volume += workout.volume;
                    week.workouts.push(workout);
                }
                _ => {
                    weeks.push(HistoryWeek {
                        week_start: start,
                        week_end: start + Days::new(6),
                        workout_count: 1,
                        set_count: workout.set_count,
                        volume: workout.volume,
                        workouts: vec![workout],
                    });
                }
            }
        }

        weeks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use heavylight_shared::models::DayType;

    fn history_workout(date: NaiveDate, set_count: usize, volume: f64) -> HistoryWorkout {
        HistoryWorkout {
            id: Uuid::new_v4().to_string(),
            date,
            day_type: DayType::Heavy,
            notes: None,
            set_count,
            volume,
            sets: Vec::new(),
        }
    }

    #[test]
    fn test_group_by_week_splits_on_sunday() {
        // 2024-03-10 is a Sunday; the 9th belongs to the prior week
        let workouts = vec![
            history_workout(NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(), 21, 5000.0),
            history_workout(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(), 21, 4500.0),
            history_workout(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(), 14, 3000.0),
        ];

        let weeks = HistoryService::group_by_week(workouts);

        assert_eq!(weeks.len(), 2);
        assert_eq!(
            weeks[0].week_start,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
        assert_eq!(weeks[0].workout_count, 2);
        assert_eq!(weeks[0].set_count, 42);
        assert!((weeks[0].volume - 9500.0).abs() < f64::EPSILON);
        assert_eq!(
            weeks[1].week_end,
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
        assert_eq!(weeks[1].workout_count, 1);
    }

    #[test]
    fn test_group_by_week_empty() {
        assert!(HistoryService::group_by_week(Vec::new()).is_empty());
    }
}
