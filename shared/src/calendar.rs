//! Calendar, streak, and weekly-volume aggregation
//!
//! Every date in this module is a `chrono::NaiveDate` civil day. Timestamps
//! never cross this boundary; callers convert once, at the edge, so the
//! server and the browser agree on what "today" means.

use crate::models::DayType;
use crate::program::{MuscleGroup, MUSCLE_GROUPS, WEEKLY_SET_TARGET};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Default calendar window, in weeks
pub const DEFAULT_WEEKS: u32 = 12;

/// One workout day as the aggregators see it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub date: NaiveDate,
    pub day_type: DayType,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missed_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missed_reason_color: Option<String>,
}

/// Resolved state of one calendar cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum CellState {
    /// Date is after today
    Future,
    /// A completed workout, colored by its day type
    Completed { day_type: DayType },
    /// Explicitly tagged as missed
    Missed {
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    /// No record for this day
    Empty,
}

/// One cell in the week-aligned grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub state: CellState,
    pub is_today: bool,
}

/// Round a date back to the preceding Sunday (identity on Sundays)
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_sunday();
    date - Days::new(u64::from(back))
}

/// Build a Sunday-aligned calendar grid covering the trailing `weeks` weeks.
///
/// The window starts `weeks * 7 - 1` days before `today`, rounded back to a
/// Sunday, and ends at `today` padded forward to Saturday. Every inner vector
/// is one week of exactly seven cells.
pub fn build_grid(workouts: &[WorkoutDay], weeks: u32, today: NaiveDate) -> Vec<Vec<CalendarCell>> {
    let weeks = weeks.max(1);
    let by_date: HashMap<NaiveDate, &WorkoutDay> =
        workouts.iter().map(|w| (w.date, w)).collect();

    let window_start = today - Days::new(u64::from(weeks * 7 - 1));
    let start = week_start(window_start);
    let end = today + Days::new(u64::from(6 - today.weekday().num_days_from_sunday()));

    let mut grid = Vec::new();
    let mut week = Vec::with_capacity(7);
    let mut date = start;
    while date <= end {
        week.push(resolve_cell(date, today, by_date.get(&date).copied()));
        if week.len() == 7 {
            grid.push(std::mem::take(&mut week));
        }
        date = date + Days::new(1);
    }
    grid
}

fn resolve_cell(date: NaiveDate, today: NaiveDate, workout: Option<&WorkoutDay>) -> CalendarCell {
    let state = if date > today {
        CellState::Future
    } else {
        match workout {
            Some(w) if w.completed => CellState::Completed {
                day_type: w.day_type,
            },
            Some(w) if w.missed_reason.is_some() => CellState::Missed {
                color: w.missed_reason_color.clone(),
            },
            _ => CellState::Empty,
        }
    };

    CalendarCell {
        date,
        state,
        is_today: date == today,
    }
}

/// Current-day streak: consecutive civil days with a completed workout,
/// walked backward from the most recent one.
///
/// Zero when the most recent completed workout is more than one day before
/// `today`. Planned rest days are not exempted; the walk breaks at the first
/// gap.
pub fn current_streak(workouts: &[WorkoutDay], today: NaiveDate) -> u32 {
    let completed: HashSet<NaiveDate> = workouts
        .iter()
        .filter(|w| w.completed)
        .map(|w| w.date)
        .collect();

    let Some(latest) = completed.iter().max().copied() else {
        return 0;
    };
    if today.signed_duration_since(latest).num_days() > 1 {
        return 0;
    }

    let mut streak = 0;
    let mut date = latest;
    while completed.contains(&date) {
        streak += 1;
        match date.checked_sub_days(Days::new(1)) {
            Some(prev) => date = prev,
            None => break,
        }
    }
    streak
}

/// Completed-set counts per muscle group over a trailing window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleVolume {
    pub muscle_group: String,
    pub name: String,
    pub sets: i64,
    pub target: i64,
}

/// Sum completed sets per muscle group within the trailing seven civil days
/// (`today - 6 ..= today`), compared against the fixed weekly target.
///
/// `sets` is one entry per completed set: (muscle group slug, workout date).
pub fn weekly_volume<'a, I>(sets: I, today: NaiveDate) -> Vec<MuscleVolume>
where
    I: IntoIterator<Item = (&'a str, NaiveDate)>,
{
    let window_start = today - Days::new(6);
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for (slug, date) in sets {
        if date >= window_start && date <= today {
            *counts.entry(slug).or_default() += 1;
        }
    }

    MUSCLE_GROUPS
        .iter()
        .map(|MuscleGroup { slug, name }| MuscleVolume {
            muscle_group: (*slug).to_string(),
            name: (*name).to_string(),
            sets: counts.get(slug).copied().unwrap_or(0),
            target: WEEKLY_SET_TARGET,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn completed(d: NaiveDate, day_type: DayType) -> WorkoutDay {
        WorkoutDay {
            date: d,
            day_type,
            completed: true,
            missed_reason: None,
            missed_reason_color: None,
        }
    }

    fn missed(d: NaiveDate, color: &str) -> WorkoutDay {
        WorkoutDay {
            date: d,
            day_type: DayType::Medium,
            completed: false,
            missed_reason: Some("Sick".to_string()),
            missed_reason_color: Some(color.to_string()),
        }
    }

    #[test]
    fn test_week_start_is_sunday() {
        // 2024-03-15 is a Friday
        assert_eq!(week_start(date(2024, 3, 15)), date(2024, 3, 10));
        // Sunday maps to itself
        assert_eq!(week_start(date(2024, 3, 10)), date(2024, 3, 10));
    }

    #[test]
    fn test_grid_shape() {
        let today = date(2024, 3, 15); // Friday
        let grid = build_grid(&[], 12, today);

        assert!(!grid.is_empty());
        for week in &grid {
            assert_eq!(week.len(), 7);
        }
        assert_eq!(grid[0][0].date.weekday(), Weekday::Sun);
        assert_eq!(grid.last().unwrap()[6].date.weekday(), Weekday::Sat);
        // Window covers at least the requested span
        let total_cells: usize = grid.iter().map(Vec::len).sum();
        assert!(total_cells >= 12 * 7);
    }

    #[test]
    fn test_grid_cell_states() {
        let today = date(2024, 3, 15);
        let workouts = vec![
            completed(date(2024, 3, 14), DayType::Heavy),
            missed(date(2024, 3, 13), "#f87171"),
        ];
        let grid = build_grid(&workouts, 2, today);
        let cells: Vec<&CalendarCell> = grid.iter().flatten().collect();

        let cell_on = |d: NaiveDate| cells.iter().find(|c| c.date == d).unwrap();

        assert_eq!(
            cell_on(date(2024, 3, 14)).state,
            CellState::Completed { day_type: DayType::Heavy }
        );
        assert_eq!(
            cell_on(date(2024, 3, 13)).state,
            CellState::Missed { color: Some("#f87171".to_string()) }
        );
        assert_eq!(cell_on(date(2024, 3, 12)).state, CellState::Empty);
        assert_eq!(cell_on(date(2024, 3, 16)).state, CellState::Future);
        assert!(cell_on(today).is_today);
    }

    #[test]
    fn test_streak_three_consecutive_days() {
        let today = date(2024, 3, 15);
        let workouts = vec![
            completed(today, DayType::Heavy),
            completed(date(2024, 3, 14), DayType::Light),
            completed(date(2024, 3, 13), DayType::Medium),
        ];
        assert_eq!(current_streak(&workouts, today), 3);
    }

    #[test]
    fn test_streak_allows_yesterday_start() {
        let today = date(2024, 3, 15);
        let workouts = vec![
            completed(date(2024, 3, 14), DayType::Heavy),
            completed(date(2024, 3, 13), DayType::Light),
        ];
        assert_eq!(current_streak(&workouts, today), 2);
    }

    #[test]
    fn test_streak_zero_when_stale() {
        let today = date(2024, 3, 15);
        let workouts = vec![completed(date(2024, 3, 13), DayType::Heavy)];
        assert_eq!(current_streak(&workouts, today), 0);
    }

    #[test]
    fn test_streak_breaks_at_first_gap() {
        let today = date(2024, 3, 15);
        let workouts = vec![
            completed(today, DayType::Heavy),
            completed(date(2024, 3, 14), DayType::Light),
            // Gap on the 13th
            completed(date(2024, 3, 12), DayType::Medium),
            completed(date(2024, 3, 11), DayType::Heavy),
        ];
        assert_eq!(current_streak(&workouts, today), 2);
    }

    #[test]
    fn test_streak_ignores_missed_and_incomplete() {
        let today = date(2024, 3, 15);
        let workouts = vec![
            missed(today, "#f87171"),
            completed(date(2024, 3, 14), DayType::Heavy),
        ];
        assert_eq!(current_streak(&workouts, today), 1);
    }

    #[test]
    fn test_weekly_volume_window() {
        let today = date(2024, 3, 15);
        let sets = vec![
            ("chest", today),
            ("chest", date(2024, 3, 9)),  // exactly 6 days back: inside
            ("chest", date(2024, 3, 8)),  // 7 days back: outside
            ("quads", date(2024, 3, 12)),
        ];
        let volume = weekly_volume(sets, today);

        let by_slug: HashMap<&str, &MuscleVolume> = volume
            .iter()
            .map(|v| (v.muscle_group.as_str(), v))
            .collect();
        assert_eq!(by_slug["chest"].sets, 2);
        assert_eq!(by_slug["quads"].sets, 1);
        assert_eq!(by_slug["biceps"].sets, 0);
        // Every muscle group is reported, even at zero
        assert_eq!(volume.len(), MUSCLE_GROUPS.len());
        assert_eq!(by_slug["chest"].target, WEEKLY_SET_TARGET);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: the grid is always whole weeks and Sunday-aligned
        #[test]
        fn prop_grid_is_sunday_aligned(
            days_offset in 0i64..20000,
            weeks in 1u32..20
        ) {
            let today = date(2000, 1, 1) + Days::new(days_offset as u64);
            let grid = build_grid(&[], weeks, today);

            prop_assert!(grid.iter().all(|w| w.len() == 7));
            prop_assert_eq!(grid[0][0].date.weekday(), Weekday::Sun);

            let total: usize = grid.iter().map(Vec::len).sum();
            prop_assert_eq!(total % 7, 0);
            prop_assert!(total >= weeks as usize * 7);
        }

        /// Property: consecutive completed days ending today always produce a
        /// streak equal to the run length
        #[test]
        fn prop_streak_counts_consecutive_run(run in 1u64..60) {
            let today = date(2024, 6, 1);
            let workouts: Vec<WorkoutDay> = (0..run)
                .map(|i| completed(today - Days::new(i), DayType::Heavy))
                .collect();
            prop_assert_eq!(current_streak(&workouts, today), run as u32);
        }
    }
}
