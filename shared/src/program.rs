//! The fixed Heavy/Light/Medium program: muscle groups, exercise catalog,
//! and the three daily workout templates.
//!
//! This is reference data. The database is seeded from the same lists so the
//! templates and the catalog can never drift apart.

use crate::models::{DayType, ExerciseKind};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Sets prescribed per exercise in every template
pub const SETS_PER_EXERCISE: i32 = 3;

/// Exercises per daily template
pub const EXERCISES_PER_DAY: usize = 7;

/// Weekly per-muscle set target (floor of the 9-18 effective range)
pub const WEEKLY_SET_TARGET: i64 = 9;

/// A muscle group in the program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuscleGroup {
    /// Stable slug used as the database key
    pub slug: &'static str,
    /// Display name
    pub name: &'static str,
}

/// All muscle groups, in program order
pub static MUSCLE_GROUPS: [MuscleGroup; 7] = [
    MuscleGroup { slug: "chest", name: "Chest" },
    MuscleGroup { slug: "upper_back", name: "Upper Back" },
    MuscleGroup { slug: "shoulders", name: "Shoulders" },
    MuscleGroup { slug: "quads", name: "Quads" },
    MuscleGroup { slug: "hamstrings", name: "Hamstrings/Glutes" },
    MuscleGroup { slug: "biceps", name: "Biceps" },
    MuscleGroup { slug: "triceps", name: "Triceps" },
];

/// Look up a muscle group by slug
pub fn muscle_group(slug: &str) -> Option<&'static MuscleGroup> {
    MUSCLE_GROUPS.iter().find(|g| g.slug == slug)
}

/// A catalog exercise: name, owning muscle group, classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogExercise {
    pub name: &'static str,
    pub muscle_group: &'static str,
    pub kind: ExerciseKind,
}

macro_rules! catalog {
    ($( $group:literal { compound: [$($c:literal),* $(,)?], isolation: [$($i:literal),* $(,)?] } )*) => {
        &[
            $(
                $( CatalogExercise { name: $c, muscle_group: $group, kind: ExerciseKind::Compound }, )*
                $( CatalogExercise { name: $i, muscle_group: $group, kind: ExerciseKind::Isolation }, )*
            )*
        ]
    };
}

/// The default exercise catalog, by muscle group
pub static EXERCISE_CATALOG: &[CatalogExercise] = catalog! {
    "chest" {
        compound: ["Bench Press", "Incline Bench Press", "DB Bench Press",
                   "DB Incline Bench Press", "Hammer Strength Chest Press",
                   "Machine Chest Press", "Weighted Dips", "Push Ups"],
        isolation: ["Pec Dec", "Cable Crossover", "DB Flyes", "Incline DB Flyes",
                    "Cable Flyes"]
    }
    "upper_back" {
        compound: ["Pull Ups", "Barbell Rows", "DB Rows", "T-Bar Rows",
                   "Hammer Strength DY Row", "Seated Cable Rows", "Lat Pulldowns"],
        isolation: ["Pullover", "DB Pullover", "Straight Arm Pulldowns", "Face Pulls"]
    }
    "shoulders" {
        compound: ["Overhead Press", "Seated Press", "DB Seated Press",
                   "Machine Shoulder Press", "Arnold Press"],
        isolation: ["DB Laterals", "Cable Laterals", "Rear Delt Flyes",
                    "Face Pulls", "Front Raises"]
    }
    "quads" {
        compound: ["Squats", "Leg Press", "Hack Squat", "Front Squat",
                   "Bulgarian Split Squat", "Lunges"],
        isolation: ["Leg Extensions", "Sissy Squats"]
    }
    "hamstrings" {
        compound: ["Romanian Deadlift", "Stiff Leg Deadlift", "DB RDL",
                   "Glute Bridge", "Hip Thrust"],
        isolation: ["Leg Curls", "Seated Leg Curls", "Nordic Leg Curls"]
    }
    "biceps" {
        compound: [],
        isolation: ["Barbell Curl", "DB Curl", "Cable Curl", "Machine Preacher Curl",
                    "Hammer Curl", "Incline DB Curl", "Concentration Curl"]
    }
    "triceps" {
        compound: ["Close Grip Bench Press", "Weighted Dips", "Smith CGBP"],
        isolation: ["Pushdowns", "Overhead Tricep Extension", "DB Overhead Extension",
                    "Skull Crushers", "Cable Kickbacks"]
    }
};

// A few names repeat across groups (e.g. Weighted Dips under chest and
// triceps), so the lookup key is (muscle group, name).
static CATALOG_BY_KEY: Lazy<HashMap<(&'static str, &'static str), &'static CatalogExercise>> =
    Lazy::new(|| {
        EXERCISE_CATALOG
            .iter()
            .map(|e| ((e.muscle_group, e.name), e))
            .collect()
    });

/// Look up a catalog exercise by muscle group and exact name
pub fn catalog_exercise(muscle_group: &str, name: &str) -> Option<&'static CatalogExercise> {
    CATALOG_BY_KEY.get(&(muscle_group, name)).copied()
}

/// One slot in a daily template: an exercise performed for
/// [`SETS_PER_EXERCISE`] sets at the day's rep range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSlot {
    pub muscle_group: &'static str,
    pub exercise: &'static str,
}

static HEAVY_TEMPLATE: [TemplateSlot; EXERCISES_PER_DAY] = [
    TemplateSlot { muscle_group: "chest", exercise: "Bench Press" },
    TemplateSlot { muscle_group: "upper_back", exercise: "Pull Ups" },
    TemplateSlot { muscle_group: "quads", exercise: "Squats" },
    TemplateSlot { muscle_group: "hamstrings", exercise: "Stiff Leg Deadlift" },
    TemplateSlot { muscle_group: "shoulders", exercise: "Seated Press" },
    TemplateSlot { muscle_group: "biceps", exercise: "Barbell Curl" },
    TemplateSlot { muscle_group: "triceps", exercise: "Weighted Dips" },
];

static LIGHT_TEMPLATE: [TemplateSlot; EXERCISES_PER_DAY] = [
    TemplateSlot { muscle_group: "chest", exercise: "Pec Dec" },
    TemplateSlot { muscle_group: "upper_back", exercise: "Pullover" },
    TemplateSlot { muscle_group: "quads", exercise: "Leg Extensions" },
    TemplateSlot { muscle_group: "hamstrings", exercise: "Leg Curls" },
    TemplateSlot { muscle_group: "shoulders", exercise: "DB Laterals" },
    TemplateSlot { muscle_group: "biceps", exercise: "Cable Curl" },
    TemplateSlot { muscle_group: "triceps", exercise: "Pushdowns" },
];

static MEDIUM_TEMPLATE: [TemplateSlot; EXERCISES_PER_DAY] = [
    TemplateSlot { muscle_group: "chest", exercise: "DB Incline Bench Press" },
    TemplateSlot { muscle_group: "upper_back", exercise: "DB Rows" },
    TemplateSlot { muscle_group: "quads", exercise: "Leg Press" },
    TemplateSlot { muscle_group: "hamstrings", exercise: "Glute Bridge" },
    TemplateSlot { muscle_group: "shoulders", exercise: "DB Seated Press" },
    TemplateSlot { muscle_group: "biceps", exercise: "Machine Preacher Curl" },
    TemplateSlot { muscle_group: "triceps", exercise: "Overhead Tricep Extension" },
];

/// Get the fixed template for a day type
pub fn template(day_type: DayType) -> &'static [TemplateSlot; EXERCISES_PER_DAY] {
    match day_type {
        DayType::Heavy => &HEAVY_TEMPLATE,
        DayType::Light => &LIGHT_TEMPLATE,
        DayType::Medium => &MEDIUM_TEMPLATE,
    }
}

/// Total sets in any daily template
pub fn total_sets() -> i32 {
    EXERCISES_PER_DAY as i32 * SETS_PER_EXERCISE
}

/// Index of an exercise within a day's template, by exact name
pub fn template_index(day_type: DayType, exercise_name: &str) -> Option<usize> {
    template(day_type)
        .iter()
        .position(|slot| slot.exercise == exercise_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_has_seven_exercises() {
        for day_type in DayType::ALL {
            assert_eq!(template(day_type).len(), EXERCISES_PER_DAY);
        }
        assert_eq!(total_sets(), 21);
    }

    #[test]
    fn test_template_exercises_exist_in_catalog() {
        for day_type in DayType::ALL {
            for slot in template(day_type) {
                let entry = catalog_exercise(slot.muscle_group, slot.exercise)
                    .unwrap_or_else(|| panic!("{} missing from catalog", slot.exercise));
                assert_eq!(entry.muscle_group, slot.muscle_group);
            }
        }
    }

    #[test]
    fn test_template_covers_every_muscle_group_once() {
        for day_type in DayType::ALL {
            let mut slugs: Vec<_> = template(day_type).iter().map(|s| s.muscle_group).collect();
            slugs.sort_unstable();
            slugs.dedup();
            assert_eq!(slugs.len(), MUSCLE_GROUPS.len());
        }
    }

    #[test]
    fn test_catalog_groups_are_known() {
        for entry in EXERCISE_CATALOG {
            assert!(muscle_group(entry.muscle_group).is_some(), "{}", entry.muscle_group);
        }
    }

    #[test]
    fn test_catalog_keys_are_unique() {
        let mut keys: Vec<_> = EXERCISE_CATALOG
            .iter()
            .map(|e| (e.muscle_group, e.name))
            .collect();
        let before = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), before);
    }

    #[test]
    fn test_template_index() {
        assert_eq!(template_index(DayType::Heavy, "Bench Press"), Some(0));
        assert_eq!(template_index(DayType::Heavy, "Barbell Curl"), Some(5));
        assert_eq!(template_index(DayType::Heavy, "Pec Dec"), None);
    }
}
