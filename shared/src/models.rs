//! Core domain enums for the Heavy/Light/Medium program

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workout day type in the Heavy/Light/Medium split
///
/// Each day type carries its own rep-range and rest-period conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Heavy,
    Light,
    Medium,
}

impl DayType {
    /// All day types in program order
    pub const ALL: [DayType; 3] = [DayType::Heavy, DayType::Light, DayType::Medium];

    /// Stable string form used in the database and API
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Heavy => "heavy",
            DayType::Light => "light",
            DayType::Medium => "medium",
        }
    }

    /// Target rep range for this day type
    pub fn rep_range(&self) -> &'static str {
        match self {
            DayType::Heavy => "5-8",
            DayType::Light => "12-15",
            DayType::Medium => "8-12",
        }
    }

    /// Default rest period between sets, in seconds
    pub fn default_rest_seconds(&self) -> i32 {
        match self {
            DayType::Heavy | DayType::Medium => 120,
            DayType::Light => 60,
        }
    }

    /// Short description of the day's character
    pub fn description(&self) -> &'static str {
        match self {
            DayType::Heavy => "Big, basic compound exercises for lower reps",
            DayType::Light => "Isolation exercises for higher reps, active recovery",
            DayType::Medium => "Moderate exercises, joint-friendly variations",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "heavy" => Ok(DayType::Heavy),
            "light" => Ok(DayType::Light),
            "medium" => Ok(DayType::Medium),
            _ => Err(format!("Unknown day type: {}", s)),
        }
    }
}

/// Exercise classification within a muscle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    Compound,
    Isolation,
}

impl ExerciseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::Compound => "compound",
            ExerciseKind::Isolation => "isolation",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExerciseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compound" => Ok(ExerciseKind::Compound),
            "isolation" => Ok(ExerciseKind::Isolation),
            _ => Err(format!("Unknown exercise kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type_parsing() {
        assert_eq!("heavy".parse::<DayType>().unwrap(), DayType::Heavy);
        assert_eq!("Light".parse::<DayType>().unwrap(), DayType::Light);
        assert_eq!("MEDIUM".parse::<DayType>().unwrap(), DayType::Medium);
        assert!("push".parse::<DayType>().is_err());
    }

    #[test]
    fn test_rest_periods() {
        assert_eq!(DayType::Heavy.default_rest_seconds(), 120);
        assert_eq!(DayType::Light.default_rest_seconds(), 60);
        assert_eq!(DayType::Medium.default_rest_seconds(), 120);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&DayType::Heavy).unwrap();
        assert_eq!(json, "\"heavy\"");
        let back: DayType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DayType::Heavy);
    }
}
