//! Weight unit handling
//!
//! All weights are stored in kilograms internally and converted on API
//! boundaries. The display unit is a per-user setting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pounds per kilogram conversion factor
pub const KG_PER_LB: f64 = 0.453592;

/// Weight unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * KG_PER_LB,
        }
    }

    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg / KG_PER_LB,
        }
    }

    /// Plate-loading increment used by set-entry steppers
    pub fn increment(&self) -> f64 {
        match self {
            WeightUnit::Kg => 2.5,
            WeightUnit::Lbs => 5.0,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Ok(WeightUnit::Lbs),
            _ => Err(format!("Unknown weight unit: {}", s)),
        }
    }
}
