//! Metric/imperial conversion

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::classification::round_to;
use crate::errors::BmiError;

const LBS_PER_KG: f64 = 2.20462;
const CM_PER_INCH: f64 = 2.54;

/// Kilograms to pounds, two decimals
pub fn kg_to_lbs(kg: f64) -> f64 {
    round_to(kg * LBS_PER_KG, 2)
}

/// Pounds to kilograms, two decimals
pub fn lbs_to_kg(lbs: f64) -> f64 {
    round_to(lbs / LBS_PER_KG, 2)
}

/// Centimeters to inches, one decimal
pub fn cm_to_inches(cm: f64) -> f64 {
    round_to(cm / CM_PER_INCH, 1)
}

/// Inches to centimeters, one decimal
pub fn inches_to_cm(inches: f64) -> f64 {
    round_to(inches * CM_PER_INCH, 1)
}

/// Unit system used for raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// The other unit system
    pub fn toggled(&self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }

    /// Human label, e.g. "Metric (kg/cm)"
    pub fn label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric (kg/cm)",
            UnitSystem::Imperial => "Imperial (lbs/in)",
        }
    }

    pub fn weight_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Weight (kg)",
            UnitSystem::Imperial => "Weight (lbs)",
        }
    }

    pub fn height_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Height (cm)",
            UnitSystem::Imperial => "Height (in)",
        }
    }

    /// Normalize a weight in this system to kilograms
    pub fn weight_to_kg(&self, weight: f64) -> f64 {
        match self {
            UnitSystem::Metric => weight,
            UnitSystem::Imperial => lbs_to_kg(weight),
        }
    }

    /// Normalize a height in this system to centimeters
    pub fn height_to_cm(&self, height: f64) -> f64 {
        match self {
            UnitSystem::Metric => height,
            UnitSystem::Imperial => inches_to_cm(height),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "m" => Ok(UnitSystem::Metric),
            "imperial" | "i" => Ok(UnitSystem::Imperial),
            other => Err(BmiError::invalid("unit", format!("unknown unit system '{}'", other))),
        }
    }
}
