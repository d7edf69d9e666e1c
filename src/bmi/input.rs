//! Validated BMI input
//!
//! Raw text from the command line or the interactive session is parsed
//! here, checked for positive finite values and normalized to metric.

use super::classification::classify_bmi;
use super::conversion::UnitSystem;
use super::types::ClassificationResult;
use crate::errors::{BmiError, Result};

/// Parse one measurement field.
///
/// Empty text counts as zero and is rejected like any other
/// non-positive value.
pub fn parse_measurement(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BmiError::invalid(field, "value is required"));
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| BmiError::invalid(field, format!("'{}' is not a number", trimmed)))
}

/// Weight and height in metric units, both finite and positive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiInput {
    weight_kg: f64,
    height_cm: f64,
}

impl BmiInput {
    /// Check metric values
    pub fn new(weight_kg: f64, height_cm: f64) -> Result<Self> {
        check_positive("weight", weight_kg)?;
        check_positive("height", height_cm)?;
        Ok(Self { weight_kg, height_cm })
    }

    /// Check raw values in `unit` and convert them to metric
    pub fn from_units(weight: f64, height: f64, unit: UnitSystem) -> Result<Self> {
        check_positive("weight", weight)?;
        check_positive("height", height)?;
        Self::new(unit.weight_to_kg(weight), unit.height_to_cm(height))
    }

    /// Parse raw text fields in `unit`
    pub fn parse(weight: &str, height: &str, unit: UnitSystem) -> Result<Self> {
        let weight = parse_measurement("weight", weight)?;
        let height = parse_measurement("height", height)?;
        Self::from_units(weight, height, unit)
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn classify(&self) -> ClassificationResult {
        classify_bmi(self.weight_kg, self.height_cm)
    }
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(BmiError::invalid(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(BmiError::invalid(field, "must be greater than zero"));
    }
    Ok(())
}
