//! Session manager for the interactive calculator
//!
//! Holds the active unit system, the last raw input, the last result
//! (the copy target), the gauge position and a bounded calculation history.

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::bmi::{BmiInput, ClassificationResult, UnitSystem};
use crate::config::Preferences;
use crate::errors::{BmiError, Result};
use crate::gauge::{Gauge, GaugeAnimation};

/// Maximum number of calculations to keep in history
const MAX_HISTORY_SIZE: usize = 1000;

/// Record of a completed calculation
#[derive(Debug, Clone)]
pub struct CalculationRecord {
    /// Weight as entered, in `unit`
    pub weight: f64,
    /// Height as entered, in `unit`
    pub height: f64,
    pub unit: UnitSystem,
    pub result: ClassificationResult,
    pub timestamp: DateTime<Local>,
}

/// A fresh result plus the gauge transition that shows it
#[derive(Debug, Clone, Copy)]
pub struct Calculation {
    pub result: ClassificationResult,
    pub animation: GaugeAnimation,
}

/// Outcome of a unit change
#[derive(Debug)]
pub struct UnitChange {
    pub unit: UnitSystem,
    /// Last input recalculated in the new unit, if it was valid
    pub recalculated: Option<Calculation>,
    /// Set when the preference could not be written
    pub save_error: Option<BmiError>,
}

/// Session manager maintaining calculator state
pub struct SessionManager {
    unit: UnitSystem,
    prefs_path: Option<PathBuf>,
    last_input: Option<(String, String)>,
    last_result: Option<ClassificationResult>,
    gauge: Gauge,
    history: VecDeque<CalculationRecord>,
    calculation_count: usize,
}

impl SessionManager {
    /// Create a session without preference persistence
    pub fn new(unit: UnitSystem) -> Self {
        SessionManager {
            unit,
            prefs_path: None,
            last_input: None,
            last_result: None,
            gauge: Gauge::new(),
            history: VecDeque::with_capacity(64),
            calculation_count: 0,
        }
    }

    /// Create a session that writes unit changes to `prefs_path`
    pub fn with_preferences(unit: UnitSystem, prefs_path: PathBuf) -> Self {
        SessionManager {
            prefs_path: Some(prefs_path),
            ..Self::new(unit)
        }
    }

    pub fn unit(&self) -> UnitSystem {
        self.unit
    }

    /// Calculate from raw text in the active unit.
    ///
    /// The text is remembered even when invalid so a unit change can
    /// reinterpret it.
    pub fn calculate(&mut self, weight: &str, height: &str) -> Result<Calculation> {
        self.last_input = Some((weight.to_string(), height.to_string()));
        self.run(weight, height)
    }

    fn run(&mut self, weight: &str, height: &str) -> Result<Calculation> {
        let input = BmiInput::parse(weight, height, self.unit)?;
        let result = input.classify();
        let animation = self.gauge.animate_to(result.value);

        debug!(
            unit = %self.unit,
            weight_kg = input.weight_kg(),
            height_cm = input.height_cm(),
            bmi = result.value,
            "calculated"
        );

        self.record(CalculationRecord {
            // Validated above, so these parse
            weight: weight.trim().parse().unwrap_or_default(),
            height: height.trim().parse().unwrap_or_default(),
            unit: self.unit,
            result,
            timestamp: Local::now(),
        });
        self.last_result = Some(result);

        Ok(Calculation { result, animation })
    }

    fn record(&mut self, record: CalculationRecord) {
        if self.history.len() >= MAX_HISTORY_SIZE {
            self.history.pop_front();
        }
        self.history.push_back(record);
        self.calculation_count += 1;
    }

    /// Switch unit systems, persist the choice and silently recalculate
    /// the last input. Selecting the active unit is a no-op.
    pub fn set_unit(&mut self, unit: UnitSystem) -> UnitChange {
        if unit == self.unit {
            return UnitChange { unit, recalculated: None, save_error: None };
        }
        self.unit = unit;

        let save_error = self.prefs_path.as_ref().and_then(|path| {
            Preferences { unit }.save(path).err().map(|err| {
                warn!(error = %err, "failed to persist unit preference");
                err
            })
        });

        let recalculated = self
            .last_input
            .clone()
            .and_then(|(weight, height)| self.run(&weight, &height).ok());

        UnitChange { unit, recalculated, save_error }
    }

    /// Flip between metric and imperial
    pub fn toggle_unit(&mut self) -> UnitChange {
        self.set_unit(self.unit.toggled())
    }

    /// Last result, if any
    pub fn last_result(&self) -> Option<&ClassificationResult> {
        self.last_result.as_ref()
    }

    /// Clipboard text for the last result
    pub fn summary(&self) -> Option<String> {
        self.last_result.map(|result| result.summary())
    }

    /// Most recent `limit` calculations, newest first
    pub fn get_history(&self, limit: usize) -> Vec<&CalculationRecord> {
        self.history.iter().rev().take(limit).collect()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Total calculations this session, including evicted ones
    pub fn calculation_count(&self) -> usize {
        self.calculation_count
    }

    pub fn gauge_value(&self) -> f64 {
        self.gauge.value()
    }
}
