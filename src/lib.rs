//! bmicalc - Body Mass Index calculator
//!
//! # Architecture
//!
//! - **bmi**: unit conversion, band classification, validated input
//! - **gauge**: arc geometry and animation for the BMI gauge
//! - **config**: persisted unit preference
//! - **cli / repl**: one-shot commands and the interactive session

pub mod errors;
pub mod bmi;
pub mod gauge;
pub mod config;
pub mod clipboard;

// Re-export commonly used types
pub use errors::{BmiError, Result};
pub use bmi::{classify_bmi, Category, ClassificationResult, UnitSystem};

// Interface layer
pub mod cli;
pub mod logging;
pub mod repl;
