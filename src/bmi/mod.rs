//! BMI domain core
//! Unit conversion, band classification and validated input

pub mod classification;
pub mod conversion;
pub mod input;
pub mod types;

pub use classification::{classify_bmi, round_to};
pub use conversion::{cm_to_inches, inches_to_cm, kg_to_lbs, lbs_to_kg, UnitSystem};
pub use input::{parse_measurement, BmiInput};
pub use types::{Category, CategoryInfo, ClassificationResult, DisplayColor};
