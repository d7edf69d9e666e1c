//! BMI computation and banding

use super::types::{Category, ClassificationResult};

/// Round to `decimals` places, ties away from zero
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Compute BMI from kilograms and centimeters and classify it.
///
/// No validation is performed: a zero height yields a non-finite value
/// (classified `Obese`) and negative inputs give meaningless but
/// non-erroring results. Use [`crate::bmi::BmiInput`] for checked input.
pub fn classify_bmi(weight_kg: f64, height_cm: f64) -> ClassificationResult {
    let height_m = height_cm / 100.0;
    let bmi = round_to(weight_kg / (height_m * height_m), 1);
    ClassificationResult::new(bmi, Category::from_bmi(bmi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenarios() {
        let cases = [
            (70.0, 175.0, 22.9, Category::Normal),
            (50.0, 160.0, 19.5, Category::Normal),
            (45.0, 160.0, 17.6, Category::Underweight),
            (90.0, 170.0, 31.1, Category::Obese),
        ];

        for (weight, height, expected, category) in cases {
            let result = classify_bmi(weight, height);
            assert_eq!(result.value, expected, "bmi for {}kg/{}cm", weight, height);
            assert_eq!(result.category, category);
        }
    }

    #[test]
    fn test_overweight_band() {
        let result = classify_bmi(80.0, 175.0);
        assert_eq!(result.value, 26.1);
        assert_eq!(result.category, Category::Overweight);
        assert_eq!(result.advisory, "Small lifestyle tweaks can help.");
    }

    #[test]
    fn test_rounded_value_decides_band() {
        // 24.96 rounds up to 25.0 before banding
        let result = classify_bmi(76.44, 175.0);
        assert_eq!(result.value, 25.0);
        assert_eq!(result.category, Category::Overweight);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(classify_bmi(63.2, 171.0), classify_bmi(63.2, 171.0));
    }

    #[test]
    fn test_zero_height_is_non_finite() {
        let result = classify_bmi(70.0, 0.0);
        assert!(!result.value.is_finite());
        assert_eq!(result.category, Category::Obese);
    }

    #[test]
    fn test_round_to_ties_away_from_zero() {
        assert_eq!(round_to(0.25, 1), 0.3);
        assert_eq!(round_to(-0.25, 1), -0.3);
        assert_eq!(round_to(154.3234, 2), 154.32);
    }
}
