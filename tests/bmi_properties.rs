//! Property tests for the BMI core
//!
//! Classification determinism, band partitioning and conversion round trips.

use bmicalc::bmi::{
    classify_bmi, cm_to_inches, inches_to_cm, kg_to_lbs, lbs_to_kg, BmiInput, Category, UnitSystem,
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Map an integer onto a realistic positive measurement (tenths)
fn tenths(raw: u16, min: f64) -> f64 {
    min + raw as f64 / 10.0
}

#[quickcheck]
fn classify_is_deterministic(weight: u16, height: u16) -> bool {
    let weight = tenths(weight, 1.0);
    let height = tenths(height, 50.0);
    classify_bmi(weight, height) == classify_bmi(weight, height)
}

#[quickcheck]
fn exactly_one_band_applies(raw: u32) -> bool {
    let bmi = raw as f64 / 100.0;
    let matches = [
        bmi < 18.5,
        (18.5..25.0).contains(&bmi),
        (25.0..30.0).contains(&bmi),
        bmi >= 30.0,
    ];
    let expected = Category::ALL[matches.iter().position(|m| *m).unwrap()];

    matches.iter().filter(|m| **m).count() == 1 && Category::from_bmi(bmi) == expected
}

#[quickcheck]
fn metadata_follows_category(weight: u16, height: u16) -> bool {
    let result = classify_bmi(tenths(weight, 1.0), tenths(height, 50.0));
    result.advisory == result.category.advisory() && result.display_color == result.category.color()
}

#[quickcheck]
fn value_has_one_decimal(weight: u16, height: u16) -> bool {
    let value = classify_bmi(tenths(weight, 1.0), tenths(height, 50.0)).value;
    ((value * 10.0).round() - value * 10.0).abs() < 1e-6
}

#[quickcheck]
fn weight_round_trip(raw: u16) -> bool {
    let kg = tenths(raw, 0.5);
    (lbs_to_kg(kg_to_lbs(kg)) - kg).abs() <= 0.01 + 1e-9
}

#[quickcheck]
fn height_round_trip_error_is_bounded(raw: u16) -> bool {
    // Half a tenth of an inch lost going out, half a tenth of a cm coming back
    let bound = 0.05 * 2.54 + 0.05 + 1e-9;
    let cm = tenths(raw, 0.5);
    (inches_to_cm(cm_to_inches(cm)) - cm).abs() <= bound
}

#[test]
fn height_round_trip_representative_values() {
    for cm in [70.0, 1.0, 500.0] {
        assert!((inches_to_cm(cm_to_inches(cm)) - cm).abs() <= 0.1 + 1e-9);
    }
}

#[quickcheck]
fn validated_input_rejects_non_positive(weight: i16, height: i16) -> TestResult {
    if weight > 0 && height > 0 {
        return TestResult::discard();
    }
    TestResult::from_bool(BmiInput::new(weight as f64, height as f64).is_err())
}

#[test]
fn boundaries_land_in_higher_band() {
    assert_eq!(Category::from_bmi(18.5), Category::Normal);
    assert_eq!(Category::from_bmi(25.0), Category::Overweight);
    assert_eq!(Category::from_bmi(30.0), Category::Obese);
}

#[test]
fn reference_scenarios() {
    assert_eq!(classify_bmi(70.0, 175.0).value, 22.9);
    assert_eq!(classify_bmi(50.0, 160.0).category, Category::Normal);
    assert_eq!(classify_bmi(45.0, 160.0).value, 17.6);
    assert_eq!(classify_bmi(90.0, 170.0).category, Category::Obese);
    assert_eq!(kg_to_lbs(70.0), 154.32);
    assert_eq!(cm_to_inches(180.0), 70.9);
}

#[test]
fn imperial_input_matches_metric() {
    let metric = BmiInput::parse("70", "177.8", UnitSystem::Metric).unwrap().classify();
    let imperial = BmiInput::parse("154.32", "70", UnitSystem::Imperial).unwrap().classify();
    assert_eq!(metric, imperial);
}
