//! # bmicalc-core
//!
//! Core library for the BmiCalc-rs body mass index calculator.
//! Converts weight and height to SI units, computes BMI, classifies it,
//! and places it on the visual gauge. Every function is pure.

pub mod bmi;
pub mod calculator;
pub mod category;
pub mod constants;
pub mod gauge;
pub mod interfaces;
pub mod units;

// Re-exports
pub use bmi::{compute_bmi, round_to_tenth};
pub use calculator::{validate, Assessment, BmiCalculator, BmiError, MeasurementInput};
pub use category::Category;
pub use constants::{exit_codes, INVALID_INPUT_MESSAGE};
pub use gauge::{map_to_percent, GaugeScale};
pub use interfaces::{NullPresenter, ResultPresenter};
pub use units::{
    height_to_meters, parse_magnitude, weight_to_kg, HeightUnit, Quantity, WeightUnit,
};

/// Assess metric measurements in one call.
///
/// This is a convenience function for simple use cases. For imperial units
/// or text input, use [`BmiCalculator`] directly.
///
/// # Example
/// ```
/// let a = bmicalc_core::assess_metric(70.0, 175.0).unwrap();
/// assert_eq!(a.bmi, 22.9);
/// assert_eq!(a.category, bmicalc_core::Category::Normal);
/// assert!(bmicalc_core::assess_metric(0.0, 175.0).is_err());
/// ```
pub fn assess_metric(kg: f64, cm: f64) -> Result<Assessment, BmiError> {
    BmiCalculator::new().assess(&MeasurementInput::new(
        kg,
        WeightUnit::Kilogram,
        cm,
        HeightUnit::Centimeter,
    ))
}
