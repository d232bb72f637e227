//! The validation gate and the `BmiCalculator` pipeline.
//!
//! `units` and `bmi` speak in `NaN` sentinels. This module is where those
//! sentinels stop: [`validate`] turns them into a [`BmiError`], and
//! [`BmiCalculator::assess`] returns either a complete [`Assessment`] or the
//! reason there is none.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bmi::{compute_bmi, round_to_tenth};
use crate::category::Category;
use crate::gauge::map_to_percent;
use crate::units::{
    height_to_meters, parse_magnitude, weight_to_kg, HeightUnit, Quantity, WeightUnit,
};

/// Error type for BMI calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BmiError {
    /// A magnitude was missing, zero, or negative.
    #[error("invalid {0}: expected a positive number")]
    InvalidMeasurement(Quantity),

    /// The quotient was not a finite number.
    #[error("BMI is undefined for these measurements")]
    UndefinedBmi,

    /// A unit tag was not recognised.
    #[error("unknown unit: {0:?}")]
    UnknownUnit(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl BmiError {
    /// Whether the error stems from the measurements rather than setup.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidMeasurement(_) | Self::UndefinedBmi)
    }
}

/// Raw form input: two magnitudes with their units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub height: f64,
    pub height_unit: HeightUnit,
}

impl MeasurementInput {
    #[must_use]
    pub fn new(weight: f64, weight_unit: WeightUnit, height: f64, height_unit: HeightUnit) -> Self {
        Self {
            weight,
            weight_unit,
            height,
            height_unit,
        }
    }

    /// Build an input from form text, as typed by the user.
    #[must_use]
    pub fn from_text(
        weight: &str,
        weight_unit: WeightUnit,
        height: &str,
        height_unit: HeightUnit,
    ) -> Self {
        Self::new(
            parse_magnitude(weight),
            weight_unit,
            parse_magnitude(height),
            height_unit,
        )
    }
}

/// A valid BMI result, ready for any presenter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// The input this result was computed from.
    pub input: MeasurementInput,
    /// Weight in kilograms.
    pub kg: f64,
    /// Height in meters.
    pub meters: f64,
    /// Unrounded BMI.
    pub raw_bmi: f64,
    /// BMI rounded to one decimal place.
    pub bmi: f64,
    /// Category of the rounded BMI.
    pub category: Category,
    /// Display name of the category.
    pub category_name: &'static str,
    /// Advisory tips for the category.
    pub tips: [&'static str; 2],
    /// Gauge marker position of the rounded BMI, in percent.
    pub gauge_percent: f64,
}

/// Reject `NaN` and non-finite BMI values.
pub fn validate(bmi: f64) -> Result<f64, BmiError> {
    if bmi.is_nan() || !bmi.is_finite() {
        return Err(BmiError::UndefinedBmi);
    }
    Ok(bmi)
}

/// Stateless BMI pipeline: convert, compute, gate, round, classify, map.
#[derive(Debug, Clone, Copy, Default)]
pub struct BmiCalculator;

impl BmiCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Assess numeric measurements.
    pub fn assess(&self, input: &MeasurementInput) -> Result<Assessment, BmiError> {
        let kg = weight_to_kg(input.weight, input.weight_unit);
        let meters = height_to_meters(input.height, input.height_unit);
        let raw = compute_bmi(kg, meters);

        let raw_bmi = match validate(raw) {
            Ok(value) => value,
            Err(err) => {
                let err = if kg.is_nan() {
                    BmiError::InvalidMeasurement(Quantity::Weight)
                } else if meters.is_nan() {
                    BmiError::InvalidMeasurement(Quantity::Height)
                } else {
                    err
                };
                debug!(
                    weight = input.weight,
                    height = input.height,
                    error = %err,
                    "rejected measurements"
                );
                return Err(err);
            }
        };

        let bmi = round_to_tenth(raw_bmi);
        let category = Category::classify(bmi);
        let gauge_percent = map_to_percent(bmi);
        debug!(
            kg,
            meters,
            raw_bmi,
            bmi,
            category = category.key(),
            gauge_percent,
            "computed bmi"
        );

        Ok(Assessment {
            input: *input,
            kg,
            meters,
            raw_bmi,
            bmi,
            category,
            category_name: category.name(),
            tips: category.tips(),
            gauge_percent,
        })
    }

    /// Assess measurements given as form text.
    pub fn assess_text(
        &self,
        weight: &str,
        weight_unit: WeightUnit,
        height: &str,
        height_unit: HeightUnit,
    ) -> Result<Assessment, BmiError> {
        self.assess(&MeasurementInput::from_text(
            weight,
            weight_unit,
            height,
            height_unit,
        ))
    }
}
