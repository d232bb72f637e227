//! Measurement units and normalization to kilograms and meters.
//!
//! Conversions never fail loudly: a missing, zero, or negative magnitude
//! yields `f64::NAN`, which then propagates through [`crate::bmi::compute_bmi`]
//! until the validation gate in [`crate::calculator`] rejects it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::BmiError;
use crate::constants::{CM_PER_M, KG_PER_LB, M_PER_IN};

/// Unit of a weight measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Kilograms (canonical).
    #[default]
    #[serde(rename = "kg")]
    Kilogram,
    /// Avoirdupois pounds.
    #[serde(rename = "lb")]
    Pound,
}

impl WeightUnit {
    /// Short symbol used on the command line and in reports.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Kilogram => "kg",
            Self::Pound => "lb",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for WeightUnit {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(Self::Kilogram),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Self::Pound),
            other => Err(BmiError::UnknownUnit(other.to_string())),
        }
    }
}

/// Unit of a height measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HeightUnit {
    /// Centimeters (canonical).
    #[default]
    #[serde(rename = "cm")]
    Centimeter,
    /// Inches.
    #[serde(rename = "in")]
    Inch,
}

impl HeightUnit {
    /// Short symbol used on the command line and in reports.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Centimeter => "cm",
            Self::Inch => "in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for HeightUnit {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(Self::Centimeter)
            }
            "in" | "inch" | "inches" => Ok(Self::Inch),
            other => Err(BmiError::UnknownUnit(other.to_string())),
        }
    }
}

/// Which of the two measurements a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Weight,
    Height,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weight => f.write_str("weight"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// A magnitude is usable only when it is strictly positive.
/// `NaN` fails this comparison and so counts as missing.
fn is_positive(magnitude: f64) -> bool {
    magnitude > 0.0
}

/// Convert a weight to kilograms.
///
/// Returns `NaN` when `magnitude` is missing (`NaN`), zero, or negative.
#[must_use]
pub fn weight_to_kg(magnitude: f64, unit: WeightUnit) -> f64 {
    if !is_positive(magnitude) {
        return f64::NAN;
    }
    match unit {
        WeightUnit::Pound => magnitude * KG_PER_LB,
        WeightUnit::Kilogram => magnitude,
    }
}

/// Convert a height to meters.
///
/// Returns `NaN` when `magnitude` is missing (`NaN`), zero, or negative.
#[must_use]
pub fn height_to_meters(magnitude: f64, unit: HeightUnit) -> f64 {
    if !is_positive(magnitude) {
        return f64::NAN;
    }
    match unit {
        HeightUnit::Inch => magnitude * M_PER_IN,
        HeightUnit::Centimeter => magnitude / CM_PER_M,
    }
}

/// Parse the leading decimal number of a form field.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"70kg"`
/// reads as `70.0`. Text with no numeric prefix yields `NaN`.
#[must_use]
pub fn parse_magnitude(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
