//! BMI computation and display rounding.

/// Compute BMI as `kg / m²`.
///
/// Returns `NaN` if either input is missing (`NaN`), zero, or negative.
/// The result is not rounded.
#[must_use]
pub fn compute_bmi(kg: f64, m: f64) -> f64 {
    if kg.is_nan() || m.is_nan() || kg <= 0.0 || m <= 0.0 {
        return f64::NAN;
    }
    kg / (m * m)
}

/// Round a BMI to one decimal place, halves away from zero.
///
/// This is the single rounding step; classification and the gauge both
/// read the rounded value.
#[must_use]
pub fn round_to_tenth(bmi: f64) -> f64 {
    let scaled = bmi * 10.0;
    if scaled.is_infinite() {
        // Already integral at this magnitude.
        return bmi;
    }
    scaled.round() / 10.0
}
