//! Conversion factors, category thresholds, and gauge bounds.

/// Kilograms per avoirdupois pound (exact by definition).
pub const KG_PER_LB: f64 = 0.453_592_37;

/// Meters per inch (exact by definition).
pub const M_PER_IN: f64 = 0.0254;

/// Centimeters per meter.
pub const CM_PER_M: f64 = 100.0;

/// Lowest BMI classified as Normal.
pub const NORMAL_MIN_BMI: f64 = 18.5;

/// Lowest BMI classified as Overweight.
pub const OVERWEIGHT_MIN_BMI: f64 = 25.0;

/// Lowest BMI classified as Obese.
pub const OBESE_MIN_BMI: f64 = 30.0;

/// BMI at the left edge of the visual gauge.
pub const GAUGE_MIN_BMI: f64 = 12.0;

/// BMI at the right edge of the visual gauge.
pub const GAUGE_MAX_BMI: f64 = 40.0;

/// Notification shown when the inputs cannot produce a BMI.
pub const INVALID_INPUT_MESSAGE: &str =
    "Please enter valid positive numbers for weight and height.";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (missing or malformed flags).
    pub const ERROR_CONFIG: i32 = 4;
    /// Inputs did not produce a valid BMI.
    pub const ERROR_INVALID_INPUT: i32 = 5;
}
