//! Mapping of BMI values onto the visual gauge.

use crate::constants::{GAUGE_MAX_BMI, GAUGE_MIN_BMI};

/// A linear BMI scale rendered as a 0-100% bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeScale {
    /// BMI at 0%.
    pub min: f64,
    /// BMI at 100%.
    pub max: f64,
}

impl GaugeScale {
    /// The fixed 12..40 scale used by every presenter.
    pub const DEFAULT: Self = Self {
        min: GAUGE_MIN_BMI,
        max: GAUGE_MAX_BMI,
    };

    /// Position of `bmi` on this scale, clamped to `[0, 100]`.
    /// `NaN` maps to 0.
    #[must_use]
    pub fn percent(&self, bmi: f64) -> f64 {
        if bmi.is_nan() || bmi <= self.min {
            return 0.0;
        }
        if bmi >= self.max {
            return 100.0;
        }
        (bmi - self.min) / (self.max - self.min) * 100.0
    }
}

impl Default for GaugeScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Position of `bmi` on the default gauge, in percent.
#[must_use]
pub fn map_to_percent(bmi: f64) -> f64 {
    GaugeScale::DEFAULT.percent(bmi)
}
