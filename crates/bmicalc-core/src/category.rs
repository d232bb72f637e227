//! Health categories derived from BMI thresholds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{NORMAL_MIN_BMI, OBESE_MIN_BMI, OVERWEIGHT_MIN_BMI};

/// One of the four fixed BMI categories.
///
/// Serialized as its stable key (`under`, `normal`, `over`, `obese`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "under")]
    Underweight,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "over")]
    Overweight,
    #[serde(rename = "obese")]
    Obese,
}

impl Category {
    /// All categories, lowest BMI first.
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    /// Classify a BMI value. Each lower bound is inclusive.
    ///
    /// Callers must reject `NaN` beforehand; it compares false against every
    /// threshold and lands in [`Category::Obese`].
    #[must_use]
    pub fn classify(bmi: f64) -> Self {
        if bmi < NORMAL_MIN_BMI {
            Self::Underweight
        } else if bmi < OVERWEIGHT_MIN_BMI {
            Self::Normal
        } else if bmi < OBESE_MIN_BMI {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Stable identifying key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Underweight => "under",
            Self::Normal => "normal",
            Self::Overweight => "over",
            Self::Obese => "obese",
        }
    }

    /// Advisory tips, in display order.
    #[must_use]
    pub fn tips(self) -> [&'static str; 2] {
        match self {
            Self::Underweight => [
                "Consider a balanced increase in calories and resistance training.",
                "Talk to a healthcare provider for personalized advice.",
            ],
            Self::Normal => [
                "Maintain your weight with a balanced diet and regular activity.",
                "Continue regular checkups and healthy habits.",
            ],
            Self::Overweight => [
                "Increase physical activity and review dietary choices.",
                "Small sustained changes can reduce risk.",
            ],
            Self::Obese => [
                "Consult a healthcare provider for a personalized plan.",
                "Focus on gradual lifestyle changes and support.",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
