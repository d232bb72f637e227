//! View-model of the result panel.
//!
//! Holds exactly what a front end would show: the number, the category
//! label, the bulleted tips, and the gauge marker position. Rendering code
//! reads it; nothing in it reaches back into the calculator.

use bmicalc_core::category::Category;
use bmicalc_core::Assessment;

use crate::output::{format_bmi, PLACEHOLDER};

/// Prefix for each tip line.
pub const TIP_BULLET: &str = "• ";

/// Result panel state.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    /// Whether the panel is hidden.
    pub hidden: bool,
    /// Rounded BMI text, or the placeholder.
    pub bmi_text: String,
    /// Category name, or the placeholder.
    pub category_text: String,
    /// Category of the last rendered result.
    pub category: Option<Category>,
    /// Bulleted tip lines.
    pub tips: Vec<String>,
    /// Gauge marker position, in percent.
    pub marker_percent: f64,
}

impl ResultView {
    /// A hidden, empty panel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hidden: true,
            bmi_text: PLACEHOLDER.to_string(),
            category_text: PLACEHOLDER.to_string(),
            category: None,
            tips: Vec::new(),
            marker_percent: 0.0,
        }
    }

    /// Show an assessment.
    pub fn render(&mut self, assessment: &Assessment) {
        self.bmi_text = format_bmi(assessment.bmi);
        self.category_text = assessment.category_name.to_string();
        self.category = Some(assessment.category);
        self.tips = assessment
            .tips
            .iter()
            .map(|tip| format!("{TIP_BULLET}{tip}"))
            .collect();
        self.marker_percent = assessment.gauge_percent;
        self.hidden = false;
    }

    /// Hide the panel, leaving its contents in place.
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    /// Restore the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether a result is currently on display.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

impl Default for ResultView {
    fn default() -> Self {
        Self::new()
    }
}
