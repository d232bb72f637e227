//! CLI result presenters.

use bmicalc_core::constants::INVALID_INPUT_MESSAGE;
use bmicalc_core::interfaces::ResultPresenter;
use bmicalc_core::{Assessment, BmiError};

use crate::output::{format_kg, format_meters, format_percent, render_gauge};
use crate::ui::{print_error, styled_category};
use crate::view::ResultView;

/// Gauge width in cells.
pub const GAUGE_WIDTH: usize = 40;

/// Build the text lines for an assessment.
///
/// `verbose` adds the gauge bar; `details` adds the converted measurements
/// and the unrounded BMI.
#[must_use]
pub fn report_lines(assessment: &Assessment, verbose: bool, details: bool) -> Vec<String> {
    let mut view = ResultView::new();
    view.render(assessment);

    let category = view
        .category
        .map_or_else(|| view.category_text.clone(), styled_category);

    let mut lines = vec![
        format!("BMI: {}", view.bmi_text),
        format!("Category: {category}"),
    ];

    if details {
        let input = &assessment.input;
        lines.push(format!(
            "Weight: {} {} = {}",
            input.weight,
            input.weight_unit,
            format_kg(assessment.kg)
        ));
        lines.push(format!(
            "Height: {} {} = {}",
            input.height,
            input.height_unit,
            format_meters(assessment.meters)
        ));
        lines.push(format!("Unrounded BMI: {:.4}", assessment.raw_bmi));
    }

    if verbose || details {
        lines.push(format!(
            "Gauge: {} {}",
            render_gauge(view.marker_percent, GAUGE_WIDTH),
            format_percent(view.marker_percent)
        ));
    }

    lines.push("Tips:".to_string());
    for tip in &view.tips {
        lines.push(format!("  {tip}"));
    }
    lines
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_assessment(&self, assessment: &Assessment, details: bool) {
        if self.quiet {
            println!("{}", assessment.bmi);
            return;
        }
        for line in report_lines(assessment, self.verbose, details) {
            println!("{line}");
        }
    }

    fn present_invalid(&self, error: &BmiError) {
        print_error(INVALID_INPUT_MESSAGE);
        if self.verbose {
            eprintln!("  ({error})");
        }
    }

    fn present_reset(&self) {
        if !self.quiet {
            println!("Form cleared.");
        }
    }
}

/// Presenter that prints one JSON object per event.
pub struct JsonResultPresenter;

impl JsonResultPresenter {
    /// JSON value for an assessment, optionally without the conversion fields.
    #[must_use]
    pub fn assessment_json(assessment: &Assessment, details: bool) -> serde_json::Value {
        let mut value = serde_json::to_value(assessment).unwrap_or(serde_json::Value::Null);
        if !details {
            if let Some(obj) = value.as_object_mut() {
                obj.remove("input");
                obj.remove("kg");
                obj.remove("meters");
                obj.remove("raw_bmi");
            }
        }
        value
    }

    /// JSON value for a rejected input.
    #[must_use]
    pub fn invalid_json(error: &BmiError) -> serde_json::Value {
        serde_json::json!({
            "valid": false,
            "error": error.to_string(),
            "message": INVALID_INPUT_MESSAGE,
        })
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present_assessment(&self, assessment: &Assessment, details: bool) {
        println!("{}", Self::assessment_json(assessment, details));
    }

    fn present_invalid(&self, error: &BmiError) {
        println!("{}", Self::invalid_json(error));
    }

    fn present_reset(&self) {
        println!("{}", serde_json::json!({ "reset": true }));
    }
}
