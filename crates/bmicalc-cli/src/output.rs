//! CLI output formatting.

use std::io::{self, Write};

use bmicalc_core::category::Category;
use bmicalc_core::gauge::GaugeScale;
use bmicalc_core::Assessment;

/// Placeholder shown where no value is available.
pub const PLACEHOLDER: &str = "—";

/// Format a rounded BMI for display.
///
/// Uses the shortest decimal form, so `25.0` prints as `25`.
#[must_use]
pub fn format_bmi(bmi: f64) -> String {
    if bmi.is_finite() {
        bmi.to_string()
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Format a gauge position with one decimal.
#[must_use]
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Format a converted weight.
#[must_use]
pub fn format_kg(kg: f64) -> String {
    format!("{kg:.2} kg")
}

/// Format a converted height.
#[must_use]
pub fn format_meters(m: f64) -> String {
    format!("{m:.4} m")
}

fn zone_char(category: Category) -> char {
    match category {
        Category::Underweight => '.',
        Category::Normal => '=',
        Category::Overweight => '+',
        Category::Obese => '#',
    }
}

/// Render the gauge as a bar of `width` cells with a `|` marker.
///
/// Each cell shows the zone of the BMI at its centre; the marker sits at
/// `percent` of the way across.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_gauge(percent: f64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let scale = GaugeScale::DEFAULT;
    let span = scale.max - scale.min;
    let pct = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    let marker = ((pct / 100.0) * (width - 1) as f64).round() as usize;

    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for i in 0..width {
        if i == marker {
            bar.push('|');
        } else {
            let bmi = scale.min + (i as f64 + 0.5) / width as f64 * span;
            bar.push(zone_char(Category::classify(bmi)));
        }
    }
    bar.push(']');
    bar
}

/// Write an assessment to a file as pretty JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, assessment: &Assessment) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(&mut file, assessment)?;
    writeln!(file)?;
    Ok(())
}
