//! Form session: the submit/reset event layer over the calculator.

use tracing::debug;

use bmicalc_core::calculator::{Assessment, BmiCalculator, BmiError, MeasurementInput};
use bmicalc_core::units::{HeightUnit, WeightUnit};

use crate::view::ResultView;

/// A line of interactive input.
#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand {
    /// Compute and show a result.
    Submit(MeasurementInput),
    /// Clear the result panel.
    Reset,
    /// End the session.
    Quit,
}

/// Usage hint for interactive input.
pub const COMMAND_USAGE: &str = "enter: <weight>[unit] <height>[unit] | reset | quit";

const INFINITY: &str = "Infinity";

fn unsigned(token: &str) -> &str {
    token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token)
}

fn starts_numeric(token: &str) -> bool {
    unsigned(token).starts_with(INFINITY)
        || token
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'))
}

fn split_magnitude(token: &str) -> (&str, &str) {
    let body = unsigned(token);
    if body.starts_with(INFINITY) {
        return token.split_at(token.len() - body.len() + INFINITY.len());
    }
    let rest = token.trim_start_matches(|c: char| {
        c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')
    });
    token.split_at(token.len() - rest.len())
}

/// Parse one line of interactive input.
///
/// Accepts `reset`, `quit`, or two magnitudes, each optionally followed by
/// a unit either attached (`154lb`) or as the next word (`154 lb`).
/// Missing units fall back to `weight_unit` and `height_unit`.
/// Magnitudes are read like `--weight`/`--height`, so `Infinity` parses
/// and is then rejected by the calculator.
pub fn parse_command(
    line: &str,
    weight_unit: WeightUnit,
    height_unit: HeightUnit,
) -> Result<FormCommand, BmiError> {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "reset" | "clear" => return Ok(FormCommand::Reset),
        "quit" | "exit" | "q" => return Ok(FormCommand::Quit),
        _ => {}
    }

    let mut fields: Vec<(&str, Option<&str>)> = Vec::new();
    for token in trimmed.split_whitespace() {
        if starts_numeric(token) {
            let (number, unit) = split_magnitude(token);
            fields.push((number, (!unit.is_empty()).then_some(unit)));
        } else {
            match fields.last_mut() {
                Some(field) if field.1.is_none() => field.1 = Some(token),
                _ => return Err(BmiError::Config(format!("unexpected token {token:?}"))),
            }
        }
    }

    let [(weight, wu), (height, hu)] = fields[..] else {
        return Err(BmiError::Config(COMMAND_USAGE.to_string()));
    };
    let weight_unit = wu.map(str::parse::<WeightUnit>).transpose()?.unwrap_or(weight_unit);
    let height_unit = hu.map(str::parse::<HeightUnit>).transpose()?.unwrap_or(height_unit);

    Ok(FormCommand::Submit(MeasurementInput::from_text(
        weight,
        weight_unit,
        height,
        height_unit,
    )))
}

/// One open form: default units plus the result panel it drives.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    calculator: BmiCalculator,
    weight_unit: WeightUnit,
    height_unit: HeightUnit,
    view: ResultView,
}

impl FormSession {
    #[must_use]
    pub fn new(weight_unit: WeightUnit, height_unit: HeightUnit) -> Self {
        Self {
            calculator: BmiCalculator::new(),
            weight_unit,
            height_unit,
            view: ResultView::new(),
        }
    }

    /// Current result panel.
    #[must_use]
    pub fn view(&self) -> &ResultView {
        &self.view
    }

    /// Handle a submit event.
    ///
    /// On success the panel shows the result. On failure the panel is
    /// hidden and the error is returned for the caller to notify.
    pub fn submit(&mut self, input: &MeasurementInput) -> Result<Assessment, BmiError> {
        match self.calculator.assess(input) {
            Ok(assessment) => {
                self.view.render(&assessment);
                Ok(assessment)
            }
            Err(err) => {
                self.view.hide();
                Err(err)
            }
        }
    }

    /// Handle a submit event from form text, using the session's units.
    pub fn submit_text(&mut self, weight: &str, height: &str) -> Result<Assessment, BmiError> {
        let input =
            MeasurementInput::from_text(weight, self.weight_unit, height, self.height_unit);
        self.submit(&input)
    }

    /// Parse a line against this session's default units.
    pub fn parse(&self, line: &str) -> Result<FormCommand, BmiError> {
        parse_command(line, self.weight_unit, self.height_unit)
    }

    /// Handle a reset event. The calculator is untouched.
    pub fn reset(&mut self) {
        debug!("form reset");
        self.view.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmicalc_core::category::Category;
    use bmicalc_core::units::Quantity;

    fn metric_session() -> FormSession {
        FormSession::new(WeightUnit::Kilogram, HeightUnit::Centimeter)
    }

    #[test]
    fn parse_reset_and_quit() {
        let s = metric_session();
        assert_eq!(s.parse("reset").unwrap(), FormCommand::Reset);
        assert_eq!(s.parse("  CLEAR ").unwrap(), FormCommand::Reset);
        assert_eq!(s.parse("quit").unwrap(), FormCommand::Quit);
        assert_eq!(s.parse("exit").unwrap(), FormCommand::Quit);
    }

    #[test]
    fn parse_default_units() {
        let cmd = metric_session().parse("70 175").unwrap();
        assert_eq!(
            cmd,
            FormCommand::Submit(MeasurementInput::new(
                70.0,
                WeightUnit::Kilogram,
                175.0,
                HeightUnit::Centimeter
            ))
        );
    }

    #[test]
    fn parse_attached_units() {
        let cmd = metric_session().parse("154lb 68in").unwrap();
        assert_eq!(
            cmd,
            FormCommand::Submit(MeasurementInput::new(
                154.0,
                WeightUnit::Pound,
                68.0,
                HeightUnit::Inch
            ))
        );
    }

    #[test]
    fn parse_separate_units() {
        let cmd = metric_session().parse("154 lb 175 cm").unwrap();
        let FormCommand::Submit(input) = cmd else {
            panic!("expected submit");
        };
        assert_eq!(input.weight_unit, WeightUnit::Pound);
        assert_eq!(input.height_unit, HeightUnit::Centimeter);
    }

    #[test]
    fn parse_exponent_magnitude() {
        let FormCommand::Submit(input) = metric_session().parse("7e1 1.75e2cm").unwrap() else {
            panic!("expected submit");
        };
        assert_eq!(input.weight, 70.0);
        assert_eq!(input.height, 175.0);
    }

    #[test]
    fn parse_errors() {
        let s = metric_session();
        assert!(matches!(s.parse("70"), Err(BmiError::Config(_))));
        assert!(matches!(s.parse("kg 70 175"), Err(BmiError::Config(_))));
        assert!(matches!(s.parse("70 kg lb 175"), Err(BmiError::Config(_))));
        assert!(matches!(s.parse("70st 175"), Err(BmiError::UnknownUnit(_))));
        assert!(matches!(s.parse(""), Err(BmiError::Config(_))));
    }

    #[test]
    fn parse_infinite_magnitude() {
        let s = metric_session();
        let FormCommand::Submit(input) = s.parse("Infinity 175").unwrap() else {
            panic!("expected submit");
        };
        assert_eq!(input.weight, f64::INFINITY);
        assert_eq!(input.height_unit, HeightUnit::Centimeter);

        let FormCommand::Submit(input) = s.parse("70 -Infinityin").unwrap() else {
            panic!("expected submit");
        };
        assert_eq!(input.height, f64::NEG_INFINITY);
        assert_eq!(input.height_unit, HeightUnit::Inch);
    }

    #[test]
    fn infinite_magnitude_is_rejected_on_submit() {
        let mut s = metric_session();
        let FormCommand::Submit(input) = s.parse("Infinity 175").unwrap() else {
            panic!("expected submit");
        };
        let err = s.submit(&input).unwrap_err();
        assert!(err.is_input_error());
        assert_eq!(err, s.submit_text("Infinity", "175").unwrap_err());
        assert!(!s.view().is_visible());
    }

    #[test]
    fn submit_renders_view() {
        let mut s = metric_session();
        let a = s.submit_text("70", "175").unwrap();
        assert_eq!(a.category, Category::Normal);
        assert!(s.view().is_visible());
        assert_eq!(s.view().bmi_text, "22.9");
    }

    #[test]
    fn invalid_submit_hides_view() {
        let mut s = metric_session();
        s.submit_text("70", "175").unwrap();
        let err = s.submit_text("0", "175").unwrap_err();
        assert_eq!(err, BmiError::InvalidMeasurement(Quantity::Weight));
        assert!(!s.view().is_visible());
    }

    #[test]
    fn reset_clears_view() {
        let mut s = metric_session();
        s.submit_text("70", "175").unwrap();
        s.reset();
        assert_eq!(s.view(), &ResultView::new());
    }

    #[test]
    fn imperial_session_defaults() {
        let mut s = FormSession::new(WeightUnit::Pound, HeightUnit::Inch);
        let a = s.submit_text("154", "68").unwrap();
        assert_eq!(a.bmi, 23.4);
    }
}
