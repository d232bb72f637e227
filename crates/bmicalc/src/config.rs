//! Application configuration from CLI flags and environment.

use clap::Parser;

use bmicalc_core::calculator::BmiError;
use bmicalc_core::units::{HeightUnit, WeightUnit};

/// BmiCalc-rs: body mass index calculator.
#[derive(Parser, Debug)]
#[command(name = "bmicalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Weight, as typed (e.g. "70", "154.5").
    #[arg(short, long, allow_hyphen_values = true)]
    pub weight: Option<String>,

    /// Weight unit: kg or lb.
    #[arg(long, default_value = "kg", env = "BMICALC_WEIGHT_UNIT")]
    pub weight_unit: WeightUnit,

    /// Height, as typed (e.g. "175", "68").
    #[arg(short = 'H', long, allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Height unit: cm or in.
    #[arg(long, default_value = "cm", env = "BMICALC_HEIGHT_UNIT")]
    pub height_unit: HeightUnit,

    /// Print results as JSON.
    #[arg(short, long)]
    pub json: bool,

    /// Quiet mode (only output the BMI).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (adds the gauge bar).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show converted measurements and the unrounded BMI.
    #[arg(short, long)]
    pub details: bool,

    /// Write the result to a JSON report file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Read measurements line by line from stdin.
    #[arg(short, long)]
    pub interactive: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments, returning usage errors to the caller.
    pub fn try_parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// Weight and height text for one-shot mode.
    pub fn measurements(&self) -> Result<(&str, &str), BmiError> {
        match (self.weight.as_deref(), self.height.as_deref()) {
            (Some(weight), Some(height)) => Ok((weight, height)),
            (None, _) => Err(BmiError::Config("missing --weight".into())),
            (_, None) => Err(BmiError::Config("missing --height".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("bmicalc").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&["-w", "70", "-H", "175"]);
        assert_eq!(config.weight_unit, WeightUnit::Kilogram);
        assert_eq!(config.height_unit, HeightUnit::Centimeter);
        assert_eq!(config.measurements().unwrap(), ("70", "175"));
        assert!(!config.json && !config.quiet && !config.interactive);
    }

    #[test]
    fn imperial_units() {
        let config = parse(&[
            "--weight",
            "154",
            "--weight-unit",
            "lb",
            "--height",
            "68",
            "--height-unit",
            "in",
        ]);
        assert_eq!(config.weight_unit, WeightUnit::Pound);
        assert_eq!(config.height_unit, HeightUnit::Inch);
    }

    #[test]
    fn unknown_unit_rejected() {
        let result = AppConfig::try_parse_from(["bmicalc", "--weight-unit", "stone"]);
        assert!(result.is_err());
    }

    #[test]
    fn negative_magnitude_accepted_as_text() {
        let config = parse(&["--weight", "-5", "--height", "175"]);
        assert_eq!(config.weight.as_deref(), Some("-5"));
    }

    #[test]
    fn missing_measurements() {
        let config = parse(&["-w", "70"]);
        assert_eq!(
            config.measurements(),
            Err(BmiError::Config("missing --height".into()))
        );
        let config = parse(&[]);
        assert_eq!(
            config.measurements(),
            Err(BmiError::Config("missing --weight".into()))
        );
    }

    #[test]
    fn command_is_well_formed() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
