//! Error handling and exit codes.

use clap::error::ErrorKind;

use bmicalc_core::calculator::BmiError;
use bmicalc_core::constants::exit_codes;

/// Map a calculation error to the process exit code.
pub fn handle_error(err: &BmiError) -> i32 {
    if err.is_input_error() {
        exit_codes::ERROR_INVALID_INPUT
    } else {
        exit_codes::ERROR_CONFIG
    }
}

/// Map a command-line parse error to the process exit code.
///
/// `--help` and `--version` succeed; every usage error, including an
/// unknown unit, is a configuration error.
pub fn clap_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
        _ => exit_codes::ERROR_CONFIG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmicalc_core::units::Quantity;
    use clap::Parser;

    use crate::config::AppConfig;

    fn parse_error(args: &[&str]) -> clap::Error {
        AppConfig::try_parse_from(std::iter::once("bmicalc").chain(args.iter().copied()))
            .unwrap_err()
    }

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&BmiError::InvalidMeasurement(Quantity::Weight)), 5);
        assert_eq!(handle_error(&BmiError::UndefinedBmi), 5);
        assert_eq!(handle_error(&BmiError::UnknownUnit("st".into())), 4);
        assert_eq!(handle_error(&BmiError::Config("bad".into())), 4);
    }

    #[test]
    fn unknown_unit_is_config_error() {
        let err = parse_error(&["-w", "70", "--weight-unit", "stone", "-H", "175"]);
        assert_eq!(clap_exit_code(&err), exit_codes::ERROR_CONFIG);
    }

    #[test]
    fn unknown_flag_is_config_error() {
        let err = parse_error(&["--stones", "11"]);
        assert_eq!(clap_exit_code(&err), exit_codes::ERROR_CONFIG);
    }

    #[test]
    fn help_and_version_succeed() {
        assert_eq!(clap_exit_code(&parse_error(&["--help"])), exit_codes::SUCCESS);
        assert_eq!(clap_exit_code(&parse_error(&["--version"])), exit_codes::SUCCESS);
    }
}
