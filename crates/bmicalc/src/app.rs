//! Application entry point and dispatch.

use std::io::{self, BufRead};

use anyhow::Result;
use tracing::info;

use bmicalc_cli::output::write_to_file;
use bmicalc_cli::presenter::{CLIResultPresenter, JsonResultPresenter};
use bmicalc_cli::session::{FormCommand, FormSession, COMMAND_USAGE};
use bmicalc_cli::ui::print_error;
use bmicalc_core::constants::exit_codes;
use bmicalc_core::interfaces::ResultPresenter;
use bmicalc_core::Assessment;

use crate::config::AppConfig;
use crate::errors::handle_error;
use crate::version::full_version;

/// What the interactive loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        bmicalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    // Handle interactive mode
    if config.interactive {
        return run_interactive(config, io::stdin().lock());
    }

    // One-shot mode
    run_cli(config)
}

fn presenter_for(config: &AppConfig) -> Box<dyn ResultPresenter> {
    if config.json {
        Box::new(JsonResultPresenter)
    } else {
        Box::new(CLIResultPresenter::new(config.verbose, config.quiet))
    }
}

fn save_report(config: &AppConfig, assessment: &Assessment) -> Result<()> {
    if let Some(ref path) = config.output {
        write_to_file(path, assessment)?;
        info!(path = %path, "wrote report");
    }
    Ok(())
}

fn run_cli(config: &AppConfig) -> Result<i32> {
    let (weight, height) = match config.measurements() {
        Ok(pair) => pair,
        Err(err) => {
            print_error(&err.to_string());
            return Ok(handle_error(&err));
        }
    };
    info!(
        weight,
        weight_unit = %config.weight_unit,
        height,
        height_unit = %config.height_unit,
        "one-shot assessment"
    );

    let presenter = presenter_for(config);
    let mut session = FormSession::new(config.weight_unit, config.height_unit);
    match session.submit_text(weight, height) {
        Ok(assessment) => {
            presenter.present_assessment(&assessment, config.details);
            save_report(config, &assessment)?;
            Ok(exit_codes::SUCCESS)
        }
        Err(err) => {
            presenter.present_invalid(&err);
            Ok(handle_error(&err))
        }
    }
}

/// Handle one line of interactive input.
pub fn handle_line(
    config: &AppConfig,
    session: &mut FormSession,
    presenter: &dyn ResultPresenter,
    line: &str,
) -> Result<LineOutcome> {
    if line.trim().is_empty() {
        return Ok(LineOutcome::Continue);
    }
    match session.parse(line) {
        Ok(FormCommand::Quit) => return Ok(LineOutcome::Quit),
        Ok(FormCommand::Reset) => {
            session.reset();
            presenter.present_reset();
        }
        Ok(FormCommand::Submit(input)) => match session.submit(&input) {
            Ok(assessment) => {
                presenter.present_assessment(&assessment, config.details);
                save_report(config, &assessment)?;
            }
            Err(err) => presenter.present_invalid(&err),
        },
        Err(err) if err.is_input_error() => presenter.present_invalid(&err),
        Err(err) => print_error(&err.to_string()),
    }
    Ok(LineOutcome::Continue)
}

/// Run the line-oriented form session until `quit` or end of input.
///
/// A line that is not valid UTF-8 is reported and skipped; read failures
/// end the session with an error.
pub fn run_interactive<R: BufRead>(config: &AppConfig, mut input: R) -> Result<i32> {
    if !config.quiet && !config.json {
        eprintln!("{}", full_version());
        eprintln!("{COMMAND_USAGE}");
    }
    info!("interactive session started");

    let presenter = presenter_for(config);
    let mut session = FormSession::new(config.weight_unit, config.height_unit);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            print_error("input line is not valid UTF-8");
            continue;
        };
        if handle_line(config, &mut session, presenter.as_ref(), line)? == LineOutcome::Quit {
            break;
        }
    }
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmicalc_core::interfaces::NullPresenter;
    use bmicalc_core::units::{HeightUnit, WeightUnit};
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("bmicalc").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn handle_line_submit_and_reset() {
        let config = config(&["-i"]);
        let mut session = FormSession::new(WeightUnit::Kilogram, HeightUnit::Centimeter);
        let presenter = NullPresenter;

        let outcome = handle_line(&config, &mut session, &presenter, "70 175").unwrap();
        assert_eq!(outcome, LineOutcome::Continue);
        assert_eq!(session.view().bmi_text, "22.9");

        handle_line(&config, &mut session, &presenter, "reset").unwrap();
        assert!(!session.view().is_visible());
        assert_eq!(session.view().bmi_text, "—");
    }

    #[test]
    fn handle_line_invalid_hides() {
        let config = config(&["-i"]);
        let mut session = FormSession::new(WeightUnit::Kilogram, HeightUnit::Centimeter);
        let presenter = NullPresenter;
        handle_line(&config, &mut session, &presenter, "70 175").unwrap();
        handle_line(&config, &mut session, &presenter, "0 175").unwrap();
        assert!(!session.view().is_visible());
    }

    #[test]
    fn handle_line_parse_error_continues() {
        let config = config(&["-i"]);
        let mut session = FormSession::default();
        let outcome = handle_line(&config, &mut session, &NullPresenter, "70").unwrap();
        assert_eq!(outcome, LineOutcome::Continue);
    }

    #[test]
    fn handle_line_quit() {
        let config = config(&["-i"]);
        let mut session = FormSession::default();
        let outcome = handle_line(&config, &mut session, &NullPresenter, "quit").unwrap();
        assert_eq!(outcome, LineOutcome::Quit);
    }

    #[test]
    fn interactive_reads_until_quit() {
        let config = config(&["-i", "-q"]);
        let input = io::Cursor::new("70 175\n\nreset\nquit\n70 bogus\n");
        assert_eq!(run_interactive(&config, input).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn interactive_continues_past_non_utf8() {
        let config = config(&["-i", "-q"]);
        let input = io::Cursor::new(b"70 175\n\xff\xfe\n154lb 68in\n".to_vec());
        assert_eq!(run_interactive(&config, input).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn interactive_handles_missing_final_newline() {
        let config = config(&["-i", "-q"]);
        let input = io::Cursor::new("70 175\r\n154lb 68in");
        assert_eq!(run_interactive(&config, input).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn one_shot_exit_codes() {
        assert_eq!(run(&config(&["-q", "-w", "70", "-H", "175"])).unwrap(), 0);
        assert_eq!(run(&config(&["-q", "-w", "0", "-H", "175"])).unwrap(), 5);
        assert_eq!(run(&config(&["-q", "-w", "70"])).unwrap(), 4);
    }

    #[test]
    fn one_shot_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let path_str = path.to_str().unwrap();
        let code = run(&config(&[
            "-q",
            "-w",
            "154",
            "--weight-unit",
            "lb",
            "-H",
            "68",
            "--height-unit",
            "in",
            "-o",
            path_str,
        ]))
        .unwrap();
        assert_eq!(code, 0);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["bmi"], 23.4);
        assert_eq!(json["input"]["weight_unit"], "lb");
    }
}
