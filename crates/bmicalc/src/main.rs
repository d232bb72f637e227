//! BmiCalc-rs: body mass index calculator.

use anyhow::Result;
use bmicalc_core::exit_codes;
use bmicalc_lib::{app, config, errors};

fn main() -> Result<()> {
    // Initialize tracing on stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = match config::AppConfig::try_parse() {
        Ok(config) => config,
        Err(err) => {
            err.print()?;
            std::process::exit(errors::clap_exit_code(&err));
        }
    };
    let code = app::run(&config)?;
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}
