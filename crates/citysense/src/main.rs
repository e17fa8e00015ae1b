mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let settings = match cli::Settings::try_parse() {
        Ok(settings) => settings,
        Err(err) => err.exit(),
    };

    logging::setup_logging();
    tracing::debug!(
        "{} v{} starting with {:?}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        settings.command
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match commands::run(&settings, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
