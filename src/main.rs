/// Entry point: parse arguments, load settings, start logging, dispatch.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use flagkit::{config, logging};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => match config::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Failed to load config {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => config::load(),
    };

    // Keep the guard alive so file logs are flushed on exit.
    let _log_guard = logging::init(settings.log_level.raised(cli.verbose), settings.log_to_file);

    match cli::run(cli, settings).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
