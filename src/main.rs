use std::fs::OpenOptions;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use changelog_fragment::{
    cli::{tui, tui::fragment::Outcome, Cli, LogLevel},
    config::SettingsLoader,
};

/// Initialize tracing with CLI flags
///
/// The terminal belongs to the wizard, so logs go to `--log-file` when one is
/// given. `RUST_LOG` wins over `--log-level`.
fn initialize_tracing(log_level: LogLevel, log_file: Option<&Path>) -> Result<()> {
    let log_level = match (log_level, log_file) {
        (LogLevel::Off, Some(_)) => LogLevel::Info,
        (level, _) => level,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    initialize_tracing(cli.log_level, cli.log_file.as_deref())?;

    let mut loader = SettingsLoader::new()
        .with_changelog_dir(cli.dir)
        .with_lookup_command(cli.lookup);
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    let settings = loader.load().context("Failed to load settings")?;

    let outcome = tui::run_fragment_wizard(settings)
        .await
        .context("Fragment wizard failed")?;

    match &outcome {
        Outcome::Written(path) => info!(path = %path.display(), "Done"),
        // Already shown in the final frame
        Outcome::Failed(err) => error!(error = %err, "Exiting with error"),
    }

    // Returning instead of exiting lets the runtime shut down and reap an
    // abandoned lookup
    Ok(ExitCode::from(outcome.exit_code()))
}
