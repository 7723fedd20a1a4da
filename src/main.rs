//! Tic-tac-toe terminal UI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_replay::{Settings, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    init_tracing(&settings)?;

    info!(config = %cli.config.display(), "Starting tic-tac-toe");
    tui::run_tui(settings.view_settings())
}

/// Reads the settings file and applies command-line overrides.
fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load_or_default(&cli.config)?;
    if cli.ascending {
        settings = settings.with_ascending();
    }
    if cli.hide_history {
        settings = settings.with_hidden_history();
    }
    if let Some(log_file) = &cli.log_file {
        settings = settings.with_log_file(log_file.clone());
    }
    Ok(settings)
}

/// Logs to a file so output does not interfere with the TUI.
fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            settings.log_file().display()
        )
    })?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
