//! Tic-tac-toe - command-line entry point
//!
//! Hosts the console and terminal front ends around the game library.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tictactoe::{AppConfig, Console};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => tictactoe::run_tui(&config),
        Command::Console { show_rejections } => {
            let config = if show_rejections {
                config.with_show_rejections(true)
            } else {
                config
            };
            run_console(&config)
        }
    }
}

/// Run the line-driven console front end on stdin/stdout
#[instrument(skip_all)]
fn run_console(config: &AppConfig) -> Result<()> {
    initialize_console_tracing(config);

    info!("Starting console front end");
    let mut console = Console::new(config);
    console
        .run(io::stdin().lock(), io::stdout().lock())
        .context("Console I/O failed")?;

    Ok(())
}

fn initialize_console_tracing(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
