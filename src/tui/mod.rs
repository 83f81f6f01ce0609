//! Terminal UI front end.

mod app;
mod input;
mod ui;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

pub use app::App;

/// Runs the terminal UI until the user quits.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI.
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe TUI");

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, App::new(config));
    ratatui::restore();

    if let Err(err) = &result {
        tracing::error!(error = ?err, "TUI loop error");
    }
    result
}

#[instrument(skip_all)]
fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }

    info!("User quit");
    Ok(())
}
