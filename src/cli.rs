//! Command-line interface for the tic-tac-toe front ends.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe on a 3x3 grid
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on a 3x3 grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI (arrow keys, Enter, 1-9)
    Tui,

    /// Play line by line on stdin/stdout
    Console {
        /// Report refused moves instead of silently ignoring them
        #[arg(long)]
        show_rejections: bool,
    },
}
