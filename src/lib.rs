//! Tic-tac-toe library - a small, deterministic game state machine
//!
//! The core is [`GameState`]: a 3x3 grid, the player to move, and whether
//! the game still accepts moves. Front ends drive it through
//! [`GameState::apply_move`] and [`GameState::reset`] and render what they
//! read back.
//!
//! # Architecture
//!
//! - **Games**: the state machine, win/draw rules, invariants and contracts
//! - **Console**: line-driven front end over any `BufRead`/`Write`
//! - **TUI**: ratatui front end with cursor navigation
//! - **Config**: optional TOML settings shared by both front ends
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, Player, Status};
//!
//! let mut game = GameState::new();
//! for index in [0, 1, 3, 2, 6] {
//!     game.apply_move(index).unwrap();
//! }
//! assert_eq!(game.status(), Status::Won(Player::X));
//! assert!(!game.is_active());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Front ends
pub use console::{Console, ConsoleCommand};
pub use tui::{App, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Contract, GameSnapshot, GameState, LegalMove, MoveContract, MoveError, MoveReport,
    Player, Position, SingleCellFilled, Square, Status, invariants, rules,
};
