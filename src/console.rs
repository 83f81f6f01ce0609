//! Line-driven front end.
//!
//! Reads one command per line and writes the board and status after every
//! change. Generic over its streams so it can be driven from tests or
//! scripts as easily as from a terminal.

use crate::config::AppConfig;
use crate::games::tictactoe::{GameState, Position};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  0-8 or a cell name (e.g. center)  place the current player's marker
  reset, r                          start over
  board                             show the board
  json                              print the game state as JSON
  help                              show this help
  quit, q                           leave";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place at a cell index (may be out of range).
    Move(usize),
    /// Reset the game.
    Reset,
    /// Print the board and status.
    Board,
    /// Print the JSON snapshot.
    Json,
    /// Print help.
    Help,
    /// Leave the loop.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown(String),
}

impl ConsoleCommand {
    /// Parses a single input line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Self::Empty,
            "reset" | "r" => Self::Reset,
            "board" | "b" => Self::Board,
            "json" => Self::Json,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => {
                if let Ok(index) = line.parse::<usize>() {
                    Self::Move(index)
                } else if let Some(pos) = Position::from_label_or_number(line) {
                    Self::Move(pos.to_index())
                } else {
                    Self::Unknown(line.to_string())
                }
            }
        }
    }
}

/// Console session owning one game.
pub struct Console<'a> {
    game: GameState,
    config: &'a AppConfig,
}

impl<'a> Console<'a> {
    /// Creates a session with a fresh game.
    pub fn new(config: &'a AppConfig) -> Self {
        Self {
            game: GameState::new(),
            config,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        info!("Starting console session");
        writeln!(output, "Tic-tac-toe. Type 'help' for commands.")?;
        self.print_board(&mut output)?;

        for line in input.lines() {
            let line = line?;
            let command = ConsoleCommand::parse(&line);
            debug!(?command, "Console input");
            if !self.handle(command, &mut output)? {
                break;
            }
        }

        info!("Console session ended");
        Ok(())
    }

    /// Handles one command; returns false when the session should end.
    pub fn handle<W: Write>(
        &mut self,
        command: ConsoleCommand,
        output: &mut W,
    ) -> std::io::Result<bool> {
        match command {
            ConsoleCommand::Move(index) => match self.game.apply_move(index) {
                Ok(_) => self.print_board(output)?,
                Err(e) => {
                    if *self.config.show_rejections() {
                        writeln!(output, "Move ignored: {}", e)?;
                    }
                }
            },
            ConsoleCommand::Reset => {
                self.game.reset();
                self.print_board(output)?;
            }
            ConsoleCommand::Board => self.print_board(output)?,
            ConsoleCommand::Json => {
                let json = self
                    .game
                    .snapshot()
                    .to_json()
                    .map_err(std::io::Error::other)?;
                writeln!(output, "{}", json)?;
            }
            ConsoleCommand::Help => writeln!(output, "{}", HELP)?,
            ConsoleCommand::Quit => return Ok(false),
            ConsoleCommand::Empty => {}
            ConsoleCommand::Unknown(text) => {
                writeln!(output, "Unknown command: {} (type 'help')", text)?;
            }
        }
        Ok(true)
    }

    fn print_board<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        writeln!(output, "{}", self.game.board().display())?;
        writeln!(output, "{}", self.game.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ConsoleCommand::parse("4"), ConsoleCommand::Move(4));
        assert_eq!(ConsoleCommand::parse(" 12 "), ConsoleCommand::Move(12));
        assert_eq!(ConsoleCommand::parse("Center"), ConsoleCommand::Move(4));
        assert_eq!(
            ConsoleCommand::parse("bottom-right"),
            ConsoleCommand::Move(8)
        );
        assert_eq!(ConsoleCommand::parse("R"), ConsoleCommand::Reset);
        assert_eq!(ConsoleCommand::parse("q"), ConsoleCommand::Quit);
        assert_eq!(ConsoleCommand::parse(""), ConsoleCommand::Empty);
        assert_eq!(
            ConsoleCommand::parse("undo"),
            ConsoleCommand::Unknown("undo".to_string())
        );
    }

    #[test]
    fn test_rejection_is_silent_by_default() {
        let config = AppConfig::default();
        let mut console = Console::new(&config);
        let mut out = Vec::new();
        console.handle(ConsoleCommand::Move(0), &mut out).unwrap();
        out.clear();
        console.handle(ConsoleCommand::Move(0), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_rejection_reported_when_enabled() {
        let config = AppConfig::default().with_show_rejections(true);
        let mut console = Console::new(&config);
        let mut out = Vec::new();
        console.handle(ConsoleCommand::Move(9), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("out of range"));
    }
}
