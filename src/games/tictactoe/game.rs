//! The game state machine: grid, turn, and active flag.

use super::action::{MoveError, MoveReport};
use super::contracts::LegalMove;
#[cfg(debug_assertions)]
use super::contracts::{Contract, MoveContract};
use super::rules;
use super::snapshot::GameSnapshot;
use super::{Board, Player, Position, Square, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one game.
///
/// Owned by the caller; there is no process-wide instance. Every
/// mutation goes through [`GameState::apply_move`] or
/// [`GameState::reset`], so a game is either in progress
/// (`active == true`) or finished in a win or a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) current_player: Player,
    pub(super) active: bool,
}

impl GameState {
    /// Creates a game in its starting configuration: empty grid, X to
    /// move, accepting moves.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            active: true,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose marker the next accepted move places.
    ///
    /// After a win this stays on the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true while the game accepts moves.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current status line.
    pub fn status(&self) -> Status {
        if self.active {
            Status::Turn(self.current_player)
        } else if rules::check_winner(&self.board) {
            Status::Won(self.current_player)
        } else {
            Status::Draw
        }
    }

    /// The completed line, once the game is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board)
    }

    /// Empty cells, or nothing once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.active {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// Serializable view for UI collaborators.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Places the current player's marker at `index` (0-8).
    ///
    /// Terminal conditions are evaluated in order: a completed line ends
    /// the game with the mover as winner (the turn does not advance), a
    /// full board ends it in a draw, otherwise the turn passes to the
    /// opponent.
    ///
    /// # Errors
    ///
    /// The move is refused, leaving the state untouched, when the game is
    /// over, the index is outside 0-8, or the square is occupied.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveReport, MoveError> {
        let position = LegalMove::check(index, self).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        let player = self.current_player;
        let mut next = self.clone();
        next.board.set(position, Square::Occupied(player));

        let status = if rules::check_winner(&next.board) {
            next.active = false;
            Status::Won(player)
        } else if rules::is_full(&next.board) {
            next.active = false;
            Status::Draw
        } else {
            next.current_player = player.opponent();
            Status::Turn(next.current_player)
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        *self = next;
        info!(%position, %status, "Move applied");
        Ok(MoveReport::new(position, player, status))
    }

    /// Returns the game to its starting configuration.
    ///
    /// Idempotent; always reports "Player X's turn".
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Status {
        *self = Self::new();
        info!("Game reset");
        self.status()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
