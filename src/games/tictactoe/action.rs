//! Move outcomes: what an accepted move changed, or why it was refused.

use super::{Player, Position, Square, Status};
use serde::{Deserialize, Serialize};

/// Result of an accepted move.
///
/// Carries everything a UI needs to redraw: the cell that changed, the
/// marker now in it, and the new status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveReport {
    /// The cell that was filled.
    pub position: Position,
    /// The marker placed in that cell.
    pub player: Player,
    /// Status after the move.
    pub status: Status,
}

impl MoveReport {
    /// Display text for the affected cell.
    pub fn cell_text(&self) -> &'static str {
        Square::Occupied(self.player).text()
    }
}

impl std::fmt::Display for MoveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}. {}", self.player, self.position.label(), self.status)
    }
}

/// Reason a move was refused. The game state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a cell (valid range is 0-8).
    #[display("Cell index {} is out of range (0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
