//! Contract-based validation for moves.
//!
//! A move is checked against its preconditions before anything is
//! touched, and the resulting state is checked against the postconditions
//! before it replaces the old one: {P} apply_move {Q}.

use super::action::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::{GameState, Position, Square};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions relating the state before and after.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game still accepts moves.
pub struct GameIsActive;

impl GameIsActive {
    /// Fails with [`MoveError::GameOver`] once the game is won or drawn.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_active() {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: the index names one of the nine cells.
pub struct IndexInRange;

impl IndexInRange {
    /// Resolves the index to a position.
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfRange(index))
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if a marker is already there.
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition for a move at a cell index.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the target position.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &GameState) -> Result<Position, MoveError> {
        GameIsActive::check(game)?;
        let pos = IndexInRange::check(index)?;
        SquareIsEmpty::check(pos, game)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: exactly one empty square became the mover's marker.
pub struct SingleCellFilled;

impl SingleCellFilled {
    /// Compares the two boards square by square.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let changed: Vec<_> = Position::ALL
            .into_iter()
            .filter(|&pos| before.board().get(pos) != after.board().get(pos))
            .collect();

        match changed.as_slice() {
            [pos] => {
                before.board().get(*pos) == Square::Empty
                    && after.board().get(*pos) == Square::Occupied(before.current_player())
            }
            _ => {
                warn!(changed = changed.len(), "Unexpected number of changed squares");
                false
            }
        }
    }
}

/// Contract for `apply_move`.
///
/// Preconditions:
/// - Game is active
/// - Index is in range
/// - Square is empty
///
/// Postconditions:
/// - Exactly one square went from empty to the mover's marker
/// - All game invariants hold
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(game: &GameState, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(*index, game).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if !SingleCellFilled::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: exactly one empty square must be filled".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after move");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
