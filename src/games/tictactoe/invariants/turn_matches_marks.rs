//! Turn invariant: the player to move follows from the marks on the board.

use super::super::{GameState, Player, rules};
use super::Invariant;

/// Invariant: the current player agrees with the board.
///
/// While active, X moves when the counts are equal and O otherwise. After a
/// win the current player is the winner, since the turn is not advanced on
/// a winning move.
pub struct TurnMatchesMarks;

impl Invariant<GameState> for TurnMatchesMarks {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        if let Some(winner) = rules::winner(board) {
            return game.current_player() == winner;
        }

        if !game.is_active() {
            // Draw: X made the final (ninth) move.
            return game.current_player() == Player::X;
        }

        let expected = if board.count(Player::X) == board.count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Current player matches the marks on the board"
    }
}
