//! Mark balance invariant: X leads O by at most one.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `#X - #O` is 0 or 1.
///
/// X always moves first and players alternate, so no other count is
/// reachable.
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, Square};

    #[test]
    fn test_alternating_play_holds() {
        let mut game = GameState::new();
        for index in [4, 0, 8, 2] {
            game.apply_move(index).expect("legal move");
            assert!(BalancedMarks::holds(&game));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut game = GameState::new();
        game.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!BalancedMarks::holds(&game));
    }
}
