//! Active flag invariant: the game accepts moves exactly while undecided.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: `active` is false iff a line is complete or the board is full.
pub struct ActiveMatchesTerminal;

impl Invariant<GameState> for ActiveMatchesTerminal {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let terminal = rules::check_winner(board) || rules::is_full(board);
        game.is_active() != terminal
    }

    fn description() -> &'static str {
        "Game is active exactly while there is no win and the board is not full"
    }
}
