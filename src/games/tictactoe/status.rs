//! Status line reported to the UI after every transition.

use super::Player;
use serde::{Deserialize, Serialize};

/// Where the game stands, as shown to the players.
///
/// `Won` and `Draw` are terminal: no further moves are accepted until
/// the game is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Game is in progress; the given player moves next.
    #[display("Player {}'s turn", _0)]
    Turn(Player),
    /// The given player completed a line.
    #[display("Player {} wins!", _0)]
    Won(Player),
    /// Board filled with no complete line.
    #[display("It's a draw!")]
    Draw,
}

impl Status {
    /// Returns true once the game no longer accepts moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Turn(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Won(player) => Some(*player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(Status::Turn(Player::X).to_string(), "Player X's turn");
        assert_eq!(Status::Turn(Player::O).to_string(), "Player O's turn");
        assert_eq!(Status::Won(Player::X).to_string(), "Player X wins!");
        assert_eq!(Status::Draw.to_string(), "It's a draw!");
    }

    #[test]
    fn test_terminal_states() {
        assert!(!Status::Turn(Player::X).is_terminal());
        assert!(Status::Won(Player::O).is_terminal());
        assert!(Status::Draw.is_terminal());
        assert_eq!(Status::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(Status::Draw.winner(), None);
    }
}
