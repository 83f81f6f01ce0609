//! Serializable view of a game for UI collaborators.

use super::{GameState, Player, Position};
use serde::{Deserialize, Serialize};

/// What a UI needs to render one frame: per-cell text and the status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cell text in index order ("" for empty).
    pub cells: [String; 9],
    /// Player whose marker the next move places.
    pub current_player: Player,
    /// Whether the game accepts moves.
    pub active: bool,
    /// Status line text.
    pub status: String,
    /// Completed line, if the game was won.
    pub winning_line: Option<[Position; 3]>,
}

impl From<&GameState> for GameSnapshot {
    fn from(game: &GameState) -> Self {
        let squares = *game.board().squares();
        Self {
            cells: squares.map(|sq| sq.text().to_string()),
            current_player: game.current_player(),
            active: game.is_active(),
            status: game.status().to_string(),
            winning_line: game.winning_line(),
        }
    }
}

impl GameSnapshot {
    /// Renders the snapshot as a single-line JSON document.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_new_game() {
        let snapshot = GameState::new().snapshot();
        assert!(snapshot.cells.iter().all(String::is_empty));
        assert_eq!(snapshot.status, "Player X's turn");
        assert!(snapshot.active);
        assert_eq!(snapshot.winning_line, None);
    }

    #[test]
    fn test_snapshot_json_fields() {
        let mut game = GameState::new();
        game.apply_move(4).unwrap();
        let json = game.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cells"][4], "X");
        assert_eq!(value["current_player"], "O");
        assert_eq!(value["status"], "Player O's turn");
        assert_eq!(value["active"], true);
    }
}
