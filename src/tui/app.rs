//! Application state and key handling.

use super::input::{digit_to_index, move_cursor};
use crate::config::AppConfig;
use crate::games::tictactoe::{GameState, Position};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::debug;

/// Main application state.
pub struct App {
    game: GameState,
    cursor: Position,
    show_indices: bool,
    show_rejections: bool,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an application with a fresh game.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            show_indices: *config.show_indices(),
            show_rejections: *config.show_rejections(),
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show the digit key that fills them.
    pub fn show_indices(&self) -> bool {
        self.show_indices
    }

    /// Message about the last refused move, if reporting is enabled.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor.to_index()),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                if let Some(index) = digit_to_index(c) {
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.place(index);
                }
            }
            _ => {}
        }
    }

    fn place(&mut self, index: usize) {
        match self.game.apply_move(index) {
            Ok(report) => {
                debug!(%report, "Move applied to UI state");
                self.notice = None;
            }
            Err(e) => {
                debug!(error = %e, "Move ignored");
                if self.show_rejections {
                    self.notice = Some(e.to_string());
                }
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square, Status};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.game().board().get(Position::TopCenter),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.game().status(), Status::Turn(Player::O));
    }

    #[test]
    fn test_digits_play_a_full_game() {
        let mut app = App::new(&AppConfig::default());
        for c in ['1', '2', '4', '3', '7'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.game().status(), Status::Won(Player::X));
        assert_eq!(app.cursor(), Position::BottomLeft);
    }

    #[test]
    fn test_rejection_notice_only_when_enabled() {
        let mut quiet = App::new(&AppConfig::default());
        press(&mut quiet, KeyCode::Char('5'));
        press(&mut quiet, KeyCode::Char('5'));
        assert_eq!(quiet.notice(), None);

        let mut loud = App::new(&AppConfig::default().with_show_rejections(true));
        press(&mut loud, KeyCode::Char('5'));
        press(&mut loud, KeyCode::Char('5'));
        assert!(loud.notice().is_some_and(|n| n.contains("occupied")));
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game(), &GameState::new());
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
