//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Player, Position, Square};

const HELP: &str = "Arrows move · Enter/Space or 1-9 place · r reset · q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = match app.notice() {
        Some(notice) => format!("{} ({})", app.game().status(), notice),
        None => app.game().status().to_string(),
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, &chunk) in [rows[0], rows[2], rows[4]].iter().enumerate() {
        draw_row(frame, chunk, app, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, &chunk) in [cols[0], cols[2], cols[4]].iter().enumerate() {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, chunk, app, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let game = app.game();

    let (symbol, base_style) = match game.board().get(pos) {
        Square::Empty if app.show_indices() => (
            key_label(pos),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (" ".to_string(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = game
        .winning_line()
        .is_some_and(|line| line.contains(&pos));

    let style = if on_winning_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && game.is_active() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Digit key that places a mark in `pos`.
fn key_label(pos: Position) -> String {
    (pos.to_index() + 1).to_string()
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(38)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); 3])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render_buffer(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 22)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn render(app: &App) -> String {
        render_buffer(app)
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    /// Screen coordinates of each cell's label on a fresh board, in index order.
    fn cell_coordinates() -> Vec<(u16, u16)> {
        let buffer = render_buffer(&App::new(&AppConfig::default()));
        // The help line on the last row also contains digits.
        let rows = buffer.area.height - 1;
        Position::ALL
            .iter()
            .map(|&pos| {
                let label = key_label(pos);
                (0..rows)
                    .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
                    .find(|&xy| buffer[xy].symbol() == label)
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_renders_initial_status() {
        let app = App::new(&AppConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains("Player X's turn"));
    }

    #[test]
    fn test_renders_marker_and_next_turn() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, '5');
        let screen = render(&app);
        assert!(screen.contains(" X "));
        assert!(screen.contains("Player O's turn"));
    }

    #[test]
    fn test_pressing_shown_label_fills_that_cell() {
        let coordinates = cell_coordinates();
        for (pos, &xy) in Position::ALL.iter().zip(&coordinates) {
            let mut app = App::new(&AppConfig::default());
            let label = key_label(*pos);
            let key = label.chars().next().unwrap();
            press(&mut app, key);

            assert_eq!(
                app.game().board().get(*pos),
                Square::Occupied(Player::X)
            );
            assert_eq!(render_buffer(&app)[xy].symbol(), "X", "label {label}");
        }
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let coordinates = cell_coordinates();
        let mut app = App::new(&AppConfig::default());
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, c);
        }
        let line = app.game().winning_line().unwrap();
        assert_eq!(
            line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );

        let buffer = render_buffer(&app);
        for (pos, &xy) in Position::ALL.iter().zip(&coordinates) {
            let highlighted = buffer[xy].bg == Color::Green;
            assert_eq!(highlighted, line.contains(pos), "cell {pos}");
        }
    }
}
