use crate::game::{Board, Cell, Outcome, Player, Position, SIZE};
use crate::session::GameSession;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    cursor: Position,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session.board(), cursor, session.last_ai_move(), chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let status = match session.outcome() {
        Outcome::InProgress => format!(
            "You: {}  |  AI: {}  |  {}",
            Player::HUMAN.name(),
            Player::ENGINE.name(),
            session.strategy()
        ),
        _ => format!("Game Over  |  {}", session.strategy()),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    cursor: Position,
    last_ai_move: Option<Position>,
    area: Rect,
) {
    let mut lines = Vec::new();

    for row in 0..SIZE {
        let mut spans = Vec::new();
        for col in 0..SIZE {
            let pos = Position::new(row, col);
            let (symbol, color) = match board.get(pos) {
                Cell::Empty => ("   ", Color::DarkGray),
                Cell::X => (" X ", Color::Green),
                Cell::O => (" O ", Color::Red),
            };
            let mut style = Style::default().fg(color);
            if Some(pos) == last_ai_move {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            if pos == cursor {
                style = style.bg(Color::Cyan);
            }
            spans.push(Span::styled(symbol, style));
            if col < SIZE - 1 {
                spans.push(Span::raw("│"));
            }
        }
        lines.push(Line::from(spans));

        if row < SIZE - 1 {
            lines.push(Line::from("───┼───┼───"));
        }
    }

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("Arrows: Move  |  Enter: Place  |  R: Restart  |  Q: Quit");
    let line2 = Line::from(vec![
        Span::styled("Difficulty", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": 1 Easy  2 Rule Based  3 Heuristic  4 Minimax"),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
