use crate::ai::StrategyKind;
use crate::error::{MoveError, SessionError};
use crate::game::{Outcome, Player, Position, SIZE};
use crate::session::GameSession;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use strum::IntoEnumIterator;

pub struct App {
    session: GameSession,
    cursor: Position,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        App {
            session,
            cursor: Position::CENTER,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => self.cursor.col = self.cursor.col.saturating_sub(1),
            KeyCode::Right => self.cursor.col = (self.cursor.col + 1).min(SIZE - 1),
            KeyCode::Up => self.cursor.row = self.cursor.row.saturating_sub(1),
            KeyCode::Down => self.cursor.row = (self.cursor.row + 1).min(SIZE - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_mark();
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(kind) = StrategyKind::iter().nth(index) {
                    self.session.set_strategy(kind);
                    self.message = Some(format!("Difficulty: {kind}"));
                }
            }
            KeyCode::Char('r') => {
                self.session.reset();
                self.cursor = Position::CENTER;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Place X at the cursor and let the engine reply
    fn place_mark(&mut self) {
        match self.session.play_turn(self.cursor) {
            Ok(outcome) => {
                self.message = Some(turn_message(outcome, self.session.last_ai_move()));
            }
            Err(SessionError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(SessionError::Move(MoveError::CellOccupied { .. })) => {
                self.message = Some("Cell is taken!".to_string());
            }
            Err(e) => {
                self.message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.cursor, &self.message);
    }
}

/// Status line after a resolved turn.
fn turn_message(outcome: Outcome, last_ai_move: Option<Position>) -> String {
    match outcome.winner() {
        Some(winner) if winner == Player::HUMAN => "Congratulations! You win!".to_string(),
        Some(winner) => format!("AI wins as {}! Better luck next time.", winner.name()),
        None if outcome == Outcome::Draw => "It's a tie!".to_string(),
        None => last_ai_move
            .map(|pos| format!("AI played {pos}"))
            .unwrap_or_default(),
    }
}
