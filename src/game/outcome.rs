use super::{Board, Player};

/// Result of evaluating a board. Derived on demand, never stored on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    XWins,
    OWins,
    Draw,
}

impl Outcome {
    /// Evaluate a board. X is checked first; legal play never lets both sides win.
    pub fn of(board: &Board) -> Self {
        if board.has_won(Player::X) {
            Outcome::XWins
        } else if board.has_won(Player::O) {
            Outcome::OWins
        } else if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Check if the game is over
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}
