use super::board::Cell;

/// One side of the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The side played from the keyboard.
    pub const HUMAN: Player = Player::X;
    /// The side the engine answers with.
    pub const ENGINE: Player = Player::HUMAN.other();

    pub const fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub const fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// The mark letter, as drawn on the board.
    pub fn name(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}
