use std::fmt;
use std::str::FromStr;

use super::player::Player;
use crate::error::{MoveError, ParseBoardError};

pub const SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A (row, col) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Every cell in row-major order.
    pub const ALL: [Position; 9] = [
        Position::new(0, 0),
        Position::new(0, 1),
        Position::new(0, 2),
        Position::new(1, 0),
        Position::new(1, 1),
        Position::new(1, 2),
        Position::new(2, 0),
        Position::new(2, 1),
        Position::new(2, 2),
    ];

    pub const CENTER: Position = Position::new(1, 1);

    pub const CORNERS: [Position; 4] = [
        Position::new(0, 0),
        Position::new(0, 2),
        Position::new(2, 0),
        Position::new(2, 2),
    ];

    pub const SIDES: [Position; 4] = [
        Position::new(0, 1),
        Position::new(1, 0),
        Position::new(1, 2),
        Position::new(2, 1),
    ];

    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight winning lines: three rows, three columns, two diagonals.
const LINES: [[Position; 3]; 8] = [
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Build a board from explicit rows, without checking turn order.
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Board { cells }
    }

    /// Get the cell at a specific position.
    ///
    /// `pos` must be on the board; use [`Board::place`] for unchecked input.
    pub fn get(&self, pos: Position) -> Cell {
        debug_assert!(pos.in_bounds(), "position {pos} is off the board");
        self.cells[pos.row][pos.col]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Place a player's mark on an empty cell.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        let pos = Position::new(row, col);
        if !pos.in_bounds() {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self.is_empty_at(pos) {
            return Err(MoveError::CellOccupied { row, col });
        }
        self.cells[row][col] = player.to_cell();
        Ok(())
    }

    /// Temporarily mark `pos` for `player`, run `f`, then restore the cell.
    pub(crate) fn probe<R>(
        &mut self,
        pos: Position,
        player: Player,
        f: impl FnOnce(&mut Board) -> R,
    ) -> R {
        let previous = self.cells[pos.row][pos.col];
        self.cells[pos.row][pos.col] = player.to_cell();
        let result = f(self);
        self.cells[pos.row][pos.col] = previous;
        result
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self.is_empty_at(pos))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c != Cell::Empty)
    }

    /// Check whether `player` holds a full row, column or diagonal
    pub fn has_won(&self, player: Player) -> bool {
        let cell = player.to_cell();
        LINES
            .iter()
            .any(|line| line.iter().all(|&pos| self.get(pos) == cell))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Parses nine cells in row-major order. `X`/`O` are marks, `_` or `.` are
/// empty; whitespace, `/` and `|` are ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '_' | '.' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(ParseBoardError::InvalidCell(c)),
            };
            cells.push(cell);
        }
        if cells.len() != SIZE * SIZE {
            return Err(ParseBoardError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (pos, cell) in Position::ALL.iter().zip(cells) {
            board.cells[pos.row][pos.col] = cell;
        }
        Ok(board)
    }
}
