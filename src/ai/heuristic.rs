use rand::rngs::StdRng;
use rand::SeedableRng;

use super::strategy::Strategy;
use super::tactics::{completing_move, random_empty};
use crate::error::EngineError;
use crate::game::{Board, Player, Position, SIZE};

/// Win and block checks interleaved row by row, then center, a random
/// corner, and finally any random empty cell.
///
/// Because each row is checked for a win and then a block before moving on,
/// a block in an earlier row is preferred over a win in a later row.
pub struct HeuristicStrategy {
    rng: StdRng,
}

impl HeuristicStrategy {
    pub fn new() -> Self {
        HeuristicStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        HeuristicStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

fn row_cells(row: usize) -> impl Iterator<Item = Position> {
    (0..SIZE).map(move |col| Position::new(row, col))
}

impl Strategy for HeuristicStrategy {
    fn select_move(&mut self, board: &Board) -> Result<Position, EngineError> {
        let mut scratch = *board;

        for row in 0..SIZE {
            if let Some(pos) = completing_move(&mut scratch, Player::O, row_cells(row)) {
                return Ok(pos);
            }
            if let Some(pos) = completing_move(&mut scratch, Player::X, row_cells(row)) {
                return Ok(pos);
            }
        }

        if board.is_empty_at(Position::CENTER) {
            return Ok(Position::CENTER);
        }

        random_empty(&mut self.rng, board, Position::CORNERS)
            .or_else(|| random_empty(&mut self.rng, board, Position::ALL))
            .ok_or(EngineError::NoMoveAvailable)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn select(board: &str) -> Result<Position, EngineError> {
        let board: Board = board.parse().unwrap();
        HeuristicStrategy::new().select_move(&board)
    }

    #[test]
    fn takes_winning_move() {
        assert_eq!(select("OO_/XX_/___").unwrap(), Position::new(0, 2));
    }

    #[test]
    fn blocks_opponent_win() {
        assert_eq!(select("XX_/O__/___").unwrap(), Position::new(0, 2));
    }

    #[test]
    fn win_beats_block_in_the_same_row() {
        // In row 1, X threatens (1, 0) down the left column while O wins at
        // (1, 2) down the right column.
        assert_eq!(select("X_O/_X_/X_O").unwrap(), Position::new(1, 2));
    }

    #[test]
    fn earlier_row_block_beats_later_row_win() {
        // Rule-based would win at (2, 2); the row-interleaved scan blocks at
        // (0, 2) first.
        assert_eq!(select("XX_/_X_/OO_").unwrap(), Position::new(0, 2));
    }

    #[test]
    fn takes_center_on_empty_board() {
        assert_eq!(select("___/___/___").unwrap(), Position::CENTER);
    }

    #[test]
    fn takes_a_corner_when_center_is_taken() {
        let board: Board = "___/_X_/___".parse().unwrap();
        let mut strategy = HeuristicStrategy::new();
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let pos = strategy.select_move(&board).unwrap();
            assert!(Position::CORNERS.contains(&pos), "{pos} is not a corner");
            seen.insert(pos);
        }
        assert_eq!(seen.len(), 4, "every corner should eventually be chosen");
    }

    #[test]
    fn falls_back_to_any_empty_cell() {
        let pos = select("XOX/_X_/OXO").unwrap();
        assert!([Position::new(1, 0), Position::new(1, 2)].contains(&pos));
    }

    #[test]
    fn full_board_has_no_move() {
        assert_eq!(select("XOX/XOO/OXX"), Err(EngineError::NoMoveAvailable));
    }

    #[test]
    fn leaves_board_unchanged() {
        let mut strategy = HeuristicStrategy::new();
        for literal in ["XX_/O__/___", "XX_/_X_/OO_", "___/_X_/___", "XOX/_X_/OXO"] {
            let board: Board = literal.parse().unwrap();
            let before = board;
            strategy.select_move(&board).unwrap();
            assert_eq!(board, before);
        }
    }
}
