use rand::rngs::StdRng;
use rand::SeedableRng;

use super::strategy::Strategy;
use super::tactics::{completing_move, random_empty};
use crate::error::EngineError;
use crate::game::{Board, Player, Position};

/// Fixed rule order: win, block, center, random corner, random side.
///
/// The win and block rules each scan the whole board in row-major order, so
/// a win anywhere on the board beats any block.
pub struct RuleBasedStrategy {
    rng: StdRng,
}

impl RuleBasedStrategy {
    pub fn new() -> Self {
        RuleBasedStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RuleBasedStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RuleBasedStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RuleBasedStrategy {
    fn select_move(&mut self, board: &Board) -> Result<Position, EngineError> {
        let mut scratch = *board;

        if let Some(pos) = completing_move(&mut scratch, Player::O, Position::ALL) {
            return Ok(pos);
        }
        if let Some(pos) = completing_move(&mut scratch, Player::X, Position::ALL) {
            return Ok(pos);
        }
        if board.is_empty_at(Position::CENTER) {
            return Ok(Position::CENTER);
        }

        random_empty(&mut self.rng, board, Position::CORNERS)
            .or_else(|| random_empty(&mut self.rng, board, Position::SIDES))
            .ok_or(EngineError::NoMoveAvailable)
    }

    fn name(&self) -> &str {
        "Rule Based"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn select(board: &str) -> Result<Position, EngineError> {
        let board: Board = board.parse().unwrap();
        RuleBasedStrategy::new().select_move(&board)
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
    fn prefers_win_anywhere_over_earlier_block() {
        // X threatens (0, 2) in the top row; O wins at (2, 2) in the bottom row.
        assert_eq!(select("XX_/_X_/OO_").unwrap(), Position::new(2, 2));
    }

    #[test]
    fn takes_center_on_empty_board() {
        assert_eq!(select("___/___/___").unwrap(), Position::CENTER);
    }

    #[test]
    fn takes_a_corner_when_center_is_taken() {
        let board: Board = "___/_X_/___".parse().unwrap();
        let mut strategy = RuleBasedStrategy::new();
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let pos = strategy.select_move(&board).unwrap();
            assert!(Position::CORNERS.contains(&pos), "{pos} is not a corner");
            seen.insert(pos);
        }
        assert_eq!(seen.len(), 4, "every corner should eventually be chosen");
    }

    #[test]
    fn takes_a_side_when_center_and_corners_are_taken() {
        // No line can be completed by either side.
        let pos = select("XOX/_X_/OXO").unwrap();
        assert!(Position::SIDES.contains(&pos));
        assert!([Position::new(1, 0), Position::new(1, 2)].contains(&pos));
    }

    #[test]
    fn full_board_has_no_move() {
        assert_eq!(select("XOX/XOO/OXX"), Err(EngineError::NoMoveAvailable));
    }

    #[test]
    fn leaves_board_unchanged() {
        let mut strategy = RuleBasedStrategy::new();
        for literal in ["XX_/O__/___", "OO_/XX_/___", "___/_X_/___", "XOX/_X_/OXO"] {
            let board: Board = literal.parse().unwrap();
            let before = board;
            strategy.select_move(&board).unwrap();
            assert_eq!(board, before);
        }
    }
}
