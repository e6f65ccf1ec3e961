use rand::rngs::StdRng;
use rand::SeedableRng;

use super::strategy::Strategy;
use super::tactics::random_empty;
use crate::error::EngineError;
use crate::game::{Board, Position};

/// A strategy that selects uniformly at random from the empty cells.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &Board) -> Result<Position, EngineError> {
        random_empty(&mut self.rng, board, Position::ALL).ok_or(EngineError::NoMoveAvailable)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
