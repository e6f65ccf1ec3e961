use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::debug;

use super::heuristic::HeuristicStrategy;
use super::minimax::MinimaxStrategy;
use super::random::RandomStrategy;
use super::rule_based::RuleBasedStrategy;
use super::strategy::Strategy;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::game::{Board, Outcome, Position};

/// Selectable difficulty, in increasing order of strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum StrategyKind {
    #[serde(rename = "Easy")]
    Random,
    #[serde(rename = "MediumRuleBased")]
    RuleBased,
    #[serde(rename = "MediumHeuristic")]
    PrioritizedHeuristic,
    #[serde(rename = "HardMinimax")]
    Minimax,
}

impl StrategyKind {
    /// Stable identifier used in configuration and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            StrategyKind::Random => "Easy",
            StrategyKind::RuleBased => "MediumRuleBased",
            StrategyKind::PrioritizedHeuristic => "MediumHeuristic",
            StrategyKind::Minimax => "HardMinimax",
        }
    }

    /// Human-readable menu label.
    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::Random => "Easy (Random)",
            StrategyKind::RuleBased => "Medium (Rule Based)",
            StrategyKind::PrioritizedHeuristic => "Medium (Heuristic)",
            StrategyKind::Minimax => "Hard (Mini-Max Brute Force)",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts an identifier (any case) or an exact menu label.
impl FromStr for StrategyKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        StrategyKind::iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(s) || kind.label() == s)
            .ok_or_else(|| EngineError::InvalidStrategy(s.to_string()))
    }
}

/// Single entry point for move selection. Owns one instance of every
/// strategy and dispatches by [`StrategyKind`].
pub struct MoveEngine {
    random: RandomStrategy,
    rule_based: RuleBasedStrategy,
    heuristic: HeuristicStrategy,
    minimax: MinimaxStrategy,
}

impl MoveEngine {
    pub fn new() -> Self {
        MoveEngine {
            random: RandomStrategy::new(),
            rule_based: RuleBasedStrategy::new(),
            heuristic: HeuristicStrategy::new(),
            minimax: MinimaxStrategy::new(),
        }
    }

    /// Engine whose randomized strategies replay the same choices for a seed.
    pub fn seeded(seed: u64) -> Self {
        MoveEngine {
            random: RandomStrategy::with_seed(seed),
            rule_based: RuleBasedStrategy::with_seed(seed.wrapping_add(1)),
            heuristic: HeuristicStrategy::with_seed(seed.wrapping_add(2)),
            minimax: MinimaxStrategy::new(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    fn strategy_mut(&mut self, kind: StrategyKind) -> &mut dyn Strategy {
        match kind {
            StrategyKind::Random => &mut self.random,
            StrategyKind::RuleBased => &mut self.rule_based,
            StrategyKind::PrioritizedHeuristic => &mut self.heuristic,
            StrategyKind::Minimax => &mut self.minimax,
        }
    }

    /// Choose O's next move with the given strategy.
    ///
    /// Fails with [`EngineError::NoMoveAvailable`] if the game is already
    /// decided or the board is full.
    pub fn choose_move(
        &mut self,
        board: &Board,
        kind: StrategyKind,
    ) -> Result<Position, EngineError> {
        if Outcome::of(board).is_terminal() {
            return Err(EngineError::NoMoveAvailable);
        }
        let strategy = self.strategy_mut(kind);
        let pos = strategy.select_move(board)?;
        debug!(strategy = kind.id(), %pos, "engine selected move");
        Ok(pos)
    }

    /// Like [`MoveEngine::choose_move`], with the strategy given by identifier.
    pub fn choose_move_by_id(&mut self, board: &Board, id: &str) -> Result<Position, EngineError> {
        let kind: StrategyKind = id.parse()?;
        self.choose_move(board, kind)
    }
}

impl Default for MoveEngine {
    fn default() -> Self {
        Self::new()
    }
}
