//! Move selection: the [`Strategy`] trait, the four difficulty strategies,
//! and the [`MoveEngine`] facade that dispatches between them.

mod engine;
mod heuristic;
mod minimax;
mod random;
mod rule_based;
mod strategy;
mod tactics;

pub use engine::{MoveEngine, StrategyKind};
pub use heuristic::HeuristicStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;
pub use rule_based::RuleBasedStrategy;
pub use strategy::Strategy;
