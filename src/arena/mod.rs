//! Headless evaluation: a strategy plays O against a random X opponent for
//! many games, with rolling win/draw/loss statistics.

mod episode;
mod metrics;
mod runner;

pub use episode::{play_episode, EpisodeResult};
pub use metrics::{ArenaMetrics, ArenaTotals};
pub use runner::Arena;
