use std::collections::VecDeque;

use super::episode::EpisodeResult;
use crate::game::Outcome;

/// Lifetime results from the engine's (O's) point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArenaTotals {
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
    pub games: u64,
}

/// Arena metrics tracker with rolling window computations.
pub struct ArenaMetrics {
    episode_results: VecDeque<EpisodeResult>,
    capacity: usize,
    totals: ArenaTotals,
}

impl ArenaMetrics {
    pub fn with_capacity(capacity: usize) -> Self {
        ArenaMetrics {
            episode_results: VecDeque::with_capacity(capacity),
            capacity,
            totals: ArenaTotals::default(),
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn record_episode(&mut self, result: EpisodeResult) {
        self.totals.games += 1;
        match result.outcome {
            Outcome::OWins => self.totals.wins += 1,
            Outcome::XWins => self.totals.losses += 1,
            Outcome::Draw => self.totals.draws += 1,
            Outcome::InProgress => {}
        }

        self.episode_results.push_back(result);
        if self.episode_results.len() > self.capacity {
            self.episode_results.pop_front();
        }
    }

    fn rate(&self, last_n: usize, outcome: Outcome) -> f32 {
        let n = self.episode_results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let hits = self
            .episode_results
            .iter()
            .rev()
            .take(n)
            .filter(|r| r.outcome == outcome)
            .count();
        hits as f32 / n as f32
    }

    /// Engine win rate in the last N games.
    pub fn win_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, Outcome::OWins)
    }

    /// Engine loss rate in the last N games.
    pub fn loss_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, Outcome::XWins)
    }

    /// Draw rate in the last N games.
    pub fn draw_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, Outcome::Draw)
    }

    /// Average game length over the last N games.
    pub fn average_game_length(&self, last_n: usize) -> f32 {
        let n = self.episode_results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self
            .episode_results
            .iter()
            .rev()
            .take(n)
            .map(|r| r.game_length)
            .sum();
        total as f32 / n as f32
    }

    pub fn total_episodes(&self) -> u64 {
        self.totals.games
    }

    pub fn totals(&self) -> ArenaTotals {
        self.totals
    }
}

impl Default for ArenaMetrics {
    fn default() -> Self {
        Self::new()
    }
}
