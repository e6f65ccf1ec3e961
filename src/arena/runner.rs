use tracing::info;

use super::episode::play_episode;
use super::metrics::ArenaMetrics;
use crate::ai::{MoveEngine, RandomStrategy, StrategyKind};
use crate::config::ArenaConfig;
use crate::error::{ConfigError, SessionError};
use crate::session::GameSession;

/// Offset between the engine seed and the opponent seed, so the two random
/// streams differ.
const OPPONENT_SEED_OFFSET: u64 = 0x9e37_79b9;

/// Runs a strategy against a uniformly random X opponent.
pub struct Arena {
    config: ArenaConfig,
}

impl Arena {
    /// Rejects a zero game count or log interval.
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Arena { config })
    }

    /// Play `config.games` games with `kind` as O. A seed makes the run
    /// reproducible.
    pub fn run(&self, kind: StrategyKind, seed: Option<u64>) -> Result<ArenaMetrics, SessionError> {
        let (engine, mut opponent) = match seed {
            Some(seed) => (
                MoveEngine::seeded(seed),
                RandomStrategy::with_seed(seed.wrapping_add(OPPONENT_SEED_OFFSET)),
            ),
            None => (MoveEngine::new(), RandomStrategy::new()),
        };
        let mut session = GameSession::new(kind, engine);
        let mut metrics = ArenaMetrics::with_capacity(self.config.log_interval);

        info!(
            strategy = kind.id(),
            games = self.config.games,
            "starting arena run vs random opponent"
        );

        for game in 1..=self.config.games {
            let result = play_episode(&mut session, &mut opponent)?;
            metrics.record_episode(result);

            if game % self.config.log_interval == 0 {
                let window = self.config.log_interval;
                info!(
                    game,
                    win_rate = %format!("{:.1}%", metrics.win_rate(window) * 100.0),
                    draw_rate = %format!("{:.1}%", metrics.draw_rate(window) * 100.0),
                    loss_rate = %format!("{:.1}%", metrics.loss_rate(window) * 100.0),
                    avg_len = %format!("{:.1}", metrics.average_game_length(window)),
                    "arena progress"
                );
            }
        }

        let totals = metrics.totals();
        info!(
            strategy = kind.id(),
            wins = totals.wins,
            draws = totals.draws,
            losses = totals.losses,
            "arena run complete"
        );
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena(games: usize) -> Arena {
        Arena::new(ArenaConfig {
            games,
            log_interval: 25,
        })
        .unwrap()
    }

    #[test]
    fn test_zero_log_interval_is_rejected() {
        let result = Arena::new(ArenaConfig {
            games: 3,
            log_interval: 0,
        });
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_zero_games_is_rejected() {
        let result = Arena::new(ArenaConfig {
            games: 0,
            log_interval: 25,
        });
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_log_interval_longer_than_run() {
        let metrics = Arena::new(ArenaConfig {
            games: 3,
            log_interval: 10,
        })
        .unwrap()
        .run(StrategyKind::Random, Some(1))
        .unwrap();
        assert_eq!(metrics.totals().games, 3);
    }

    #[test]
    fn test_run_plays_every_game() {
        let metrics = arena(50).run(StrategyKind::Random, Some(1)).unwrap();
        let totals = metrics.totals();
        assert_eq!(totals.games, 50);
        assert_eq!(totals.wins + totals.draws + totals.losses, 50);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = arena(40).run(StrategyKind::RuleBased, Some(17)).unwrap();
        let b = arena(40).run(StrategyKind::RuleBased, Some(17)).unwrap();
        assert_eq!(a.totals(), b.totals());
    }

    #[test]
    fn test_minimax_never_loses_to_random() {
        let metrics = arena(100).run(StrategyKind::Minimax, Some(3)).unwrap();
        assert_eq!(metrics.totals().losses, 0);
    }

    #[test]
    fn test_minimax_beats_random_strategy() {
        let minimax = arena(100).run(StrategyKind::Minimax, Some(8)).unwrap();
        let random = arena(100).run(StrategyKind::Random, Some(8)).unwrap();
        assert!(
            minimax.totals().wins > random.totals().wins,
            "minimax {:?} vs random {:?}",
            minimax.totals(),
            random.totals()
        );
    }

    #[test]
    fn test_rule_based_rarely_loses() {
        let metrics = arena(200).run(StrategyKind::RuleBased, Some(21)).unwrap();
        let totals = metrics.totals();
        assert!(
            (totals.losses as f32) < 0.3 * totals.games as f32,
            "rule-based lost too often: {totals:?}"
        );
    }
}
