use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

use tictactoe_ai::ai::StrategyKind;
use tictactoe_ai::arena::Arena;
use tictactoe_ai::config::AppConfig;

/// Evaluate AI strategies against a random opponent.
#[derive(Parser)]
#[command(name = "arena", about = "Evaluate tic-tac-toe strategies against a random opponent")]
struct Cli {
    /// Strategy to evaluate (defaults to the configured one)
    #[arg(long, conflicts_with = "all")]
    strategy: Option<StrategyKind>,

    /// Evaluate every strategy
    #[arg(long)]
    all: bool,

    /// Override number of games per strategy
    #[arg(long)]
    games: Option<usize>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "tictactoe.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        if games == 0 {
            bail!("--games must be > 0");
        }
        app_config.arena.games = games;
    }
    let seed = cli.seed.or(app_config.engine.seed);

    let kinds: Vec<StrategyKind> = if cli.all {
        StrategyKind::iter().collect()
    } else {
        vec![cli.strategy.unwrap_or(app_config.engine.strategy)]
    };

    let arena = Arena::new(app_config.arena.clone()).context("invalid arena settings")?;
    let mut rows = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let metrics = arena
            .run(kind, seed)
            .with_context(|| format!("running arena for {}", kind.id()))?;
        rows.push((kind, metrics.totals()));
    }

    println!("-------------------------------------------------------------");
    println!(
        "{:<30} {:>7} {:>7} {:>7} {:>7}",
        "Strategy (as O vs random X)", "games", "wins", "draws", "losses"
    );
    for (kind, totals) in rows {
        println!(
            "{:<30} {:>7} {:>7} {:>7} {:>7}",
            kind.label(),
            totals.games,
            totals.wins,
            totals.draws,
            totals.losses
        );
    }
    println!("-------------------------------------------------------------");

    Ok(())
}
