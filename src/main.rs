use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tictactoe_ai::ai::StrategyKind;
use tictactoe_ai::config::AppConfig;
use tictactoe_ai::session::GameSession;
use tictactoe_ai::ui::App;

/// Play tic-tac-toe in the terminal against an AI opponent.
#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against an AI opponent")]
struct Cli {
    /// Difficulty: Easy, MediumRuleBased, MediumHeuristic or HardMinimax
    #[arg(long)]
    strategy: Option<StrategyKind>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "tictactoe.toml")]
    config: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(strategy) = cli.strategy {
        app_config.engine.strategy = strategy;
    }

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    // Create app and run
    let mut app = App::new(GameSession::from_config(&app_config.engine));
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running game")
}
