//! Game-loop controller: owns the board and resolves one human turn plus the
//! engine's reply per call.

use tracing::debug;

use crate::ai::{MoveEngine, StrategyKind};
use crate::config::EngineConfig;
use crate::error::SessionError;
use crate::game::{Board, Outcome, Player, Position};

/// A single game of human (X) against the engine (O).
pub struct GameSession {
    board: Board,
    strategy: StrategyKind,
    engine: MoveEngine,
    outcome: Outcome,
    last_ai_move: Option<Position>,
}

impl GameSession {
    pub fn new(strategy: StrategyKind, engine: MoveEngine) -> Self {
        GameSession {
            board: Board::new(),
            strategy,
            engine,
            outcome: Outcome::InProgress,
            last_ai_move: None,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.strategy, MoveEngine::from_config(config))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// Switch difficulty; takes effect from the next engine move.
    pub fn set_strategy(&mut self, strategy: StrategyKind) {
        self.strategy = strategy;
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn last_ai_move(&self) -> Option<Position> {
        self.last_ai_move
    }

    /// Start a new game with the same strategy.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.outcome = Outcome::InProgress;
        self.last_ai_move = None;
    }

    /// Place X at `human_move`, then let the engine answer unless the game
    /// ended. Returns the outcome after the turn.
    ///
    /// An occupied or off-board cell is rejected without changing anything.
    pub fn play_turn(&mut self, human_move: Position) -> Result<Outcome, SessionError> {
        if self.outcome.is_terminal() {
            return Err(SessionError::GameOver);
        }

        self.board.place(human_move.row, human_move.col, Player::HUMAN)?;
        self.last_ai_move = None;
        self.outcome = Outcome::of(&self.board);
        if self.outcome.is_terminal() {
            debug!(outcome = ?self.outcome, "game ended on human move");
            return Ok(self.outcome);
        }

        let reply = self.engine.choose_move(&self.board, self.strategy)?;
        self.board.place(reply.row, reply.col, Player::ENGINE)?;
        self.last_ai_move = Some(reply);
        self.outcome = Outcome::of(&self.board);
        debug!(human = %human_move, ai = %reply, outcome = ?self.outcome, "turn resolved");
        Ok(self.outcome)
    }
}
