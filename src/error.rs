use std::path::PathBuf;

/// Errors from placing a mark on the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
}

/// Errors from the move-selection engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid strategy identifier '{0}'")]
    InvalidStrategy(String),

    #[error("no move available: board is full or the game is already decided")]
    NoMoveAvailable,
}

/// Errors from resolving a turn in a game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("game is over")]
    GameOver,
}

/// Errors from parsing a board literal such as `"XO_/_X_/__O"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected 9 cells, found {0}")]
    WrongCellCount(usize),

    #[error("invalid cell character '{0}'")]
    InvalidCell(char),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
