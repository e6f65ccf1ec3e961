use crate::error::EngineError;
use crate::game::{Board, Position};

/// Common interface for every move-selection algorithm.
///
/// Strategies read the board through a shared reference. Any speculative
/// probing happens on a private copy, so the caller's board is never changed.
pub trait Strategy {
    /// Pick an empty cell for the engine's side (O).
    ///
    /// Fails with [`EngineError::NoMoveAvailable`] when the board has no
    /// empty cell.
    fn select_move(&mut self, board: &Board) -> Result<Position, EngineError>;

    /// Return the strategy's display name.
    fn name(&self) -> &str;
}
