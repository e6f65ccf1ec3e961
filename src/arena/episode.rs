use crate::ai::Strategy;
use crate::error::SessionError;
use crate::game::{Cell, Outcome};
use crate::session::GameSession;

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeResult {
    pub outcome: Outcome,
    /// Marks on the board when the game ended.
    pub game_length: usize,
}

/// Play one game from an empty board. `opponent` picks X's moves; the
/// session's engine answers as O.
pub fn play_episode(
    session: &mut GameSession,
    opponent: &mut dyn Strategy,
) -> Result<EpisodeResult, SessionError> {
    session.reset();

    while !session.outcome().is_terminal() {
        let human_move = opponent.select_move(session.board())?;
        session.play_turn(human_move)?;
    }

    Ok(EpisodeResult {
        outcome: session.outcome(),
        game_length: 9 - session.board().count(Cell::Empty),
    })
}
