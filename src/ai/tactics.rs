//! Probing helpers shared by the rule-based strategies.

use rand::Rng;

use crate::game::{Board, Player, Position};

/// First empty cell among `candidates` that completes a line for `player`.
///
/// Each candidate is probed on `scratch` and restored before the next one.
pub(crate) fn completing_move(
    scratch: &mut Board,
    player: Player,
    candidates: impl IntoIterator<Item = Position>,
) -> Option<Position> {
    candidates.into_iter().find(|&pos| {
        scratch.is_empty_at(pos) && scratch.probe(pos, player, |b| b.has_won(player))
    })
}

/// Uniformly random empty cell among `candidates`.
pub(crate) fn random_empty<R: Rng>(
    rng: &mut R,
    board: &Board,
    candidates: impl IntoIterator<Item = Position>,
) -> Option<Position> {
    let free: Vec<Position> = candidates
        .into_iter()
        .filter(|&pos| board.is_empty_at(pos))
        .collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}
