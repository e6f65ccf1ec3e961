//! Core game logic: the 3x3 board, players, and terminal-state evaluation.

mod board;
mod outcome;
mod player;

pub use board::{Board, Cell, Position, SIZE};
pub use outcome::Outcome;
pub use player::Player;
