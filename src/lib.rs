//! # Tic-Tac-Toe AI
//!
//! Tic-tac-toe against an automated opponent with selectable difficulty.
//! The human plays X and always moves first; the engine plays O.
//!
//! ## Modules
//!
//! - [`game`]: Board, players, positions, and terminal-state evaluation
//! - [`ai`]: Strategy trait, random / rule-based / heuristic / minimax
//!   strategies, and the `MoveEngine` facade
//! - [`session`]: Game-loop controller resolving one turn per call
//! - [`arena`]: Headless evaluation against a random opponent
//! - [`ui`]: Terminal UI
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
