//! Terminal UI: a 3x3 grid with a movable cursor, played against the engine.

mod app;
mod game_view;

pub use app::App;
