pub mod core;
pub mod app;
pub mod config;
pub mod logging;

// Re-export for convenience
pub use crate::app::App;
pub use crate::config::Config;
pub use crate::core::{GameEngine, GameStateView, GameStatus, ValidationError};
