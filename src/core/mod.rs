//! Game rules: target selection, guess validation, feedback and the
//! win/loss state machine. No terminal or I/O code lives here.

pub mod engine;
pub mod error;
pub mod rng;
pub mod state;

pub use engine::{parse_guess, GameEngine};
pub use error::ValidationError;
pub use rng::{FixedTarget, SeededSource, TargetSource, ThreadRngSource};
pub use state::{
    Feedback, GameState, GameStateView, GameStatus, MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS,
};
