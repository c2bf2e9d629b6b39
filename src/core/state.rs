//! Game state for a single guessing session

use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest accepted guess (and smallest possible target)
pub const MIN_GUESS: u32 = 1;

/// Largest accepted guess (and largest possible target)
pub const MAX_GUESS: u32 = 20;

/// Attempt budget for every new session
pub const MAX_ATTEMPTS: u32 = 5;

/// Where a session currently stands.
///
/// `InProgress` is the only state that accepts guesses; `Won` and `Lost`
/// are terminal until the next `new_game()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Message shown to the player after a valid guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// The guess was below the target
    Higher,
    /// The guess was above the target
    Lower,
    Won { target: u32 },
    Lost { target: u32 },
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Higher => write!(f, "🔼 The number is higher!"),
            Feedback::Lower => write!(f, "🔽 The number is lower!"),
            Feedback::Won { target } => {
                write!(f, "🎉 Congratulations! You guessed the number {}!", target)
            }
            Feedback::Lost { target } => write!(f, "😢 You lost! The number was {}.", target),
        }
    }
}

/// The engine-owned state of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) target: u32,
    pub(crate) attempts_remaining: u32,
    pub(crate) feedback: Option<Feedback>,
    pub(crate) status: GameStatus,
}

impl GameState {
    pub(crate) fn new(target: u32) -> Self {
        Self {
            target,
            attempts_remaining: MAX_ATTEMPTS,
            feedback: None,
            status: GameStatus::InProgress,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}

/// Render-ready snapshot handed to the presentation layer after every call.
///
/// The target is not part of the view; it only reaches the player through
/// the win/loss feedback text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateView {
    pub attempts_remaining: u32,
    pub feedback: String,
    pub is_over: bool,
    pub status: GameStatus,
}

impl From<&GameState> for GameStateView {
    fn from(state: &GameState) -> Self {
        Self {
            attempts_remaining: state.attempts_remaining,
            feedback: state.feedback.map(|f| f.to_string()).unwrap_or_default(),
            is_over: state.is_over(),
            status: state.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_in_progress_with_full_budget() {
        let state = GameState::new(12);
        assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(state.feedback(), None);
        assert!(!state.is_over());
    }

    #[test]
    fn terminal_statuses_are_over() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost.is_over());
    }

    #[test]
    fn feedback_text() {
        assert!(Feedback::Higher.to_string().contains("higher"));
        assert!(Feedback::Lower.to_string().contains("lower"));
        assert!(Feedback::Won { target: 13 }.to_string().contains("13"));
        assert!(Feedback::Lost { target: 4 }.to_string().contains('4'));
    }

    #[test]
    fn view_hides_target_and_renders_empty_feedback() {
        let view = GameStateView::from(&GameState::new(17));
        assert_eq!(view.feedback, "");
        assert!(!view.is_over);

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("target").is_none());
        assert_eq!(json["attempts_remaining"], 5);
        assert_eq!(json["status"], "InProgress");
    }
}
