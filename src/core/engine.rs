use tracing::{debug, info, trace};

use crate::core::error::ValidationError;
use crate::core::rng::{TargetSource, ThreadRngSource};
use crate::core::state::{
    Feedback, GameState, GameStateView, GameStatus, MAX_GUESS, MIN_GUESS,
};

/// Parse raw player input into a guess in `MIN_GUESS..=MAX_GUESS`.
///
/// Reads the leading integer the way a lenient number field does: leading
/// whitespace and an optional sign are skipped, then the longest run of
/// ASCII digits is taken and anything after it ignored, so `"7.5"` is 7
/// and `"3abc"` is 3. No digits at all is `NotANumber`. Digit runs too long
/// for an `i64` saturate and are reported as `OutOfRange`.
pub fn parse_guess(raw: &str) -> Result<u32, ValidationError> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return Err(ValidationError::NotANumber {
            input: raw.trim().to_string(),
        });
    }

    let magnitude: i64 = rest[..len].parse().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };

    if value < i64::from(MIN_GUESS) || value > i64::from(MAX_GUESS) {
        return Err(ValidationError::OutOfRange { value });
    }
    Ok(value as u32)
}

/// Sole owner of the game state and the only thing allowed to change it
pub struct GameEngine<S: TargetSource = ThreadRngSource> {
    source: S,
    state: GameState,
    session: u64,
}

impl Default for GameEngine<ThreadRngSource> {
    fn default() -> Self {
        Self::new(ThreadRngSource)
    }
}

impl<S: TargetSource> GameEngine<S> {
    /// Create an engine and start its first session
    pub fn new(mut source: S) -> Self {
        let target = source.next_target(MIN_GUESS..=MAX_GUESS);
        let engine = Self {
            source,
            state: GameState::new(target),
            session: 1,
        };
        info!(session = engine.session, "new game started");
        trace!(secret = target, "target drawn");
        engine
    }

    /// Throw away the current session and start a fresh one
    pub fn new_game(&mut self) -> GameStateView {
        let target = self.source.next_target(MIN_GUESS..=MAX_GUESS);
        self.state = GameState::new(target);
        self.session += 1;
        info!(session = self.session, "new game started");
        trace!(secret = target, "target drawn");
        self.view()
    }

    /// Evaluate one guess.
    ///
    /// Validation runs before anything else, so bad input is reported even
    /// after the game has ended. Valid guesses against a finished game
    /// return the unchanged view.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GameStateView, ValidationError> {
        let guess = parse_guess(raw).inspect_err(|e| {
            debug!(session = self.session, error = %e, "rejected guess");
        })?;

        if self.state.is_over() {
            debug!(session = self.session, guess, "guess ignored, game is over");
            return Ok(self.view());
        }

        let state = &mut self.state;
        if guess == state.target {
            state.feedback = Some(Feedback::Won { target: state.target });
            state.status = GameStatus::Won;
            info!(
                session = self.session,
                attempts_remaining = state.attempts_remaining,
                "player won"
            );
            return Ok(self.view());
        }

        state.attempts_remaining = state.attempts_remaining.saturating_sub(1);
        if state.attempts_remaining == 0 {
            state.feedback = Some(Feedback::Lost { target: state.target });
            state.status = GameStatus::Lost;
            info!(session = self.session, "player ran out of attempts");
        } else {
            let hint = if guess < state.target {
                Feedback::Higher
            } else {
                Feedback::Lower
            };
            state.feedback = Some(hint);
            debug!(
                session = self.session,
                guess,
                attempts_remaining = state.attempts_remaining,
                ?hint,
                "wrong guess"
            );
        }

        Ok(self.view())
    }

    pub fn view(&self) -> GameStateView {
        GameStateView::from(&self.state)
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of sessions started so far, the current one included
    pub fn session(&self) -> u64 {
        self.session
    }
}
