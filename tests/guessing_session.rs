use guessterm::core::{
    FixedTarget, GameEngine, SeededSource, ThreadRngSource, ValidationError, MAX_ATTEMPTS,
    MAX_GUESS, MIN_GUESS,
};
use guessterm::{GameStateView, GameStatus};

#[test]
fn new_game_always_starts_fresh() {
    let mut engine = GameEngine::new(ThreadRngSource);
    for _ in 0..200 {
        let view = engine.new_game();
        assert!((MIN_GUESS..=MAX_GUESS).contains(&engine.state().target()));
        assert_eq!(view.attempts_remaining, 5);
        assert!(!view.is_over);
        assert_eq!(view.feedback, "");
    }
}

#[test]
fn scenario_a_and_b_hint_then_win() {
    let mut engine = GameEngine::new(FixedTarget(7));

    let view = engine.submit_guess("3").unwrap();
    assert!(view.feedback.contains("higher"));
    assert_eq!(view.attempts_remaining, 4);
    assert!(!view.is_over);

    let view = engine.submit_guess("7").unwrap();
    assert!(view.feedback.contains('7'));
    assert!(view.is_over);
    assert_eq!(view.attempts_remaining, 4);
    assert_eq!(view.status, GameStatus::Won);
}

#[test]
fn scenario_c_five_misses_lose() {
    let mut engine = GameEngine::new(FixedTarget(10));
    let mut view = engine.view();
    for (i, g) in ["1", "2", "3", "4", "5"].iter().enumerate() {
        assert!(!view.is_over, "game ended early after {} guesses", i);
        view = engine.submit_guess(g).unwrap();
    }
    assert_eq!(view.attempts_remaining, 0);
    assert!(view.is_over);
    assert_eq!(view.status, GameStatus::Lost);
    assert!(view.feedback.contains("10"));
}

#[test]
fn scenario_d_and_e_invalid_input_changes_nothing() {
    let mut engine = GameEngine::new(FixedTarget(7));
    engine.submit_guess("12").unwrap();
    let before = engine.view();

    assert_eq!(
        engine.submit_guess("25"),
        Err(ValidationError::OutOfRange { value: 25 })
    );
    assert_eq!(engine.view(), before);

    assert!(matches!(
        engine.submit_guess("abc"),
        Err(ValidationError::NotANumber { .. })
    ));
    assert_eq!(engine.view(), before);

    for raw in ["0", "21", "-1", "", "seven", "x7", "21.5"] {
        assert!(engine.submit_guess(raw).is_err(), "{:?} accepted", raw);
        assert_eq!(engine.view(), before);
    }
}

#[test]
fn guesses_after_win_are_ignored() {
    let mut engine = GameEngine::new(FixedTarget(2));
    let won = engine.submit_guess("2").unwrap();
    for g in ["1", "3", "2", "20"] {
        assert_eq!(engine.submit_guess(g).unwrap(), won);
    }
}

#[test]
fn attempts_never_increase_within_a_session() {
    let mut engine = GameEngine::new(SeededSource::new(2024));
    let inputs = ["10", "x", "5", "15", "99", "1", "20", "3", "8", "12"];

    let mut last = engine.view().attempts_remaining;
    for raw in inputs {
        let view: GameStateView = engine.submit_guess(raw).unwrap_or_else(|_| engine.view());
        assert!(view.attempts_remaining <= last);
        last = view.attempts_remaining;
    }

    assert_eq!(engine.new_game().attempts_remaining, MAX_ATTEMPTS);
}

#[test]
fn every_target_can_be_found_by_bisection() {
    for target in MIN_GUESS..=MAX_GUESS {
        let mut engine = GameEngine::new(FixedTarget(target));
        let (mut lo, mut hi) = (MIN_GUESS, MAX_GUESS);
        loop {
            let guess = (lo + hi) / 2;
            let view = engine.submit_guess(&guess.to_string()).unwrap();
            match view.status {
                GameStatus::Won => break,
                GameStatus::Lost => panic!("bisection lost on target {}", target),
                GameStatus::InProgress if view.feedback.contains("higher") => lo = guess + 1,
                GameStatus::InProgress => hi = guess - 1,
            }
        }
        assert!(engine.state().feedback().is_some());
    }
}

#[test]
fn leading_integer_is_the_guess() {
    let mut engine = GameEngine::new(FixedTarget(7));
    let view = engine.submit_guess("3abc").unwrap();
    assert!(view.feedback.contains("higher"));
    assert_eq!(view.attempts_remaining, 4);

    let view = engine.submit_guess("7.5").unwrap();
    assert!(view.is_over);
    assert_eq!(view.status, GameStatus::Won);
}

#[test]
fn huge_numbers_are_out_of_range() {
    let mut engine = GameEngine::new(FixedTarget(7));
    assert!(matches!(
        engine.submit_guess("99999999999999999999"),
        Err(ValidationError::OutOfRange { .. })
    ));
    assert_eq!(engine.view().attempts_remaining, MAX_ATTEMPTS);
}
