use std::sync::Arc;

use uuid::Uuid;
use wordle_backend::domain::{GameStatus, LetterMark, MAX_GUESSES};
use wordle_backend::errors::domain::InfraErrorKind;
use wordle_backend::services::{EntropySource, GameEngine, SeededEntropy, SessionId};
use wordle_backend::test_support::fixtures::{fixture_vocabulary, vocabulary_with_answer, word};
use wordle_backend::DomainError;

fn engine_with_answer(answer: &str) -> GameEngine {
    GameEngine::new(
        Arc::new(vocabulary_with_answer(answer)),
        Arc::new(SeededEntropy::new(42)),
    )
    .expect("engine")
}

/// Hands out the same id forever
struct StuckEntropy(SessionId);

impl EntropySource for StuckEntropy {
    fn next_session_id(&self) -> SessionId {
        self.0
    }

    fn pick_index(&self, _len: usize) -> usize {
        0
    }
}

#[test]
fn test_sessions_are_independent() {
    let engine = engine_with_answer("crane");
    let a = engine.start_game().unwrap();
    let b = engine.start_game().unwrap();
    assert_ne!(a, b);

    engine.submit_guess(&a, "slate").unwrap();
    engine.submit_guess(&a, "trace").unwrap();

    assert_eq!(engine.game_view(&a).unwrap().guesses_used, 2);
    assert_eq!(engine.game_view(&b).unwrap().guesses_used, 0);
    assert_eq!(engine.session_count(), 2);
}

#[test]
fn test_guesses_used_counts_every_accepted_guess() {
    let engine = engine_with_answer("crane");
    let id = engine.start_game().unwrap();

    for n in 1..=MAX_GUESSES {
        let outcome = engine.submit_guess(&id, "slate").unwrap();
        assert_eq!(outcome.guesses_used, n);
        assert_eq!(outcome.max_guesses, MAX_GUESSES);
        assert!(!outcome.correct);
    }

    let err = engine.submit_guess(&id, "crane").unwrap_err();
    assert!(matches!(
        err,
        DomainError::GuessBudgetExceeded { max_guesses: 6 }
    ));
    assert_eq!(engine.game_view(&id).unwrap().guesses_used, MAX_GUESSES);
}

#[test]
fn test_winning_guess_reports_correct() {
    let engine = engine_with_answer("crane");
    let id = engine.start_game().unwrap();

    let outcome = engine.submit_guess(&id, "Crane").unwrap();
    assert!(outcome.correct);
    assert!(outcome
        .feedback
        .marks()
        .iter()
        .all(|m| *m == LetterMark::Green));

    let view = engine.game_view(&id).unwrap();
    assert_eq!(view.status, GameStatus::Won);
    assert_eq!(view.answer, Some(word("crane")));
}

#[test]
fn test_play_continues_after_win_until_budget() {
    let engine = engine_with_answer("crane");
    let id = engine.start_game().unwrap();

    engine.submit_guess(&id, "crane").unwrap();
    let outcome = engine.submit_guess(&id, "slate").unwrap();
    assert_eq!(outcome.guesses_used, 2);
    assert_eq!(engine.game_view(&id).unwrap().status, GameStatus::Won);
}

#[test]
fn test_rejection_order() {
    let engine = engine_with_answer("crane");
    let missing = SessionId::from(Uuid::new_v4());

    // Unknown session wins over a bad word
    let err = engine.submit_guess(&missing, "zzzzz").unwrap_err();
    assert!(matches!(err, DomainError::SessionNotFound(_)));

    let id = engine.start_game().unwrap();
    for _ in 0..MAX_GUESSES {
        engine.submit_guess(&id, "slate").unwrap();
    }

    // Bad word wins over an exhausted budget
    let err = engine.submit_guess(&id, "zzzzz").unwrap_err();
    assert!(matches!(err, DomainError::InvalidGuess(_)));
    let err = engine.submit_guess(&id, "slat").unwrap_err();
    assert!(matches!(err, DomainError::InvalidGuess(_)));
}

#[test]
fn test_rejected_guess_is_not_recorded() {
    let engine = engine_with_answer("crane");
    let id = engine.start_game().unwrap();

    assert!(engine.submit_guess(&id, "zzzzz").is_err());
    assert!(engine.submit_guess(&id, "cr4ne").is_err());

    let view = engine.game_view(&id).unwrap();
    assert!(view.history.is_empty());
    assert_eq!(view.status, GameStatus::InProgress);
    assert_eq!(view.answer, None);
}

#[test]
fn test_seeded_engines_pick_the_same_answers() {
    let play = |seed: u64| {
        let engine = GameEngine::new(
            Arc::new(fixture_vocabulary()),
            Arc::new(SeededEntropy::new(seed)),
        )
        .unwrap();
        (0..8)
            .map(|_| {
                let id = engine.start_game().unwrap();
                let first = engine.submit_guess(&id, "crane").unwrap().feedback;
                (id, first)
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(play(7), play(7));
}

#[test]
fn test_id_collisions_give_up() {
    let stuck = SessionId::from(Uuid::new_v4());
    let engine = GameEngine::new(
        Arc::new(vocabulary_with_answer("crane")),
        Arc::new(StuckEntropy(stuck)),
    )
    .unwrap();

    assert_eq!(engine.start_game().unwrap(), stuck);

    let err = engine.start_game().unwrap_err();
    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::SessionIdExhausted, _)
    ));
    assert_eq!(engine.session_count(), 1);
}
