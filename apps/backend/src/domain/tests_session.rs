use crate::domain::{GameStatus, LetterMark, Session, Word, MAX_GUESSES};
use crate::errors::domain::DomainError;

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

#[test]
fn test_apply_guess_records_history() {
    let mut session = Session::new(w("crane"));
    let outcome = session.apply_guess(w("trace")).unwrap();

    assert!(!outcome.correct);
    assert_eq!(outcome.guesses_used, 1);
    assert_eq!(outcome.max_guesses, MAX_GUESSES);
    assert_eq!(outcome.feedback.marks()[0], LetterMark::Gray);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].guess, w("trace"));
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_seventh_guess_exceeds_budget_without_mutation() {
    let mut session = Session::new(w("crane"));
    for n in 1..=MAX_GUESSES {
        let outcome = session.apply_guess(w("slate")).unwrap();
        assert_eq!(outcome.guesses_used, n);
    }

    let err = session.apply_guess(w("crane")).unwrap_err();
    assert_eq!(
        err,
        DomainError::GuessBudgetExceeded {
            max_guesses: MAX_GUESSES
        }
    );
    assert_eq!(session.guesses_used(), MAX_GUESSES);
    assert_eq!(session.status(), GameStatus::Lost);
}

#[test]
fn test_correct_guess_wins() {
    let mut session = Session::new(w("crane"));
    session.apply_guess(w("trace")).unwrap();
    let outcome = session.apply_guess(w("crane")).unwrap();

    assert!(outcome.correct);
    assert!(outcome.feedback.is_solved());
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn test_won_game_keeps_accepting_guesses_until_budget() {
    let mut session = Session::new(w("crane"));
    session.apply_guess(w("crane")).unwrap();
    let outcome = session.apply_guess(w("trace")).unwrap();

    assert!(!outcome.correct);
    assert_eq!(outcome.guesses_used, 2);
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn test_win_on_last_guess_is_not_a_loss() {
    let mut session = Session::new(w("crane"));
    for _ in 1..MAX_GUESSES {
        session.apply_guess(w("slate")).unwrap();
    }
    session.apply_guess(w("crane")).unwrap();
    assert_eq!(session.status(), GameStatus::Won);
}
