//! Per-game state: the hidden answer and the append-only guess history.

use serde::Serialize;

use super::feedback::{score, Feedback};
use super::word::Word;
use crate::errors::domain::DomainError;

/// Guess budget per game
pub const MAX_GUESSES: usize = 6;

/// One scored guess. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of a successful guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub correct: bool,
    pub guesses_used: usize,
    pub max_guesses: usize,
}

#[derive(Debug, Clone)]
pub struct Session {
    answer: Word,
    history: Vec<GuessRecord>,
}

impl Session {
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            history: Vec::with_capacity(MAX_GUESSES),
        }
    }

    pub fn answer(&self) -> Word {
        self.answer
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    /// Score and record a guess. The history is left untouched on error.
    ///
    /// The caller is responsible for checking the guess against the
    /// vocabulary; this only enforces the budget.
    pub fn apply_guess(&mut self, guess: Word) -> Result<GuessOutcome, DomainError> {
        if self.history.len() >= MAX_GUESSES {
            return Err(DomainError::GuessBudgetExceeded {
                max_guesses: MAX_GUESSES,
            });
        }

        let feedback = score(&guess, &self.answer);
        self.history.push(GuessRecord { guess, feedback });

        Ok(GuessOutcome {
            feedback,
            correct: guess == self.answer,
            guesses_used: self.history.len(),
            max_guesses: MAX_GUESSES,
        })
    }

    /// A game is won as soon as any guess hit the answer, even if more
    /// guesses follow.
    pub fn status(&self) -> GameStatus {
        if self.history.iter().any(|r| r.guess == self.answer) {
            GameStatus::Won
        } else if self.history.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}
