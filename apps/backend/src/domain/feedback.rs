//! Feedback calculation for guesses.
//!
//! Computes the per-position green/yellow/gray marks for a guess against
//! the answer, with duplicate letters capped by their count in the answer.

use std::fmt;

use serde::Serialize;

use super::word::{Word, WORD_LENGTH};

/// Scoring result for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterMark {
    /// Correct letter in correct position
    Green,
    /// Letter appears elsewhere in the answer
    Yellow,
    /// Letter absent, or all its occurrences already accounted for
    Gray,
}

impl LetterMark {
    pub fn to_char(self) -> char {
        match self {
            LetterMark::Green => '🟩',
            LetterMark::Yellow => '🟨',
            LetterMark::Gray => '⬛',
        }
    }
}

/// The ordered marks for one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Feedback([LetterMark; WORD_LENGTH]);

impl Feedback {
    pub fn new(marks: [LetterMark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    pub fn marks(&self) -> &[LetterMark; WORD_LENGTH] {
        &self.0
    }

    /// All positions green
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|m| *m == LetterMark::Green)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.0 {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}

/// Score `guess` against `answer`.
///
/// Green pass first, consuming matched answer positions. Then each
/// non-green guess position, left to right, takes the first unconsumed
/// answer position holding the same letter and turns yellow.
pub fn score(guess: &Word, answer: &Word) -> Feedback {
    let guess = guess.as_bytes();
    let answer = answer.as_bytes();

    let mut marks = [LetterMark::Gray; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    for i in 0..WORD_LENGTH {
        if guess[i] == answer[i] {
            marks[i] = LetterMark::Green;
            consumed[i] = true;
        }
    }

    for i in 0..WORD_LENGTH {
        if marks[i] == LetterMark::Green {
            continue;
        }
        if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && answer[j] == guess[i]) {
            marks[i] = LetterMark::Yellow;
            consumed[j] = true;
        }
    }

    Feedback(marks)
}
