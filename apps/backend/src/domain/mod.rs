//! Domain layer: pure game logic types and helpers.

pub mod feedback;
pub mod session;
pub mod vocabulary;
pub mod word;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_feedback;
#[cfg(test)]
mod tests_props_feedback;
#[cfg(test)]
mod tests_session;

// Re-exports for ergonomics
pub use feedback::{score, Feedback, LetterMark};
pub use session::{GameStatus, GuessOutcome, GuessRecord, Session, MAX_GUESSES};
pub use vocabulary::{Vocabulary, VocabularyLimits};
pub use word::{Word, WORD_LENGTH};
