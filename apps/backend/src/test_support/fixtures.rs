//! Small fixed vocabularies for tests.

use crate::domain::{Vocabulary, VocabularyLimits, Word};
use crate::services::SeededEntropy;
use crate::state::app_state::AppState;

/// Words every fixture vocabulary accepts as guesses
pub const FIXTURE_WORDS: &[&str] = &[
    "crane", "trace", "slate", "abbey", "creep", "speed", "geese", "those", "sores", "about",
];

pub fn word(s: &str) -> Word {
    Word::parse(s).expect("fixture word")
}

/// All fixture words are both guesses and answers
pub fn fixture_vocabulary() -> Vocabulary {
    Vocabulary::from_ranked(FIXTURE_WORDS.iter().copied(), VocabularyLimits::default())
        .expect("fixture vocabulary")
}

/// Fixture guesses with a single possible answer
pub fn vocabulary_with_answer(answer: &str) -> Vocabulary {
    Vocabulary::new(
        FIXTURE_WORDS.iter().map(|w| word(w)).chain([word(answer)]),
        [word(answer)],
    )
    .expect("fixture vocabulary")
}

/// Deterministic state over the fixture vocabulary
pub fn fixture_state(seed: u64) -> AppState {
    crate::infra::state::build_state()
        .with_vocabulary(fixture_vocabulary())
        .with_entropy(SeededEntropy::new(seed))
        .build()
        .expect("fixture state")
}

/// Deterministic state whose every game has `answer`
pub fn state_with_answer(answer: &str) -> AppState {
    crate::infra::state::build_state()
        .with_vocabulary(vocabulary_with_answer(answer))
        .with_entropy(SeededEntropy::new(0))
        .build()
        .expect("fixture state")
}
