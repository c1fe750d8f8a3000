//! Guess and answer vocabularies.
//!
//! Both sets come from one frequency-ranked word list: the allowed guesses
//! are the top `guess_limit` entries and the possible answers the top
//! `answer_limit`. The engine only sees the resulting sets.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use super::word::{Word, WORD_LENGTH};
use crate::errors::domain::DomainError;

/// Default number of ranked words accepted as guesses
pub const DEFAULT_GUESS_LIMIT: usize = 10_000;
/// Default number of ranked words eligible as answers
pub const DEFAULT_ANSWER_LIMIT: usize = 2_000;

const EMBEDDED_WORDS: &str = include_str!("../../data/words.txt");

/// How many ranked entries feed each set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyLimits {
    pub guess_limit: usize,
    pub answer_limit: usize,
}

impl Default for VocabularyLimits {
    fn default() -> Self {
        Self {
            guess_limit: DEFAULT_GUESS_LIMIT,
            answer_limit: DEFAULT_ANSWER_LIMIT,
        }
    }
}

/// Immutable guess/answer sets, fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    allowed: HashSet<Word>,
    answers: Vec<Word>,
}

impl Vocabulary {
    /// Build from explicit sets. Both must be non-empty. Answers that are
    /// not allowed guesses are kept but reported, since such a game can
    /// never be won.
    pub fn new(
        allowed: impl IntoIterator<Item = Word>,
        answers: impl IntoIterator<Item = Word>,
    ) -> Result<Self, DomainError> {
        let allowed: HashSet<Word> = allowed.into_iter().collect();

        let mut seen = HashSet::new();
        let answers: Vec<Word> = answers.into_iter().filter(|w| seen.insert(*w)).collect();

        if allowed.is_empty() {
            return Err(DomainError::config("allowed guess vocabulary is empty"));
        }
        if answers.is_empty() {
            return Err(DomainError::config("possible answer vocabulary is empty"));
        }

        let unguessable = answers.iter().filter(|w| !allowed.contains(w)).count();
        if unguessable > 0 {
            warn!(
                unguessable,
                "some possible answers are not in the allowed guess set"
            );
        }

        Ok(Self { allowed, answers })
    }

    /// Build both sets from a frequency-ranked list (most frequent first).
    /// Duplicates keep their first rank; entries that are not lowercase
    /// five-letter words are skipped.
    pub fn from_ranked<'a>(
        words: impl IntoIterator<Item = &'a str>,
        limits: VocabularyLimits,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        let mut skipped = 0usize;
        let ranked: Vec<Word> = words
            .into_iter()
            .filter_map(|raw| {
                let word = Word::from_lowercase(raw);
                if word.is_none() {
                    skipped += 1;
                }
                word
            })
            .filter(|w| seen.insert(*w))
            .collect();

        if skipped > 0 {
            debug!(skipped, "skipped entries that are not {WORD_LENGTH}-letter lowercase words");
        }

        let allowed = ranked.iter().copied().take(limits.guess_limit);
        let answers = ranked.iter().copied().take(limits.answer_limit);
        Self::new(allowed, answers)
    }

    /// Parse a ranked list: one word per line, blank lines and `#` comments
    /// ignored, surrounding whitespace trimmed.
    pub fn parse_ranked_list(text: &str, limits: VocabularyLimits) -> Result<Self, DomainError> {
        Self::from_ranked(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
            limits,
        )
    }

    /// Load a ranked list from disk
    pub fn load(path: &Path, limits: VocabularyLimits) -> Result<Self, DomainError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            DomainError::config(format!("failed to read word list {}: {e}", path.display()))
        })?;
        let vocab = Self::parse_ranked_list(&text, limits)?;
        info!(
            path = %path.display(),
            allowed = vocab.allowed_len(),
            answers = vocab.answers_len(),
            "loaded vocabulary"
        );
        Ok(vocab)
    }

    /// The ranked list compiled into the binary
    pub fn embedded(limits: VocabularyLimits) -> Result<Self, DomainError> {
        Self::parse_ranked_list(EMBEDDED_WORDS, limits)
    }

    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }

    pub fn answer_at(&self, index: usize) -> Option<Word> {
        self.answers.get(index).copied()
    }

    pub fn answers_len(&self) -> usize {
        self.answers.len()
    }

    pub fn allowed_len(&self) -> usize {
        self.allowed.len()
    }
}
