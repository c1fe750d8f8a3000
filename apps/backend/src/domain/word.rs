//! Fixed-length lowercase word value type.

use std::fmt;
use std::str::FromStr;

use crate::errors::domain::DomainError;

/// Word length for every guess and answer
pub const WORD_LENGTH: usize = 5;

/// A five-letter ASCII lowercase word.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Normalize raw user input: lowercase it, then require exactly
    /// five ASCII letters.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let lowered = raw.to_lowercase();
        Self::from_lowercase(&lowered).ok_or_else(|| {
            DomainError::invalid_guess(format!("not a {WORD_LENGTH}-letter word: {raw:?}"))
        })
    }

    /// Accept only entries that are already lowercase ASCII letters of the
    /// right length. Used for vocabulary lists, where capitalised entries
    /// (proper nouns) are skipped instead of folded.
    pub fn from_lowercase(s: &str) -> Option<Self> {
        let bytes: [u8; WORD_LENGTH] = s.as_bytes().try_into().ok()?;
        bytes
            .iter()
            .all(u8::is_ascii_lowercase)
            .then_some(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
