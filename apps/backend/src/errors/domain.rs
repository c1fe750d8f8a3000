//! Domain-level error type used by the game engine.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    /// Could not mint a session id that is not already live
    SessionIdExhausted,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Vocabulary or startup configuration is unusable (startup-only, fatal)
    Config(String),
    /// No live session under the given id
    SessionNotFound(String),
    /// Guess has the wrong shape or is not an allowed word
    InvalidGuess(String),
    /// Session already holds the maximum number of guesses
    GuessBudgetExceeded { max_guesses: usize },
    /// Operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Config(d) => write!(f, "configuration error: {d}"),
            DomainError::SessionNotFound(id) => write!(f, "session not found: {id}"),
            DomainError::InvalidGuess(d) => write!(f, "invalid guess: {d}"),
            DomainError::GuessBudgetExceeded { max_guesses } => {
                write!(f, "guess budget of {max_guesses} exhausted")
            }
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }
    pub fn session_not_found(id: impl Into<String>) -> Self {
        Self::SessionNotFound(id.into())
    }
    pub fn invalid_guess(detail: impl Into<String>) -> Self {
        Self::InvalidGuess(detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}
