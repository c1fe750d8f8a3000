//! Error codes for the wordle backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the wordle backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Guess is not five letters or not in the allowed vocabulary
    InvalidGuess,
    /// Session already used its full guess budget
    NoMoreGuesses,
    /// Request body could not be read or parsed
    BadRequest,

    // Resource Not Found
    /// Game not found
    GameNotFound,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGuess => "INVALID_GUESS",
            Self::NoMoreGuesses => "NO_MORE_GUESSES",
            Self::BadRequest => "BAD_REQUEST",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 6] = [
        Self::InvalidGuess,
        Self::NoMoreGuesses,
        Self::BadRequest,
        Self::GameNotFound,
        Self::Internal,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
