//! Centralized application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::domain::vocabulary::{DEFAULT_ANSWER_LIMIT, DEFAULT_GUESS_LIMIT};
use crate::domain::{Vocabulary, VocabularyLimits};
use crate::error::AppError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CORS_ORIGIN: &str = "https://dar.southcentralus.cloudapp.azure.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Browser origins allowed by CORS
    pub cors_origins: Vec<String>,

    // Vocabulary configuration
    pub words_file: Option<PathBuf>,
    pub limits: VocabularyLimits,
}

impl AppConfig {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!(
                    "BACKEND_PORT must be a valid port number, got '{raw}'"
                ))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
        );

        let words_file = env::var("WORDLE_WORDS_FILE")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let limits = VocabularyLimits {
            guess_limit: positive_from_env("WORDLE_GUESS_LIMIT", DEFAULT_GUESS_LIMIT)?,
            answer_limit: positive_from_env("WORDLE_ANSWER_LIMIT", DEFAULT_ANSWER_LIMIT)?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            words_file,
            limits,
        })
    }

    /// Load the configured word list, or the embedded one
    pub fn load_vocabulary(&self) -> Result<Vocabulary, AppError> {
        let vocabulary = match &self.words_file {
            Some(path) => Vocabulary::load(path, self.limits)?,
            None => Vocabulary::embedded(self.limits)?,
        };
        Ok(vocabulary)
    }
}

/// Split a comma-separated origin list, dropping blanks and `null`.
/// Only http(s) origins survive.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}

fn positive_from_env(name: &str, default: usize) -> Result<usize, AppError> {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(AppError::config(format!(
                "{name} must be a positive integer, got '{raw}'"
            ))),
        },
        Err(_) => Ok(default),
    }
}
