use std::sync::Arc;

use crate::domain::{Vocabulary, VocabularyLimits};
use crate::error::AppError;
use crate::services::{EntropySource, GameEngine, OsEntropy};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    vocabulary: Option<Vocabulary>,
    entropy: Arc<dyn EntropySource>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            vocabulary: None,
            entropy: Arc::new(OsEntropy),
        }
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    pub fn with_entropy(mut self, entropy: impl EntropySource + 'static) -> Self {
        self.entropy = Arc::new(entropy);
        self
    }

    /// Without an explicit vocabulary the embedded word list is used.
    pub fn build(self) -> Result<AppState, AppError> {
        let vocabulary = match self.vocabulary {
            Some(vocabulary) => vocabulary,
            None => Vocabulary::embedded(VocabularyLimits::default())?,
        };
        let engine = GameEngine::new(Arc::new(vocabulary), self.entropy)?;
        Ok(AppState::new(engine))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
