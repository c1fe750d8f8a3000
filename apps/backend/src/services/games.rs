//! Game engine: session lifecycle on top of the session store.

use std::sync::Arc;

use tracing::{debug, info};

use super::entropy::EntropySource;
use super::store::{SessionId, SessionStore};
use crate::domain::{
    GameStatus, GuessOutcome, GuessRecord, Session, Vocabulary, Word, MAX_GUESSES,
};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Attempts at minting an unused session id before giving up
const MAX_ID_ATTEMPTS: usize = 8;

/// Read-only snapshot of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub id: SessionId,
    pub history: Vec<GuessRecord>,
    pub guesses_used: usize,
    pub max_guesses: usize,
    pub status: GameStatus,
    /// Only revealed once the game is no longer in progress
    pub answer: Option<Word>,
}

pub struct GameEngine {
    vocabulary: Arc<Vocabulary>,
    store: SessionStore,
    entropy: Arc<dyn EntropySource>,
}

impl GameEngine {
    pub fn new(
        vocabulary: Arc<Vocabulary>,
        entropy: Arc<dyn EntropySource>,
    ) -> Result<Self, DomainError> {
        if vocabulary.answers_len() == 0 {
            return Err(DomainError::config("possible answer vocabulary is empty"));
        }
        Ok(Self {
            vocabulary,
            store: SessionStore::new(),
            entropy,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Start a game with an answer drawn uniformly from the answer set.
    pub fn start_game(&self) -> Result<SessionId, DomainError> {
        let index = self.entropy.pick_index(self.vocabulary.answers_len());
        let answer = self
            .vocabulary
            .answer_at(index)
            .ok_or_else(|| DomainError::config(format!("answer index {index} out of range")))?;
        self.start_game_with_answer(answer)
    }

    /// Start a game with a fixed answer. Seeding seam for tests and tools.
    pub fn start_game_with_answer(&self, answer: Word) -> Result<SessionId, DomainError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.entropy.next_session_id();
            if self.store.try_insert(id, Session::new(answer)) {
                info!(game_id = %id, sessions = self.store.len(), "game started");
                debug!(game_id = %id, answer = %answer, "answer chosen");
                return Ok(id);
            }
            debug!(game_id = %id, "session id collision, retrying");
        }
        Err(DomainError::infra(
            InfraErrorKind::SessionIdExhausted,
            format!("no unused session id after {MAX_ID_ATTEMPTS} attempts"),
        ))
    }

    /// Validate, score, and record a guess.
    ///
    /// Checks run in order: unknown session, malformed or unknown word,
    /// exhausted budget. Nothing is recorded on error.
    pub fn submit_guess(
        &self,
        id: &SessionId,
        raw_guess: &str,
    ) -> Result<GuessOutcome, DomainError> {
        let handle = self
            .store
            .get(id)
            .ok_or_else(|| DomainError::session_not_found(id.to_string()))?;

        let guess = Word::parse(raw_guess)?;
        if !self.vocabulary.is_allowed(&guess) {
            debug!(game_id = %id, guess = %guess, "guess not in vocabulary");
            return Err(DomainError::invalid_guess(format!(
                "{guess} is not an allowed word"
            )));
        }

        let outcome = handle.lock().apply_guess(guess).inspect_err(|_| {
            debug!(game_id = %id, "guess rejected, budget spent");
        })?;

        debug!(
            game_id = %id,
            guess = %guess,
            feedback = %outcome.feedback,
            guesses = outcome.guesses_used,
            correct = outcome.correct,
            "guess scored"
        );
        Ok(outcome)
    }

    pub fn game_view(&self, id: &SessionId) -> Result<GameView, DomainError> {
        let handle = self
            .store
            .get(id)
            .ok_or_else(|| DomainError::session_not_found(id.to_string()))?;
        let session = handle.lock();
        let status = session.status();

        Ok(GameView {
            id: *id,
            history: session.history().to_vec(),
            guesses_used: session.guesses_used(),
            max_guesses: MAX_GUESSES,
            status,
            answer: (status != GameStatus::InProgress).then(|| session.answer()),
        })
    }

    pub fn session_count(&self) -> usize {
        self.store.len()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("allowed", &self.vocabulary.allowed_len())
            .field("answers", &self.vocabulary.answers_len())
            .field("sessions", &self.store.len())
            .finish()
    }
}
