//! Pluggable randomness for session ids and answer selection.

use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use super::store::SessionId;

/// Source of fresh session ids and uniform answer indices.
pub trait EntropySource: Send + Sync {
    fn next_session_id(&self) -> SessionId;

    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Production entropy: UUID v4 ids and the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_session_id(&self) -> SessionId {
        SessionId::from(Uuid::new_v4())
    }

    fn pick_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Deterministic entropy for tests and reproducible runs.
#[derive(Debug)]
pub struct SeededEntropy {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn next_session_id(&self) -> SessionId {
        let bytes: [u8; 16] = self.rng.lock().random();
        SessionId::from(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    fn pick_index(&self, len: usize) -> usize {
        self.rng.lock().random_range(0..len)
    }
}
