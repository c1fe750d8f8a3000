//! Services: the game engine and the process-scoped state it owns.

pub mod entropy;
pub mod games;
pub mod store;

pub use entropy::{EntropySource, OsEntropy, SeededEntropy};
pub use games::{GameEngine, GameView};
pub use store::{SessionId, SessionStore};
