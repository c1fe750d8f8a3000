use std::sync::Arc;

use crate::services::GameEngine;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Game engine owning the session store
    pub engine: Arc<GameEngine>,
}

impl AppState {
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }
}
