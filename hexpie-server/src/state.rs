//! Server state management

use hexpie_core::GameEngine;
use std::sync::RwLock;

/// Server-wide shared state: one authoritative engine behind a lock.
pub struct ServerState {
    pub engine: RwLock<GameEngine>,
}

impl ServerState {
    pub fn new(board_size: usize) -> Self {
        Self {
            engine: RwLock::new(GameEngine::new(board_size)),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(hexpie_core::DEFAULT_SIZE)
    }
}
