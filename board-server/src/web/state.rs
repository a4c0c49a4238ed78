//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::board::BoardSnapshot;

/// Shared application state.
///
/// The web layer only ever reads the snapshot; the refresh driver owns the
/// writes.
#[derive(Clone)]
pub struct AppState {
    /// Latest successfully rendered board.
    pub snapshot: Arc<RwLock<BoardSnapshot>>,
}

impl AppState {
    /// Create a new app state around a shared snapshot.
    pub fn new(snapshot: Arc<RwLock<BoardSnapshot>>) -> Self {
        Self { snapshot }
    }
}
