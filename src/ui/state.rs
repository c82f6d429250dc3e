//! Server state shared across request handlers.

use std::sync::Arc;

use crate::domain::ChatRepository;

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn ChatRepository>,
}

impl AppState {
    /// Create the shared state over a storage backend
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }
}
