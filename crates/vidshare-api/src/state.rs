//! Application state shared by all handlers.

use std::sync::Arc;
use vidshare_core::{AppError, Config};
use vidshare_storage::Storage;

pub struct AppState {
    pub config: Config,
    /// Bound once at startup; `None` when no backend is configured
    pub storage: Option<Arc<dyn Storage>>,
}

impl AppState {
    pub fn new(config: Config, storage: Option<Arc<dyn Storage>>) -> Arc<Self> {
        Arc::new(AppState { config, storage })
    }

    /// The bound storage backend, or `StorageNotConfigured`
    pub fn storage(&self) -> Result<&Arc<dyn Storage>, AppError> {
        self.storage.as_ref().ok_or(AppError::StorageNotConfigured)
    }

    pub fn storage_configured(&self) -> bool {
        self.storage.is_some()
    }
}
