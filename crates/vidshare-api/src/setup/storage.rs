//! Storage setup and initialization

use anyhow::Result;
use std::sync::Arc;
use vidshare_core::Config;
use vidshare_storage::{create_storage, Storage};

/// Bind the configured storage backend once at startup.
pub async fn setup_storage(config: &Config) -> Result<Option<Arc<dyn Storage>>> {
    tracing::info!("Initializing storage abstraction...");
    let storage = create_storage(config).await?;

    match &storage {
        Some(storage) => tracing::info!(
            backend = %storage.backend_type(),
            bucket = %storage.bucket_name(),
            "Storage abstraction initialized successfully"
        ),
        None => tracing::warn!(
            "STORAGE_BACKEND not set: uploads and listings will answer 'Storage bucket not configured'"
        ),
    }

    Ok(storage)
}
