#[cfg(feature = "storage-local")]
use crate::LocalStorage;
#[cfg(feature = "storage-s3")]
use crate::S3Storage;
use crate::{MemoryStorage, Storage, StorageBackend, StorageError, StorageResult};
use std::sync::Arc;
use vidshare_core::Config;

/// Create the configured storage backend.
///
/// Returns `Ok(None)` when no backend is selected; the server then runs with
/// uploads and listings answering "Storage bucket not configured".
pub async fn create_storage(config: &Config) -> StorageResult<Option<Arc<dyn Storage>>> {
    let Some(backend) = config.storage_backend() else {
        return Ok(None);
    };

    let storage_config = &config.storage;
    let public_base_url = storage_config.public_base_url().ok_or_else(|| {
        StorageError::ConfigError(format!("No public URL base for {} storage", backend))
    })?;

    let storage: Arc<dyn Storage> = match backend {
        #[cfg(feature = "storage-s3")]
        StorageBackend::S3 => {
            let bucket = storage_config
                .s3_bucket
                .clone()
                .ok_or_else(|| StorageError::ConfigError("S3_BUCKET not configured".to_string()))?;

            Arc::new(S3Storage::new(
                bucket,
                storage_config.s3_region.clone(),
                storage_config.resolved_s3_endpoint(),
                public_base_url,
            )?)
        }

        #[cfg(not(feature = "storage-s3"))]
        StorageBackend::S3 => {
            return Err(StorageError::ConfigError(
                "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
            ))
        }

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let base_path = storage_config.local_storage_path.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;

            Arc::new(LocalStorage::new(base_path, public_base_url).await?)
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => {
            return Err(StorageError::ConfigError(
                "Local storage backend not available (storage-local feature not enabled)"
                    .to_string(),
            ))
        }

        StorageBackend::Memory => Arc::new(MemoryStorage::new("memory", public_base_url)),
    };

    tracing::info!(backend = %backend, bucket = %storage.bucket_name(), "Storage backend ready");
    Ok(Some(storage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_backend_means_no_storage() {
        let config = Config::default();
        assert!(create_storage(&config).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_backend() {
        let mut config = Config::default();
        config.storage.backend = Some(StorageBackend::Memory);
        config.storage.account_id = Some("acct".to_string());

        let storage = create_storage(&config).await.unwrap().unwrap();
        assert_eq!(storage.backend_type(), StorageBackend::Memory);
        assert_eq!(
            storage.public_url("videos/x.mp4"),
            "https://pub-acct.r2.dev/videos/x.mp4"
        );
    }

    #[cfg(feature = "storage-local")]
    #[tokio::test]
    async fn test_local_backend() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.storage.backend = Some(StorageBackend::Local);
        config.storage.local_storage_path = Some(dir.path().display().to_string());
        config.storage.local_storage_base_url = Some("http://localhost:8787/media".to_string());

        let storage = create_storage(&config).await.unwrap().unwrap();
        assert_eq!(storage.backend_type(), StorageBackend::Local);
    }
}
