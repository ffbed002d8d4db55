use crate::keys::is_safe_key;
use crate::traits::{
    join_url, ObjectInfo, ObjectMetadata, Storage, StorageError, StorageResult, StoredObject,
};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Suffix of the JSON sidecar holding an object's metadata
const META_SUFFIX: &str = ".meta.json";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Sidecar {
    content_type: String,
    metadata: HashMap<String, String>,
}

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
    name: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for file storage (e.g., "/var/lib/vidshare")
    /// * `base_url` - Base URL the files are served from (e.g., "http://localhost:8787/media")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        let name = base_path.display().to_string();

        Ok(LocalStorage {
            base_path,
            base_url,
            name,
        })
    }

    /// Convert storage key to filesystem path, rejecting traversal outside the root
    fn key_to_path(&self, storage_key: &str) -> StorageResult<PathBuf> {
        if !is_safe_key(storage_key) || storage_key.ends_with(META_SUFFIX) {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }

        let path = self.base_path.join(storage_key);
        if path.strip_prefix(&self.base_path).is_err() {
            return Err(StorageError::InvalidKey(
                "Storage key resolves outside storage directory".to_string(),
            ));
        }

        Ok(path)
    }

    fn sidecar_path(path: &Path) -> PathBuf {
        let mut os = path.as_os_str().to_owned();
        os.push(META_SUFFIX);
        PathBuf::from(os)
    }

    /// Ensure parent directory exists
    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Storage key for a file under the root, always `/`-separated
    fn path_to_key(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.base_path).ok()?;
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(parts.join("/"))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn put(&self, key: &str, data: Bytes, metadata: &ObjectMetadata) -> StorageResult<()> {
        let path = self.key_to_path(key)?;
        let size = data.len();

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        let sidecar = Sidecar {
            content_type: metadata.content_type.clone(),
            metadata: metadata
                .custom()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        };
        let sidecar_json = serde_json::to_vec(&sidecar)
            .map_err(|e| StorageError::UploadFailed(format!("Failed to encode metadata: {}", e)))?;
        fs::write(Self::sidecar_path(&path), sidecar_json)
            .await
            .map_err(|e| {
                StorageError::UploadFailed(format!("Failed to write metadata for {}: {}", key, e))
            })?;

        tracing::info!(
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local upload successful"
        );

        Ok(())
    }

    async fn get(&self, key: &str) -> StorageResult<StoredObject> {
        let path = self.key_to_path(key)?;
        let start = std::time::Instant::now();

        let data = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound(key.to_string())
            } else {
                StorageError::DownloadFailed(format!(
                    "Failed to read file {}: {}",
                    path.display(),
                    e
                ))
            }
        })?;

        let sidecar = match fs::read(Self::sidecar_path(&path)).await {
            Ok(raw) => serde_json::from_slice::<Sidecar>(&raw).ok(),
            Err(_) => None,
        };

        tracing::debug!(
            key = %key,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local download successful"
        );

        let (content_type, metadata) = match sidecar {
            Some(s) => (Some(s.content_type), s.metadata),
            None => (None, HashMap::new()),
        };

        Ok(StoredObject {
            data: Bytes::from(data),
            content_type,
            metadata,
        })
    }

    async fn list(&self, prefix: Option<&str>) -> StorageResult<Vec<ObjectInfo>> {
        let start = std::time::Instant::now();
        let mut entries = Vec::new();
        let mut pending = vec![self.base_path.clone()];

        while let Some(dir) = pending.pop() {
            let mut read_dir = fs::read_dir(&dir)
                .await
                .map_err(|e| StorageError::ListFailed(format!("{}: {}", dir.display(), e)))?;

            while let Some(entry) = read_dir
                .next_entry()
                .await
                .map_err(|e| StorageError::ListFailed(e.to_string()))?
            {
                let path = entry.path();
                let file_type = entry
                    .file_type()
                    .await
                    .map_err(|e| StorageError::ListFailed(e.to_string()))?;

                if file_type.is_dir() {
                    pending.push(path);
                    continue;
                }

                let Some(key) = self.path_to_key(&path) else {
                    continue;
                };
                if key.ends_with(META_SUFFIX) {
                    continue;
                }
                if prefix.is_some_and(|p| !key.starts_with(p)) {
                    continue;
                }

                let meta = entry
                    .metadata()
                    .await
                    .map_err(|e| StorageError::ListFailed(e.to_string()))?;
                let uploaded = meta
                    .modified()
                    .map(DateTime::<Utc>::from)
                    .unwrap_or_else(|_| Utc::now());

                entries.push(ObjectInfo {
                    key,
                    size: meta.len(),
                    uploaded,
                });
            }
        }

        entries.sort_by(|a, b| a.key.cmp(&b.key));

        tracing::debug!(
            count = entries.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local list successful"
        );

        Ok(entries)
    }

    fn public_url(&self, key: &str) -> String {
        join_url(&self.base_url, key)
    }

    fn bucket_name(&self) -> &str {
        &self.name
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
