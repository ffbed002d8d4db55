use crate::traits::{join_url, ObjectInfo, ObjectMetadata, Storage, StorageError, StorageResult, StoredObject};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct MemoryObject {
    data: Bytes,
    metadata: ObjectMetadata,
    uploaded: DateTime<Utc>,
}

/// In-process storage backed by an ordered map.
///
/// Objects live as long as the process. Used for development and as the
/// backend of the API integration tests.
pub struct MemoryStorage {
    name: String,
    base_url: String,
    objects: RwLock<BTreeMap<String, MemoryObject>>,
}

impl MemoryStorage {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        MemoryStorage {
            name: name.into(),
            base_url: base_url.into(),
            objects: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of stored objects
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn put(&self, key: &str, data: Bytes, metadata: &ObjectMetadata) -> StorageResult<()> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey("Storage key is empty".to_string()));
        }

        let size = data.len();
        self.objects.write().await.insert(
            key.to_string(),
            MemoryObject {
                data,
                metadata: metadata.clone(),
                uploaded: Utc::now(),
            },
        );

        tracing::debug!(key = %key, size_bytes = size, "Memory put successful");
        Ok(())
    }

    async fn get(&self, key: &str) -> StorageResult<StoredObject> {
        let objects = self.objects.read().await;
        let object = objects
            .get(key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;

        Ok(StoredObject {
            data: object.data.clone(),
            content_type: Some(object.metadata.content_type.clone()),
            metadata: object
                .metadata
                .custom()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<HashMap<_, _>>(),
        })
    }

    async fn list(&self, prefix: Option<&str>) -> StorageResult<Vec<ObjectInfo>> {
        let objects = self.objects.read().await;
        let entries: Vec<ObjectInfo> = objects
            .iter()
            .filter(|(key, _)| prefix.is_none_or(|p| key.starts_with(p)))
            .map(|(key, object)| ObjectInfo {
                key: key.clone(),
                size: object.data.len() as u64,
                uploaded: object.uploaded,
            })
            .collect();

        tracing::debug!(count = entries.len(), "Memory list successful");
        Ok(entries)
    }

    fn public_url(&self, key: &str) -> String {
        join_url(&self.base_url, key)
    }

    fn bucket_name(&self) -> &str {
        &self.name
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}
