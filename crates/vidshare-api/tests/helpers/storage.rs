use async_trait::async_trait;
use bytes::Bytes;
use vidshare_storage::{
    ObjectInfo, ObjectMetadata, Storage, StorageBackend, StorageError, StorageResult,
    StoredObject,
};

/// Backend whose every operation fails, for the 500 paths.
pub struct FailingStorage;

#[async_trait]
impl Storage for FailingStorage {
    async fn put(&self, _key: &str, _data: Bytes, _metadata: &ObjectMetadata) -> StorageResult<()> {
        Err(StorageError::UploadFailed("bucket unavailable".to_string()))
    }

    async fn get(&self, key: &str) -> StorageResult<StoredObject> {
        Err(StorageError::NotFound(key.to_string()))
    }

    async fn list(&self, _prefix: Option<&str>) -> StorageResult<Vec<ObjectInfo>> {
        Err(StorageError::ListFailed("bucket unavailable".to_string()))
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://pub-failing.r2.dev/{}", key)
    }

    fn bucket_name(&self) -> &str {
        "failing"
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}
