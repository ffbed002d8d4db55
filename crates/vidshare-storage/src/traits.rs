//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement,
//! together with the metadata written alongside each object.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("List failed: {0}")]
    ListFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Metadata key for the client-supplied filename
pub const META_ORIGINAL_NAME: &str = "originalName";
/// Metadata key for the upload time in unix milliseconds
pub const META_UPLOAD_TIME: &str = "uploadTime";
/// Metadata key for the size the client declared
pub const META_SIZE: &str = "size";

/// Metadata written with every uploaded object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMetadata {
    /// Stored as the object's HTTP content type
    pub content_type: String,
    pub original_name: String,
    pub upload_time_ms: i64,
    pub declared_size: u64,
}

impl ObjectMetadata {
    /// Custom metadata pairs, values as decimal strings
    pub fn custom(&self) -> Vec<(&'static str, String)> {
        vec![
            (META_ORIGINAL_NAME, self.original_name.clone()),
            (META_UPLOAD_TIME, self.upload_time_ms.to_string()),
            (META_SIZE, self.declared_size.to_string()),
        ]
    }
}

/// Listing entry for one stored object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
    pub key: String,
    pub size: u64,
    pub uploaded: DateTime<Utc>,
}

/// Object read back from a backend
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Bytes,
    pub content_type: Option<String>,
    pub metadata: HashMap<String, String>,
}

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem, memory) implement this trait so the
/// API handlers never depend on a concrete backend.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` under `key` with its content type and custom metadata.
    /// An existing object under the same key is replaced.
    async fn put(&self, key: &str, data: Bytes, metadata: &ObjectMetadata) -> StorageResult<()>;

    /// Read an object and its metadata
    async fn get(&self, key: &str) -> StorageResult<StoredObject>;

    /// Enumerate objects, optionally restricted to a key prefix.
    /// Order is the backend's native order (lexicographic by key for all bundled backends).
    async fn list(&self, prefix: Option<&str>) -> StorageResult<Vec<ObjectInfo>>;

    /// Publicly reachable URL for `key`
    fn public_url(&self, key: &str) -> String;

    /// Bucket or root name reported by connectivity checks
    fn bucket_name(&self) -> &str;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

/// Join a public base URL and a key with exactly one slash
pub(crate) fn join_url(base_url: &str, key: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        key.trim_start_matches('/')
    )
}
