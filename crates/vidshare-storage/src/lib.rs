//! vidshare storage library
//!
//! This crate provides the `Storage` abstraction over a key/value blob store and
//! its implementations: in-memory, local filesystem and S3-compatible buckets
//! (Cloudflare R2, AWS S3, MinIO).
//!
//! # Storage key format
//!
//! Uploaded videos are stored under `videos/{unix-ms}-{6 base36 chars}.{ext}`.
//! Keys must not contain `..` or a leading `/`. Key generation is centralized in
//! the `keys` module so every backend sees the same layout.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod memory;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::{generate_video_key, sanitize_extension, GeneratedKey};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use memory::MemoryStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{
    ObjectInfo, ObjectMetadata, Storage, StorageError, StorageResult, StoredObject,
};
pub use vidshare_core::StorageBackend;
