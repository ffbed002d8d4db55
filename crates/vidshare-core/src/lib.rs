//! vidshare core library
//!
//! Configuration, the server error taxonomy, constants and the wire models
//! shared by the API server and its client.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, StorageConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
// Storage, StorageError and StorageResult live in vidshare-storage
