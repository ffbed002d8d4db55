//! Error types module
//!
//! This module provides the core error taxonomy used throughout vidshare.
//! Every failure the API can report is an `AppError` variant; the variant decides
//! its own HTTP status, machine-readable code, client message and log level
//! through the `ErrorMetadata` trait so handlers never build error bodies by hand.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for misconfiguration the operator should see
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_WRITE_FAILED")
    fn error_code(&self) -> &'static str;

    /// Client-facing message, used as the `error` field of the envelope
    fn client_message(&self) -> String;

    /// Optional extra context, used as the `details` field of the envelope
    fn details(&self) -> Option<String>;

    /// Whether details should be hidden in production
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Storage bucket not configured")]
    StorageNotConfigured,

    #[error("Empty request body")]
    EmptyRequestBody,

    #[error("Content-Type must be multipart/form-data, received '{received}'")]
    InvalidContentType { received: String },

    #[error("Invalid form data: {0}")]
    InvalidFormData(String),

    #[error("No video file provided")]
    NoFileProvided,

    #[error("Only video files are allowed, received '{received}'")]
    NotAVideo { received: String },

    #[error("File too large: received {received}, maximum {max} bytes")]
    FileTooLarge { received: String, max: u64 },

    #[error("File is empty")]
    EmptyFile,

    #[error("File buffer is empty")]
    EmptyFileBuffer,

    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    #[error("Storage list failed: {0}")]
    StorageList(String),

    #[error("Storage connection failed: {0}")]
    StorageConnection(String),

    #[error("Endpoint not found: {0}")]
    EndpointNotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, sensitive, log_level).
/// client_message and details stay per-variant for dynamic content.
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::MethodNotAllowed => (405, "METHOD_NOT_ALLOWED", false, LogLevel::Debug),
        AppError::StorageNotConfigured => (500, "STORAGE_NOT_CONFIGURED", false, LogLevel::Warn),
        AppError::EmptyRequestBody => (400, "EMPTY_REQUEST_BODY", false, LogLevel::Debug),
        AppError::InvalidContentType { .. } => {
            (400, "INVALID_CONTENT_TYPE", false, LogLevel::Debug)
        }
        AppError::InvalidFormData(_) => (400, "INVALID_FORM_DATA", false, LogLevel::Debug),
        AppError::NoFileProvided => (400, "NO_FILE_PROVIDED", false, LogLevel::Debug),
        AppError::NotAVideo { .. } => (400, "NOT_A_VIDEO", false, LogLevel::Debug),
        AppError::FileTooLarge { .. } => (400, "FILE_TOO_LARGE", false, LogLevel::Debug),
        AppError::EmptyFile => (400, "EMPTY_FILE", false, LogLevel::Debug),
        AppError::EmptyFileBuffer => (400, "EMPTY_FILE_BUFFER", false, LogLevel::Warn),
        AppError::StorageWrite(_) => (500, "STORAGE_WRITE_FAILED", true, LogLevel::Error),
        AppError::StorageList(_) => (500, "STORAGE_LIST_FAILED", true, LogLevel::Error),
        AppError::StorageConnection(_) => {
            (500, "STORAGE_CONNECTION_FAILED", true, LogLevel::Error)
        }
        AppError::EndpointNotFound(_) => (404, "ENDPOINT_NOT_FOUND", false, LogLevel::Debug),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, "INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for log fields
    pub fn error_type(&self) -> &str {
        match self {
            AppError::MethodNotAllowed => "MethodNotAllowed",
            AppError::StorageNotConfigured => "StorageNotConfigured",
            AppError::EmptyRequestBody => "EmptyRequestBody",
            AppError::InvalidContentType { .. } => "InvalidContentType",
            AppError::InvalidFormData(_) => "InvalidFormData",
            AppError::NoFileProvided => "NoFileProvided",
            AppError::NotAVideo { .. } => "NotAVideo",
            AppError::FileTooLarge { .. } => "FileTooLarge",
            AppError::EmptyFile => "EmptyFile",
            AppError::EmptyFileBuffer => "EmptyFileBuffer",
            AppError::StorageWrite(_) => "StorageWrite",
            AppError::StorageList(_) => "StorageList",
            AppError::StorageConnection(_) => "StorageConnection",
            AppError::EndpointNotFound(_) => "EndpointNotFound",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MethodNotAllowed => "Method not allowed".to_string(),
            AppError::StorageNotConfigured => "Storage bucket not configured".to_string(),
            AppError::EmptyRequestBody => "Empty request body".to_string(),
            AppError::InvalidContentType { .. } => {
                "Content-Type must be multipart/form-data".to_string()
            }
            AppError::InvalidFormData(_) => "Invalid form data".to_string(),
            AppError::NoFileProvided => "No video file provided".to_string(),
            AppError::NotAVideo { .. } => "Only video files are allowed".to_string(),
            AppError::FileTooLarge { max, .. } => {
                format!("File too large. Maximum size is {}MB", max / 1024 / 1024)
            }
            AppError::EmptyFile => "File is empty".to_string(),
            AppError::EmptyFileBuffer => "File buffer is empty".to_string(),
            AppError::StorageWrite(_) => "Failed to upload video to storage".to_string(),
            AppError::StorageList(_) => "Failed to list videos".to_string(),
            AppError::StorageConnection(_) => "Storage connection failed".to_string(),
            AppError::EndpointNotFound(_) => "Endpoint not found".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::InternalWithSource { .. } => "Internal server error".to_string(),
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            AppError::StorageNotConfigured => Some(
                "No storage backend is bound. Set STORAGE_BACKEND and its settings before starting the server."
                    .to_string(),
            ),
            AppError::InvalidContentType { received } => Some(format!("received: {}", received)),
            AppError::InvalidFormData(msg) => Some(msg.clone()),
            AppError::NotAVideo { received } => Some(format!("received: {}", received)),
            AppError::FileTooLarge { received, .. } => Some(format!("received: {}", received)),
            AppError::EmptyFileBuffer => Some(
                "The declared file size was nonzero but no bytes were received".to_string(),
            ),
            AppError::StorageWrite(msg)
            | AppError::StorageList(msg)
            | AppError::StorageConnection(msg)
            | AppError::Internal(msg) => Some(msg.clone()),
            AppError::InternalWithSource { message, .. } => Some(message.clone()),
            AppError::MethodNotAllowed
            | AppError::EmptyRequestBody
            | AppError::NoFileProvided
            | AppError::EmptyFile
            | AppError::EndpointNotFound(_) => None,
        }
    }
}
