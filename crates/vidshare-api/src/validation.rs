//! Validation utilities for the upload handler
//!
//! Each check maps to exactly one `AppError` so the handler can apply them in a
//! fixed order and stop at the first failure.

use axum::http::{header, HeaderMap};
use vidshare_core::constants::VIDEO_MIME_PREFIX;
use vidshare_core::models::format_megabytes;
use vidshare_core::AppError;

/// `Content-Length` must be present, numeric and nonzero.
pub fn check_content_length(headers: &HeaderMap) -> Result<u64, AppError> {
    let length = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(0);

    if length == 0 {
        return Err(AppError::EmptyRequestBody);
    }
    Ok(length)
}

/// `Content-Type` must mention `multipart/form-data`.
pub fn check_content_type(headers: &HeaderMap) -> Result<(), AppError> {
    let received = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if !received.to_lowercase().contains("multipart/form-data") {
        return Err(AppError::InvalidContentType {
            received: if received.is_empty() {
                "none".to_string()
            } else {
                received.to_string()
            },
        });
    }
    Ok(())
}

/// Normalize MIME type by stripping parameters (e.g. "video/mp4; codecs=avc1" -> "video/mp4").
fn normalize_mime_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
        .to_lowercase()
}

/// The part's declared MIME type must start with `video/`.
pub fn check_video_mime(content_type: Option<&str>) -> Result<(), AppError> {
    let received = content_type.unwrap_or("");
    if !normalize_mime_type(received).starts_with(VIDEO_MIME_PREFIX) {
        return Err(AppError::NotAVideo {
            received: if received.is_empty() {
                "none".to_string()
            } else {
                received.to_string()
            },
        });
    }
    Ok(())
}

/// Size must not exceed `max_bytes`.
pub fn check_size_limit(size: u64, max_bytes: u64) -> Result<(), AppError> {
    if size > max_bytes {
        return Err(AppError::FileTooLarge {
            received: format!("{}MB", format_megabytes(size)),
            max: max_bytes,
        });
    }
    Ok(())
}

/// Final size checks once the part has been buffered.
///
/// The buffered length is authoritative; the declared size only decides which
/// message an empty buffer produces.
pub fn check_buffered_size(declared: u64, buffered: u64, max_bytes: u64) -> Result<u64, AppError> {
    check_size_limit(declared.max(buffered), max_bytes)?;

    if buffered == 0 {
        if declared == 0 {
            return Err(AppError::EmptyFile);
        }
        return Err(AppError::EmptyFileBuffer);
    }

    Ok(buffered)
}
