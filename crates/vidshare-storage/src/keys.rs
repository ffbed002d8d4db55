//! Shared key generation for storage backends.
//!
//! Key format: `videos/{unix-ms}-{random}.{ext}` where `random` is six base36
//! characters and `ext` is derived from the original filename.

use chrono::Utc;
use rand::Rng;
use vidshare_core::constants::{DEFAULT_VIDEO_EXTENSION, KEY_RANDOM_SUFFIX_LEN, VIDEO_KEY_PREFIX};

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A freshly generated storage key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedKey {
    pub key: String,
    /// Unix milliseconds embedded in the key
    pub timestamp_ms: i64,
    pub extension: String,
}

/// Generate a storage key for an uploaded video.
pub fn generate_video_key(original_filename: &str) -> GeneratedKey {
    generate_video_key_at(original_filename, Utc::now().timestamp_millis())
}

/// Same as [`generate_video_key`] with an explicit timestamp.
pub fn generate_video_key_at(original_filename: &str, timestamp_ms: i64) -> GeneratedKey {
    let extension = sanitize_extension(original_filename);
    let key = format!(
        "{}{}-{}.{}",
        VIDEO_KEY_PREFIX,
        timestamp_ms,
        random_suffix(),
        extension
    );

    GeneratedKey {
        key,
        timestamp_ms,
        extension,
    }
}

/// Extension after the last `.`, reduced to ASCII alphanumerics and lowercased.
/// Falls back to `mp4` when the filename has no usable extension.
pub fn sanitize_extension(original_filename: &str) -> String {
    let Some((_, raw)) = original_filename.rsplit_once('.') else {
        return DEFAULT_VIDEO_EXTENSION.to_string();
    };

    let ext: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if ext.is_empty() {
        DEFAULT_VIDEO_EXTENSION.to_string()
    } else {
        ext
    }
}

fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..KEY_RANDOM_SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// Reject keys that could escape a filesystem root
pub fn is_safe_key(key: &str) -> bool {
    !key.is_empty() && !key.contains("..") && !key.starts_with('/') && !key.contains('\\')
}
