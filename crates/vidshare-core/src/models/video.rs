use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct VideoEntry {
    pub key: String,
    pub size: u64,
    pub uploaded: DateTime<Utc>,
    pub url: String,
}

impl VideoEntry {
    /// Last path segment of the key
    pub fn display_name(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or(&self.key)
    }

    /// Size in megabytes with two decimals, e.g. "12.50 MB"
    pub fn size_label(&self) -> String {
        format!("{} MB", format_megabytes(self.size))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct VideoListResponse {
    pub success: bool,
    pub videos: Vec<VideoEntry>,
    pub total: usize,
}

/// Bytes rendered as megabytes with two decimals ("0.50")
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / crate::constants::BYTES_PER_MB as f64)
}
