use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a successful `POST /api/upload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    /// Public URL of the stored object
    pub url: String,
    /// Storage key, e.g. `videos/1718000000000-k3j9x2.mp4`
    pub file_name: String,
    pub file_size: u64,
    pub content_type: String,
    /// Unix milliseconds embedded in the key
    pub timestamp: i64,
}
