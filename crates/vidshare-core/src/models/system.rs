use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    /// Always "OK"
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub platform: String,
}

/// Public client configuration served by `GET /api/config`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub success: bool,
    /// Upload limit label, e.g. "100MB"
    pub max_file_size: String,
    pub allowed_types: Vec<String>,
    pub features: Vec<String>,
    /// Outbound link shown by the ad overlay
    pub adsterra_link: String,
    /// Whether a storage backend was bound at startup
    pub r2_configured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct BucketObject {
    pub key: String,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BucketInfo {
    pub name: String,
    pub total_objects: usize,
    pub objects: Vec<BucketObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageTestResponse {
    pub success: bool,
    pub message: String,
    pub bucket_info: BucketInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_response_wire_names() {
        let body = serde_json::to_value(ConfigResponse {
            success: true,
            max_file_size: "100MB".into(),
            allowed_types: vec!["video/mp4".into()],
            features: vec![],
            adsterra_link: "https://ads.example".into(),
            r2_configured: false,
        })
        .unwrap();
        assert_eq!(body["maxFileSize"], "100MB");
        assert_eq!(body["allowedTypes"][0], "video/mp4");
        assert_eq!(body["adsterraLink"], "https://ads.example");
        assert_eq!(body["r2Configured"], false);
    }

    #[test]
    fn test_storage_test_response_wire_names() {
        let body = serde_json::to_value(StorageTestResponse {
            success: true,
            message: "Storage connection successful".into(),
            bucket_info: BucketInfo {
                name: "videos".into(),
                total_objects: 0,
                objects: vec![],
            },
        })
        .unwrap();
        assert_eq!(body["bucketInfo"]["totalObjects"], 0);
        assert_eq!(body["bucketInfo"]["name"], "videos");
    }
}
