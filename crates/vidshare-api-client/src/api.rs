//! Domain methods and response interpretation for the vidshare API.

use crate::error::{ClientError, ClientResult};
use crate::uploader::SelectedFile;
use crate::ApiClient;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use vidshare_core::constants::VIDEO_FIELD_NAME;
use vidshare_core::models::{
    ConfigResponse, HealthResponse, StorageTestResponse, UploadResponse, VideoListResponse,
};

/// Characters of a non-JSON body quoted back in the error
const RESPONSE_EXCERPT_LEN: usize = 200;

impl ApiClient {
    /// Upload one video under the `video` form field.
    pub async fn upload_video(&self, file: &SelectedFile) -> ClientResult<UploadResponse> {
        let part = reqwest::multipart::Part::stream_with_length(file.data.clone(), file.size())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| ClientError::InvalidFile(format!("Invalid content type: {}", e)))?;
        let form = reqwest::multipart::Form::new().part(VIDEO_FIELD_NAME, part);

        tracing::info!(
            file_name = %file.name,
            size = file.size(),
            content_type = %file.content_type,
            "Starting upload"
        );

        self.post_multipart("/api/upload", form).await
    }

    pub async fn list_videos(&self) -> ClientResult<VideoListResponse> {
        self.get("/api/videos").await
    }

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.get("/api/health").await
    }

    pub async fn config(&self) -> ClientResult<ConfigResponse> {
        self.get("/api/config").await
    }

    pub async fn storage_test(&self) -> ClientResult<StorageTestResponse> {
        self.get("/api/storage-test").await
    }
}

fn looks_like_html(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.contains("<!doctype html") || lower.contains("<html")
}

fn excerpt(text: &str) -> String {
    text.chars().take(RESPONSE_EXCERPT_LEN).collect()
}

fn envelope_field(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(Value::as_str).map(str::to_string)
}

/// Turn a raw status and body into a typed result.
///
/// The body is read as text first so that empty and HTML bodies produce a
/// malformed-response error rather than a JSON decode failure.
pub fn interpret_response<T: DeserializeOwned>(status: StatusCode, text: &str) -> ClientResult<T> {
    if text.trim().is_empty() {
        return Err(ClientError::malformed("Server returned empty response"));
    }

    let value: Value = serde_json::from_str(text).map_err(|_| {
        if looks_like_html(text) {
            ClientError::MalformedResponse {
                message: "Server returned HTML instead of JSON".to_string(),
                html: true,
            }
        } else {
            ClientError::malformed(format!("Invalid server response: {}", excerpt(text)))
        }
    })?;

    if !status.is_success() {
        return Err(ClientError::Server {
            status: status.as_u16(),
            message: envelope_field(&value, "error")
                .unwrap_or_else(|| format!("Server error: {}", status)),
            details: envelope_field(&value, "details"),
        });
    }

    if value.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ClientError::Server {
            status: status.as_u16(),
            message: envelope_field(&value, "error")
                .unwrap_or_else(|| "Request failed without error message".to_string()),
            details: envelope_field(&value, "details"),
        });
    }

    serde_json::from_value(value)
        .map_err(|e| ClientError::malformed(format!("Unexpected response shape: {}", e)))
}
