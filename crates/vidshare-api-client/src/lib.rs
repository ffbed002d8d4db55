//! HTTP client for the vidshare API.
//!
//! Provides the reqwest-backed [`ApiClient`], the upload flow state machine,
//! the simulated progress indicator and the post-playback ad overlay. The CLI
//! drives everything through this crate.

pub mod ad;
pub mod api;
pub mod controller;
pub mod error;
pub mod progress;
pub mod uploader;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use vidshare_core::constants::{CLIENT_REQUEST_TIMEOUT_SECS, DEFAULT_API_URL};

pub use ad::{AdClick, AdOverlay};
pub use controller::UploadController;
pub use error::{ClientError, ClientResult};
pub use progress::ProgressSimulator;
pub use uploader::{SelectedFile, StatusKind, StatusMessage, UploadState, Uploader};
pub use vidshare_core::models::{
    ConfigResponse, HealthResponse, StorageTestResponse, UploadResponse, VideoEntry,
    VideoListResponse,
};

/// Where the client talks to and how long it waits.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(CLIENT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// VIDSHARE_API_URL (or API_URL), defaulting to the local dev server.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = ["VIDSHARE_API_URL", "API_URL"]
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the vidshare API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Connectivity(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON endpoint.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.build_url(path);
        self.send(self.client.get(&url)).await
    }

    /// POST a multipart form.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let url = self.build_url(path);
        self.send(self.client.post(&url).multipart(form)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(status = %status, body_len = text.len(), "API response received");

        api::interpret_response(status, &text)
    }
}
