//! Drives the uploader against the API: submit with progress, refresh the
//! listing, reset the form and raise the ad overlay when playback ends.

use crate::ad::AdOverlay;
use crate::error::{ClientError, ClientResult};
use crate::progress::ProgressSimulator;
use crate::uploader::{SelectedFile, UploadState, Uploader};
use crate::ApiClient;
use std::time::Duration;
use vidshare_core::constants::{BYTES_PER_MB, CLIENT_RESET_DELAY_SECS, DEFAULT_MAX_UPLOAD_SIZE_MB};
use vidshare_core::models::{UploadResponse, VideoEntry};

/// Parse a limit label such as "100MB" into bytes.
pub fn parse_size_label(label: &str) -> Option<u64> {
    let megabytes = label.trim().strip_suffix("MB")?.trim().parse::<u64>().ok()?;
    megabytes.checked_mul(BYTES_PER_MB)
}

pub struct UploadController {
    client: ApiClient,
    uploader: Uploader,
    ad: AdOverlay,
    videos: Vec<VideoEntry>,
    reset_delay: Duration,
}

impl UploadController {
    pub fn new(client: ApiClient, max_size_bytes: u64, ad_link: impl Into<String>) -> Self {
        Self {
            client,
            uploader: Uploader::new(max_size_bytes),
            ad: AdOverlay::new(ad_link),
            videos: Vec::new(),
            reset_delay: Duration::from_secs(CLIENT_RESET_DELAY_SECS),
        }
    }

    /// Build a controller from the server's public configuration.
    pub async fn connect(client: ApiClient) -> ClientResult<Self> {
        let config = client.config().await?;
        let max_size_bytes = parse_size_label(&config.max_file_size).unwrap_or_else(|| {
            tracing::warn!(
                label = %config.max_file_size,
                "Unrecognised upload limit, using default"
            );
            DEFAULT_MAX_UPLOAD_SIZE_MB * BYTES_PER_MB
        });
        Ok(Self::new(client, max_size_bytes, config.adsterra_link))
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn uploader(&self) -> &Uploader {
        &self.uploader
    }

    pub fn ad(&self) -> &AdOverlay {
        &self.ad
    }

    pub fn ad_mut(&mut self) -> &mut AdOverlay {
        &mut self.ad
    }

    pub fn videos(&self) -> &[VideoEntry] {
        &self.videos
    }

    pub fn select_file(&mut self, file: SelectedFile) -> ClientResult<()> {
        self.uploader.select_file(file)
    }

    /// Send the selected file, reporting simulated progress while the request
    /// is in flight.
    pub async fn submit<F>(&mut self, mut on_progress: F) -> ClientResult<UploadResponse>
    where
        F: FnMut(f64),
    {
        let file = match self.uploader.begin_upload() {
            Some(file) => file,
            None if self.uploader.state() == &UploadState::Uploading => {
                return Err(ClientError::InvalidFile(
                    "An upload is already in progress".to_string(),
                ))
            }
            None => {
                return Err(ClientError::InvalidFile(
                    "Select a video file first".to_string(),
                ))
            }
        };

        let progress = ProgressSimulator::start();
        let mut updates = progress.subscribe();

        let result = {
            let request = self.client.upload_video(&file);
            tokio::pin!(request);
            loop {
                tokio::select! {
                    result = &mut request => break result,
                    changed = updates.changed() => match changed {
                        Ok(()) => on_progress(*updates.borrow_and_update()),
                        Err(_) => break (&mut request).await,
                    },
                }
            }
        };
        drop(progress);

        match result {
            Ok(response) => {
                tracing::info!(url = %response.url, "Upload finished");
                self.uploader.upload_succeeded(&response);
                self.uploader.start_playback();
                if let Err(e) = self.refresh_videos().await {
                    tracing::warn!(error = %e, "Failed to refresh video list");
                }
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Upload failed");
                self.uploader.upload_failed(&e);
                Err(e)
            }
        }
    }

    pub async fn refresh_videos(&mut self) -> ClientResult<&[VideoEntry]> {
        let list = self.client.list_videos().await?;
        self.videos = list.videos;
        Ok(&self.videos)
    }

    /// Wait out the reset delay, then clear the form.
    pub async fn reset_after_delay(&mut self) {
        tokio::time::sleep(self.reset_delay).await;
        self.uploader.reset();
    }

    /// The player reached the end of the video.
    pub fn playback_ended(&mut self) {
        self.ad.show();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;
    use serde_json::json;

    const URL: &str = "https://pub-test.r2.dev/videos/1700000000000-abc123.mp4";

    async fn mock_config(server: &mut mockito::ServerGuard, max: &str) -> mockito::Mock {
        server
            .mock("GET", "/api/config")
            .with_status(200)
            .with_body(
                json!({
                    "success": true,
                    "maxFileSize": max,
                    "allowedTypes": ["video/mp4"],
                    "features": [],
                    "adsterraLink": "https://ads.example.com/spot",
                    "r2Configured": true
                })
                .to_string(),
            )
            .create_async()
            .await
    }

    #[test]
    fn test_parse_size_label() {
        assert_eq!(parse_size_label("100MB"), Some(100 * 1024 * 1024));
        assert_eq!(parse_size_label(" 1MB "), Some(1024 * 1024));
        assert_eq!(parse_size_label("100"), None);
        assert_eq!(parse_size_label("lotsMB"), None);
    }

    #[tokio::test]
    async fn test_connect_reads_limit_and_ad_link() {
        let mut server = mockito::Server::new_async().await;
        let _config = mock_config(&mut server, "2MB").await;

        let client = ApiClient::new(ClientConfig::new(server.url())).unwrap();
        let controller = UploadController::connect(client).await.unwrap();

        assert_eq!(controller.uploader().max_size_bytes(), 2 * 1024 * 1024);
        assert_eq!(controller.ad().link(), "https://ads.example.com/spot");
    }

    #[tokio::test]
    async fn test_submit_success_plays_and_refreshes() {
        let mut server = mockito::Server::new_async().await;
        let _upload = server
            .mock("POST", "/api/upload")
            .with_status(200)
            .with_body(
                json!({
                    "success": true,
                    "message": "Video uploaded successfully!",
                    "url": URL,
                    "fileName": "videos/1700000000000-abc123.mp4",
                    "fileSize": 3,
                    "contentType": "video/mp4",
                    "timestamp": 1700000000000i64
                })
                .to_string(),
            )
            .create_async()
            .await;
        let _videos = server
            .mock("GET", "/api/videos")
            .with_status(200)
            .with_body(
                json!({
                    "success": true,
                    "videos": [{
                        "key": "videos/1700000000000-abc123.mp4",
                        "size": 3,
                        "uploaded": "2024-01-01T00:00:00Z",
                        "url": URL
                    }],
                    "total": 1
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = ApiClient::new(ClientConfig::new(server.url())).unwrap();
        let mut controller = UploadController::new(client, 1024, "https://ads.example.com/spot")
            .with_reset_delay(Duration::ZERO);
        controller
            .select_file(SelectedFile::new("clip.mp4", "video/mp4", vec![1, 2, 3]))
            .unwrap();

        let response = controller.submit(|_| {}).await.unwrap();

        assert_eq!(response.url, URL);
        assert_eq!(
            controller.uploader().state(),
            &UploadState::Playing { url: URL.into() }
        );
        assert_eq!(controller.videos().len(), 1);
        assert_eq!(controller.videos()[0].url, URL);

        controller.playback_ended();
        assert!(controller.ad().is_showing());

        controller.reset_after_delay().await;
        assert_eq!(controller.uploader().state(), &UploadState::Idle);
    }

    #[tokio::test]
    async fn test_submit_returns_without_waiting_for_reset() {
        let mut server = mockito::Server::new_async().await;
        let _upload = server
            .mock("POST", "/api/upload")
            .with_status(200)
            .with_body(
                json!({
                    "success": true,
                    "message": "Video uploaded successfully!",
                    "url": URL,
                    "fileName": "videos/1700000000000-abc123.mp4",
                    "fileSize": 3,
                    "contentType": "video/mp4",
                    "timestamp": 1700000000000i64
                })
                .to_string(),
            )
            .create_async()
            .await;
        let _videos = server
            .mock("GET", "/api/videos")
            .with_status(200)
            .with_body(r#"{"success":true,"videos":[],"total":0}"#)
            .create_async()
            .await;

        let client = ApiClient::new(ClientConfig::new(server.url())).unwrap();
        let mut controller = UploadController::new(client, 1024, "https://ads.example.com/spot");
        controller
            .select_file(SelectedFile::new("clip.mp4", "video/mp4", vec![1, 2, 3]))
            .unwrap();

        let response = tokio::time::timeout(Duration::from_secs(2), controller.submit(|_| {}))
            .await
            .expect("submit should not wait out the reset delay")
            .unwrap();

        assert_eq!(response.url, URL);
        assert_eq!(
            controller.uploader().state(),
            &UploadState::Playing { url: URL.into() }
        );
    }

    #[tokio::test]
    async fn test_submit_failure_returns_to_file_selected() {
        let mut server = mockito::Server::new_async().await;
        let _upload = server
            .mock("POST", "/api/upload")
            .with_status(500)
            .with_body(r#"{"success":false,"error":"Failed to upload video to storage"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(ClientConfig::new(server.url())).unwrap();
        let mut controller = UploadController::new(client, 1024, "https://ads.example.com/spot");
        controller
            .select_file(SelectedFile::new("clip.mp4", "video/mp4", vec![1, 2, 3]))
            .unwrap();

        let err = controller.submit(|_| {}).await.unwrap_err();

        assert!(matches!(err, ClientError::Server { status: 500, .. }));
        assert_eq!(controller.uploader().state(), &UploadState::FileSelected);
        assert_eq!(
            controller.uploader().status().unwrap().text,
            "Upload failed: Failed to upload video to storage"
        );
    }

    #[tokio::test]
    async fn test_submit_without_file_is_refused() {
        let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();
        let mut controller = UploadController::new(client, 1024, "https://ads.example.com/spot");

        let err = controller.submit(|_| {}).await.unwrap_err();

        assert!(matches!(err, ClientError::InvalidFile(_)));
        assert_eq!(controller.uploader().state(), &UploadState::Idle);
    }
}
