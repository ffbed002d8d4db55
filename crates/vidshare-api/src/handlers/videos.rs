use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use vidshare_core::models::{ErrorResponse, VideoEntry, VideoListResponse};
use vidshare_core::AppError;

#[utoipa::path(
    get,
    path = "/api/videos",
    tag = "videos",
    responses(
        (status = 200, description = "All stored objects", body = VideoListResponse),
        (status = 500, description = "Storage not configured or listing failed", body = ErrorResponse)
    )
)]
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<VideoListResponse>, HttpAppError> {
    let storage = state.storage()?;

    let objects = storage
        .list(None)
        .await
        .map_err(|e| AppError::StorageList(e.to_string()))?;

    let videos: Vec<VideoEntry> = objects
        .into_iter()
        .map(|object| VideoEntry {
            url: storage.public_url(&object.key),
            key: object.key,
            size: object.size,
            uploaded: object.uploaded,
        })
        .collect();

    tracing::debug!(total = videos.len(), "Listed videos");

    Ok(Json(VideoListResponse {
        success: true,
        total: videos.len(),
        videos,
    }))
}
