use crate::state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use vidshare_core::constants::{ADVERTISED_FEATURES, ADVERTISED_VIDEO_TYPES};
use vidshare_core::models::ConfigResponse;

/// Public client configuration, including the ad overlay link.
#[utoipa::path(
    get,
    path = "/api/config",
    tag = "system",
    responses(
        (status = 200, description = "Client configuration", body = ConfigResponse)
    )
)]
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        success: true,
        max_file_size: state.config.max_upload_size_label(),
        allowed_types: ADVERTISED_VIDEO_TYPES.iter().map(|t| t.to_string()).collect(),
        features: ADVERTISED_FEATURES.iter().map(|f| f.to_string()).collect(),
        adsterra_link: state.config.ad_link.clone(),
        r2_configured: state.storage_configured(),
    })
}
