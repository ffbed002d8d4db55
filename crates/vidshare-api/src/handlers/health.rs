use axum::Json;
use chrono::Utc;
use vidshare_core::constants::{HEALTH_MESSAGE, PLATFORM};
use vidshare_core::models::HealthResponse;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "OK".to_string(),
        message: HEALTH_MESSAGE.to_string(),
        timestamp: Utc::now(),
        platform: PLATFORM.to_string(),
    })
}
