use crate::error::RedactedErrorBody;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// In production, replace sensitive error envelopes with their redacted form.
pub async fn redact_error_details(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !state.config.is_production() {
        return response;
    }

    match response.extensions().get::<RedactedErrorBody>().cloned() {
        Some(RedactedErrorBody(body)) => (response.status(), Json(body)).into_response(),
        None => response,
    }
}
