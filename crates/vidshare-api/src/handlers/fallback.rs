//! Envelope responses for requests no handler accepts.

use crate::error::HttpAppError;
use axum::http::Uri;
use vidshare_core::AppError;

/// Method fallback for every API route
pub async fn method_not_allowed() -> HttpAppError {
    HttpAppError(AppError::MethodNotAllowed)
}

/// Unknown paths under `/api`
pub async fn endpoint_not_found(uri: Uri) -> HttpAppError {
    HttpAppError(AppError::EndpointNotFound(uri.path().to_string()))
}
