//! HTTP rendering of the core error taxonomy.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use vidshare_core::models::ErrorResponse;
use vidshare_core::{AppError, ErrorMetadata, LogLevel};
use vidshare_storage::StorageError;

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rule: IntoResponse and AppError are both foreign to this crate)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::from(err))
    }
}

// Listing and connectivity handlers map their own context; this is the default mapping
impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::UploadFailed(msg) => AppError::StorageWrite(msg),
            StorageError::ListFailed(msg) => AppError::StorageList(msg),
            StorageError::NotFound(msg)
            | StorageError::DownloadFailed(msg)
            | StorageError::InvalidKey(msg)
            | StorageError::BackendError(msg)
            | StorageError::ConfigError(msg) => AppError::Internal(msg),
            StorageError::IoError(err) => AppError::Internal(format!("IO error: {}", err)),
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, code, "Request rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error.detailed_message(), error_type, code, "Request failed");
        }
    }
}

/// Redacted envelope attached to responses for sensitive errors.
/// `redact_error_details` swaps it in when running in production.
#[derive(Debug, Clone)]
pub struct RedactedErrorBody(pub ErrorResponse);

/// Build the `{success:false, error, details?}` envelope for an error.
pub fn error_body(error: &AppError, is_production: bool) -> ErrorResponse {
    let details = if is_production && error.is_sensitive() {
        None
    } else {
        error.details()
    };
    ErrorResponse::new(error.client_message()).with_details(details)
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let mut response = (status, Json(error_body(app_error, false))).into_response();
        if app_error.is_sensitive() {
            response
                .extensions_mut()
                .insert(RedactedErrorBody(error_body(app_error, true)));
        }
        response
    }
}
