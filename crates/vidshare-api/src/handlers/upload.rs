use crate::error::HttpAppError;
use crate::state::AppState;
use crate::validation::{
    check_buffered_size, check_content_length, check_content_type, check_size_limit,
    check_video_mime,
};
use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    Json,
};
use bytes::{Bytes, BytesMut};
use std::sync::Arc;
use vidshare_core::constants::VIDEO_FIELD_NAME;
use vidshare_core::models::{ErrorResponse, UploadResponse};
use vidshare_core::AppError;
use vidshare_storage::{generate_video_key, ObjectMetadata};

/// The `video` part after validation
struct VideoPart {
    data: Bytes,
    original_name: String,
    content_type: String,
    declared_size: u64,
}

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "videos",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Form with a `video` file field"),
    responses(
        (status = 200, description = "Video uploaded successfully", body = UploadResponse),
        (status = 400, description = "Invalid request or file", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Storage not configured or write failed", body = ErrorResponse)
    )
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let storage = state.storage()?.clone();

    let headers = request.headers();
    let content_length = check_content_length(headers)?;
    check_content_type(headers)?;

    tracing::debug!(content_length, "Upload request accepted for parsing");

    let multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| AppError::InvalidFormData(e.body_text()))?;

    let part = read_video_part(multipart, state.config.max_upload_size_bytes()).await?;

    let generated = generate_video_key(&part.original_name);
    let file_size = part.data.len() as u64;
    let metadata = ObjectMetadata {
        content_type: part.content_type.clone(),
        original_name: part.original_name.clone(),
        upload_time_ms: generated.timestamp_ms,
        declared_size: part.declared_size,
    };

    storage
        .put(&generated.key, part.data, &metadata)
        .await
        .map_err(|e| AppError::StorageWrite(e.to_string()))?;

    let url = storage.public_url(&generated.key);

    tracing::info!(
        key = %generated.key,
        original_name = %part.original_name,
        content_type = %part.content_type,
        size_bytes = file_size,
        "Video uploaded"
    );

    Ok(Json(UploadResponse {
        success: true,
        message: "Video uploaded successfully!".to_string(),
        url,
        file_name: generated.key,
        file_size,
        content_type: part.content_type,
        timestamp: generated.timestamp_ms,
    }))
}

/// Find the `video` field and buffer it, stopping as soon as the limit is exceeded.
async fn read_video_part(mut multipart: Multipart, max_bytes: u64) -> Result<VideoPart, AppError> {
    loop {
        let Some(mut field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::InvalidFormData(e.body_text()))?
        else {
            return Err(AppError::NoFileProvided);
        };

        if field.name() != Some(VIDEO_FIELD_NAME) {
            continue;
        }

        let content_type = field.content_type().map(|s| s.to_string());
        check_video_mime(content_type.as_deref())?;

        let original_name = field.file_name().unwrap_or("unknown").to_string();
        let declared = field
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        if let Some(declared) = declared {
            check_size_limit(declared, max_bytes)?;
        }

        let mut buffer = BytesMut::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| AppError::InvalidFormData(e.body_text()))?
        {
            buffer.extend_from_slice(&chunk);
            check_size_limit(buffer.len() as u64, max_bytes)?;
        }

        let buffered = buffer.len() as u64;
        let declared_size = declared.unwrap_or(buffered);
        check_buffered_size(declared_size, buffered, max_bytes)?;

        return Ok(VideoPart {
            data: buffer.freeze(),
            original_name,
            content_type: content_type.unwrap_or_default(),
            declared_size,
        });
    }
}
