//! OpenAPI documentation, served at `/api/openapi.json`.

use utoipa::OpenApi;

use crate::handlers;
use vidshare_core::models;

/// Returns the OpenAPI document for the API.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "vidshare API",
        version = "0.1.0",
        description = "Minimal video upload API: multipart upload to object storage, listing, health and client configuration."
    ),
    paths(
        handlers::upload::upload_video,
        handlers::videos::list_videos,
        handlers::health::health,
        handlers::config::get_config,
        handlers::storage_test::storage_test,
    ),
    components(schemas(
        models::UploadResponse,
        models::VideoEntry,
        models::VideoListResponse,
        models::HealthResponse,
        models::ConfigResponse,
        models::StorageTestResponse,
        models::BucketInfo,
        models::BucketObject,
        models::ErrorResponse,
    )),
    tags(
        (name = "videos", description = "Upload and list videos"),
        (name = "system", description = "Health, configuration and storage checks")
    )
)]
pub struct ApiDoc;
