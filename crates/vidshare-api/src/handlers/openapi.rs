use axum::Json;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::api_doc::get_openapi_spec())
}
