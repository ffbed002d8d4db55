//! Listing, diagnostics, CORS, fallback and static asset tests.

mod helpers;

use axum::http::Method;
use helpers::fixtures::{fake_video, upload_video};
use helpers::storage::FailingStorage;
use helpers::{
    setup_test_app, setup_test_app_with, setup_test_app_with_storage,
    setup_test_app_without_storage, INDEX_HTML,
};
use serde_json::{json, Value};
use std::sync::Arc;
use vidshare_core::constants::ADVERTISED_VIDEO_TYPES;
use vidshare_core::models::{UploadResponse, VideoListResponse};

fn assert_cors(response: &axum_test::TestResponse) {
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(
        response.header("access-control-allow-methods"),
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(
        response.header("access-control-allow-headers"),
        "Content-Type, Authorization, *"
    );
    assert_eq!(response.header("access-control-max-age"), "86400");
}

#[tokio::test]
async fn test_list_videos_empty() {
    let app = setup_test_app();

    let response = app.client().get("/api/videos").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!({ "success": true, "videos": [], "total": 0 }));
}

#[tokio::test]
async fn test_list_videos_after_uploads() {
    let app = setup_test_app();

    let first: UploadResponse = upload_video(app.client(), "a.mp4", "video/mp4", fake_video(10))
        .await
        .json();
    let second: UploadResponse = upload_video(app.client(), "b.webm", "video/webm", fake_video(20))
        .await
        .json();

    let response = app.client().get("/api/videos").await;
    assert_eq!(response.status_code(), 200);

    let body: VideoListResponse = response.json();
    assert!(body.success);
    assert_eq!(body.total, 2);
    assert_eq!(body.videos.len(), 2);

    let first_entry = body
        .videos
        .iter()
        .find(|v| v.key == first.file_name)
        .expect("first upload listed");
    assert_eq!(first_entry.url, first.url);
    assert_eq!(first_entry.size, 10);

    let second_entry = body
        .videos
        .iter()
        .find(|v| v.key == second.file_name)
        .expect("second upload listed");
    assert_eq!(second_entry.url, second.url);
    assert_eq!(second_entry.size, 20);
}

#[tokio::test]
async fn test_list_videos_without_storage() {
    let app = setup_test_app_without_storage();

    let response = app.client().get("/api/videos").await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("Storage bucket not configured"));
}

#[tokio::test]
async fn test_list_videos_storage_failure() {
    let app = setup_test_app_with_storage(Arc::new(FailingStorage));

    let response = app.client().get("/api/videos").await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Failed to list videos"));
}

#[tokio::test]
async fn test_list_videos_wrong_method() {
    let app = setup_test_app();

    let response = app.client().delete("/api/videos").await;

    assert_eq!(response.status_code(), 405);
}

#[tokio::test]
async fn test_health() {
    let app = setup_test_app_without_storage();

    let response = app.client().get("/api/health").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["status"], json!("OK"));
    assert!(body["message"].is_string());
    assert!(body["timestamp"].is_string());
    assert!(body["platform"].is_string());
    assert_cors(&response);
}

#[tokio::test]
async fn test_config_defaults() {
    let app = setup_test_app();

    let response = app.client().get("/api/config").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["maxFileSize"], json!("100MB"));
    assert_eq!(body["allowedTypes"], json!(ADVERTISED_VIDEO_TYPES));
    assert_eq!(
        body["allowedTypes"],
        json!(["video/mp4", "video/webm", "video/ogg", "video/quicktime"])
    );
    assert_eq!(
        body["adsterraLink"],
        json!(vidshare_core::constants::DEFAULT_AD_LINK)
    );
    assert_eq!(body["r2Configured"], json!(true));
    assert!(body["features"].as_array().is_some_and(|f| !f.is_empty()));
}

#[tokio::test]
async fn test_config_reflects_settings() {
    let app = setup_test_app_with(|config| {
        config.max_upload_size_mb = 250;
        config.ad_link = "https://ads.example.com/spot".to_string();
    });

    let body: Value = app.client().get("/api/config").await.json();

    assert_eq!(body["maxFileSize"], json!("250MB"));
    assert_eq!(body["adsterraLink"], json!("https://ads.example.com/spot"));
}

#[tokio::test]
async fn test_config_without_storage() {
    let app = setup_test_app_without_storage();

    let body: Value = app.client().get("/api/config").await.json();

    assert_eq!(body["r2Configured"], json!(false));
}

#[tokio::test]
async fn test_storage_test_success() {
    let app = setup_test_app();
    upload_video(app.client(), "a.mp4", "video/mp4", fake_video(8)).await;

    let response = app.client().get("/api/storage-test").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["bucketInfo"]["name"], json!("memory"));
    assert_eq!(body["bucketInfo"]["totalObjects"], json!(1));
    assert_eq!(body["bucketInfo"]["objects"][0]["size"], json!(8));
}

#[tokio::test]
async fn test_storage_test_without_storage() {
    let app = setup_test_app_without_storage();

    let response = app.client().get("/api/storage-test").await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("Storage bucket not configured"));
}

#[tokio::test]
async fn test_storage_test_failure() {
    let app = setup_test_app_with_storage(Arc::new(FailingStorage));

    let response = app.client().get("/api/storage-test").await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("Storage connection failed"));
}

#[tokio::test]
async fn test_preflight_on_any_path() {
    let app = setup_test_app();

    for path in ["/api/upload", "/anything", "/api/nope"] {
        let response = app.client().method(Method::OPTIONS, path).await;

        assert_eq!(response.status_code(), 200, "path: {}", path);
        assert!(response.text().is_empty(), "path: {}", path);
        assert_cors(&response);
    }
}

#[tokio::test]
async fn test_error_responses_carry_cors_headers() {
    let app = setup_test_app_without_storage();

    let response = app.client().get("/api/videos").await;

    assert_eq!(response.status_code(), 500);
    assert_cors(&response);
}

#[tokio::test]
async fn test_unknown_api_path() {
    let app = setup_test_app();

    let response = app.client().get("/api/nope").await;

    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body, json!({ "success": false, "error": "Endpoint not found" }));
    assert_cors(&response);
}

#[tokio::test]
async fn test_api_root_paths_answer_with_envelope() {
    let app = setup_test_app();

    for path in ["/api", "/api/"] {
        let response = app.client().get(path).await;

        assert_eq!(response.status_code(), 404, "path: {}", path);
        let body: Value = response.json();
        assert_eq!(body, json!({ "success": false, "error": "Endpoint not found" }));
    }
}

#[tokio::test]
async fn test_unknown_api_path_any_method() {
    let app = setup_test_app();

    let response = app.client().post("/api/deeply/nested/route").await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_openapi_document() {
    let app = setup_test_app();

    let response = app.client().get("/api/openapi.json").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert!(body["paths"]["/api/upload"].is_object());
    assert!(body["paths"]["/api/videos"].is_object());
}

#[tokio::test]
async fn test_static_index() {
    let app = setup_test_app();

    let response = app.client().get("/index.html").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), INDEX_HTML);

    let root = app.client().get("/").await;
    assert_eq!(root.status_code(), 200);
    assert_eq!(root.text(), INDEX_HTML);
}

#[tokio::test]
async fn test_static_missing_asset() {
    let app = setup_test_app();

    let response = app.client().get("/missing.js").await;

    assert_eq!(response.status_code(), 404);
}
