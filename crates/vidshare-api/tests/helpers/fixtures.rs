//! Test fixtures: video bytes and upload requests.

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use bytes::Bytes;

pub const BOUNDARY: &str = "vidshare-test-boundary";

/// Minimal MP4 header (`ftyp` box) followed by filler bytes.
pub fn fake_video(len: usize) -> Vec<u8> {
    let mut data = vec![
        0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p', b'i', b's', b'o', b'm',
    ];
    data.resize(len.max(data.len()), 0xAB);
    data.truncate(len);
    data
}

/// File part for a multipart form.
pub fn file_part(file_name: &str, content_type: &str, data: Vec<u8>) -> Part {
    Part::bytes(Bytes::from(data))
        .file_name(file_name.to_string())
        .mime_type(content_type.to_string())
}

/// POST a multipart form to `/api/upload`.
///
/// axum-test streams `MultipartForm` bodies without a `Content-Length`, so the
/// form is buffered first and sent with an explicit length.
pub async fn post_form(server: &TestServer, form: MultipartForm) -> TestResponse {
    let content_type = form.content_type();
    let body = axum::body::to_bytes(axum::body::Body::from(form), usize::MAX)
        .await
        .expect("Failed to buffer multipart form");
    post_raw(server, &content_type, body.to_vec()).await
}

/// Upload one video file under the `video` field.
pub async fn upload_video(
    server: &TestServer,
    file_name: &str,
    content_type: &str,
    data: Vec<u8>,
) -> TestResponse {
    let form = MultipartForm::new().add_part("video", file_part(file_name, content_type, data));
    post_form(server, form).await
}

/// POST raw bytes to `/api/upload` with explicit headers.
pub async fn post_raw(server: &TestServer, content_type: &str, body: Vec<u8>) -> TestResponse {
    let length = body.len();
    server
        .post("/api/upload")
        .content_type(content_type)
        .add_header("content-length", length.to_string())
        .bytes(Bytes::from(body))
        .await
}

/// Content type matching [`declared_video_body`].
pub fn raw_multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

/// Single `video` part carrying its own `Content-Length` header, which
/// form builders do not emit.
pub fn declared_video_body(
    file_name: &str,
    content_type: &str,
    data: &[u8],
    declared_length: u64,
) -> Vec<u8> {
    let mut body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"video\"; filename=\"{file_name}\"\r\n\
         Content-Type: {content_type}\r\n\
         Content-Length: {declared_length}\r\n\r\n",
        boundary = BOUNDARY,
    )
    .into_bytes();
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// Upload a `video` part whose declared length differs from its data.
pub async fn upload_with_declared_length(
    server: &TestServer,
    file_name: &str,
    data: &[u8],
    declared_length: u64,
) -> TestResponse {
    let body = declared_video_body(file_name, "video/mp4", data, declared_length);
    post_raw(server, &raw_multipart_content_type(), body).await
}
