// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{bearer, create_test_app};
use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::Value;

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-image-payload";

fn upload_form(data: &[u8], mime: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(data.to_vec())
            .file_name("upload.bin")
            .mime_type(mime),
    )
}

#[tokio::test]
async fn test_upload_and_fetch_media() {
    let app = create_test_app().await;
    let editor = app.admin_token("editor@kangagam.id").await;

    let response = app
        .server
        .post("/api/media")
        .add_header("Authorization", bearer(&editor))
        .multipart(upload_form(PNG_BYTES, "image/png"))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    let key = body["key"].as_str().unwrap().to_string();
    assert!(key.starts_with("images/") && key.ends_with(".png"), "{}", key);
    assert_eq!(body["size"], PNG_BYTES.len());
    assert_eq!(body["url"], format!("http://localhost/api/media/{}", key));

    let fetched = app.server.get(&format!("/api/media/{}", key)).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.header("content-type"), "image/png");
    assert_eq!(fetched.as_bytes().as_ref(), PNG_BYTES);

    // Same content, same key, stored once
    let again = app
        .server
        .post("/api/media")
        .add_header("Authorization", bearer(&editor))
        .multipart(upload_form(PNG_BYTES, "image/png"))
        .await;
    assert_eq!(again.json::<Value>()["key"], key.as_str());
    assert_eq!(app.storage.len().await, 1);
}

#[tokio::test]
async fn test_upload_rejections() {
    let app = create_test_app().await;
    let editor = app.admin_token("editor@kangagam.id").await;

    let empty = app
        .server
        .post("/api/media")
        .add_header("Authorization", bearer(&editor))
        .multipart(upload_form(b"", "audio/mpeg"))
        .expect_failure()
        .await;
    assert_eq!(empty.status_code(), StatusCode::BAD_REQUEST);

    let unsupported = app
        .server
        .post("/api/media")
        .add_header("Authorization", bearer(&editor))
        .multipart(upload_form(b"%PDF-1.7", "application/pdf"))
        .expect_failure()
        .await;
    assert_eq!(unsupported.status_code(), StatusCode::BAD_REQUEST);

    let too_large = app
        .server
        .post("/api/media")
        .add_header("Authorization", bearer(&editor))
        .multipart(upload_form(&vec![7u8; 8 * 1024], "audio/mpeg"))
        .expect_failure()
        .await;
    assert_eq!(too_large.status_code(), StatusCode::BAD_REQUEST);

    let (_, learner) = app.onboard("Dewi", "081234567890", "Bandung").await;
    let forbidden = app
        .server
        .post("/api/media")
        .add_header("Authorization", bearer(&learner))
        .multipart(upload_form(PNG_BYTES, "image/png"))
        .expect_failure()
        .await;
    assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

    assert!(app.storage.is_empty().await);
}

#[tokio::test]
async fn test_unknown_media_is_not_found() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/api/media/images/missing.png")
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
