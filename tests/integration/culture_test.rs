// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{bearer, create_test_app, media_key};
use axum::http::StatusCode;
use serde_json::{json, Value};

fn localized(id: &str, su: &str, en: &str) -> Value {
    json!({ "id": id, "su": su, "en": en })
}

#[tokio::test]
async fn test_culture_topic_and_entry_flow() {
    let app = create_test_app().await;
    let editor = app.admin_token("editor@kangagam.id").await;
    let root = app.superadmin_token().await;
    let angklung = media_key("images", "angklung", "png");

    let topic = app
        .server
        .post("/api/culture-topics")
        .add_header("Authorization", bearer(&editor))
        .json(&json!({
            "name": localized("Kesenian", "Kasenian", "Arts"),
            "image_key": angklung
        }))
        .await;
    topic.assert_status(StatusCode::CREATED);
    let topic = topic.json::<Value>();
    assert_eq!(
        topic["image_url"],
        format!("http://localhost/api/media/{}", angklung)
    );
    let topic_id = topic["id"].as_str().unwrap();

    let bad_video = app
        .server
        .post("/api/culture-entries")
        .add_header("Authorization", bearer(&editor))
        .json(&json!({
            "culture_topic_id": topic_id,
            "title": localized("Angklung", "Angklung", "Angklung"),
            "content": localized("Alat musik", "Waditra", "Instrument"),
            "video_url": "ftp://example.com/video.mp4"
        }))
        .expect_failure()
        .await;
    assert_eq!(bad_video.status_code(), StatusCode::BAD_REQUEST);

    let entry = app
        .server
        .post("/api/culture-entries")
        .add_header("Authorization", bearer(&editor))
        .json(&json!({
            "culture_topic_id": topic_id,
            "title": localized("Angklung", "Angklung", "Angklung"),
            "content": localized("Alat musik", "Waditra", "Instrument"),
            "video_url": "https://www.youtube.com/watch?v=abc"
        }))
        .await;
    entry.assert_status(StatusCode::CREATED);
    let entry_id = entry.json::<Value>()["id"].as_str().unwrap().to_string();

    let entries = app
        .server
        .get(&format!("/api/culture-topics/{}/entries", topic_id))
        .await
        .json::<Value>();
    assert_eq!(entries.as_array().unwrap().len(), 1);

    let forbidden = app
        .server
        .delete(&format!("/api/culture-topics/{}", topic_id))
        .add_header("Authorization", bearer(&editor))
        .expect_failure()
        .await;
    assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

    app.server
        .delete(&format!("/api/culture-topics/{}", topic_id))
        .add_header("Authorization", bearer(&root))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let gone = app
        .server
        .get(&format!("/api/culture-entries/{}", entry_id))
        .expect_failure()
        .await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_culture_entry_requires_existing_topic() {
    let app = create_test_app().await;
    let editor = app.admin_token("editor@kangagam.id").await;

    let response = app
        .server
        .post("/api/culture-entries")
        .add_header("Authorization", bearer(&editor))
        .json(&json!({
            "culture_topic_id": uuid::Uuid::new_v4(),
            "title": localized("Wayang", "Wayang", "Puppetry"),
            "content": localized("Isi", "Eusi", "Content")
        }))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
