// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, media_key, TestApp};
use axum::http::StatusCode;
use serde_json::{json, Value};

fn audio(name: &str) -> String {
    media_key("audio", name, "mp3")
}

/// 创建一个含三个词条的主题，其中一个词条缺少巽他语音频
async fn seed_topic(app: &TestApp) -> String {
    let editor = app.admin_token("editor@kangagam.id").await;
    let topic = app.create_topic(&editor, "Angka").await;
    let topic_id = topic["id"].as_str().unwrap().to_string();

    app.create_entry(
        &editor,
        &topic_id,
        ["Dua", "Dua", "Two"],
        json!({ "id": audio("dua-id"), "su": audio("dua-su"), "en": audio("two") }),
    )
    .await;
    app.create_entry(
        &editor,
        &topic_id,
        ["Satu", "Hiji", "One"],
        json!({ "id": audio("satu"), "en": audio("one") }),
    )
    .await;
    app.create_entry(
        &editor,
        &topic_id,
        ["Tiga", "Tilu", "Three"],
        json!({ "su": audio("tilu") }),
    )
    .await;

    topic_id
}

fn keys(body: &Value) -> Vec<String> {
    body["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|step| step["media_key"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_vocabulary_playlist_follows_entry_and_language_order() {
    let app = create_test_app().await;
    let topic_id = seed_topic(&app).await;

    let response = app
        .server
        .get(&format!("/api/topics/{}/playlist", topic_id))
        .add_query_param("langs", "su,id")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["mode"], "vocabulary");
    assert_eq!(
        keys(&body),
        vec![
            audio("dua-su"),
            audio("dua-id"),
            audio("satu"),
            audio("tilu")
        ]
    );
    assert_eq!(body["steps"][0]["step"], 1);
    assert_eq!(body["steps"][0]["language"], "su");
    assert_eq!(
        body["steps"][0]["url"],
        format!("http://localhost/api/media/{}", audio("dua-su"))
    );
}

#[tokio::test]
async fn test_repeat_plays_each_track_consecutively() {
    let app = create_test_app().await;
    let topic_id = seed_topic(&app).await;

    let body = app
        .server
        .get(&format!("/api/topics/{}/playlist", topic_id))
        .add_query_param("langs", "en")
        .add_query_param("repeat", 2)
        .await
        .json::<Value>();

    assert_eq!(
        keys(&body),
        vec![
            audio("two"),
            audio("two"),
            audio("one"),
            audio("one")
        ]
    );
    let repetitions: Vec<u64> = body["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|step| step["repetition"].as_u64().unwrap())
        .collect();
    assert_eq!(repetitions, vec![1, 2, 1, 2]);
}

#[tokio::test]
async fn test_quiz_playlist_is_deterministic_per_seed() {
    let app = create_test_app().await;
    let topic_id = seed_topic(&app).await;
    let path = format!("/api/topics/{}/playlist", topic_id);

    let first = app
        .server
        .get(&path)
        .add_query_param("mode", "quiz")
        .add_query_param("langs", "id")
        .add_query_param("seed", 42)
        .await
        .json::<Value>();
    let second = app
        .server
        .get(&path)
        .add_query_param("mode", "quiz")
        .add_query_param("langs", "id")
        .add_query_param("seed", 42)
        .await
        .json::<Value>();

    assert_eq!(first["mode"], "quiz");
    assert_eq!(keys(&first), keys(&second));

    let mut sorted = keys(&first);
    sorted.sort();
    let mut expected = vec![audio("dua-id"), audio("satu")];
    expected.sort();
    assert_eq!(sorted, expected);
}

#[tokio::test]
async fn test_playlist_rejects_bad_parameters() {
    let app = create_test_app().await;
    let topic_id = seed_topic(&app).await;
    let path = format!("/api/topics/{}/playlist", topic_id);

    for (name, value) in [("repeat", "6"), ("repeat", "0"), ("mode", "shuffle"), ("langs", "jv")] {
        let response = app
            .server
            .get(&path)
            .add_query_param(name, value)
            .expect_failure()
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}={}", name, value);
    }

    let missing = app
        .server
        .get(&format!("/api/topics/{}/playlist", uuid::Uuid::new_v4()))
        .expect_failure()
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
}
