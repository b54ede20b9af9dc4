// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{bearer, create_test_app, media_key};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_topic_lifecycle_and_public_listing() {
    let app = create_test_app().await;
    let editor = app.admin_token("editor@kangagam.id").await;

    let topic = app.create_topic(&editor, "Hewan").await;
    assert_eq!(topic["name"]["id"], "Hewan");
    assert_eq!(topic["entry_count"], 0);
    let topic_id = topic["id"].as_str().unwrap();

    app.create_entry(&editor, topic_id, ["Kucing", "Ucing", "Cat"], json!({}))
        .await;

    let listing = app.server.get("/api/topics").await;
    listing.assert_status_ok();
    let topics = listing.json::<Value>();
    assert_eq!(topics.as_array().unwrap().len(), 1);
    assert_eq!(topics[0]["entry_count"], 1);

    let entries = app
        .server
        .get(&format!("/api/topics/{}/entries", topic_id))
        .await
        .json::<Value>();
    assert_eq!(entries[0]["word"]["su"], "Ucing");
}

#[tokio::test]
async fn test_topic_requires_all_translations() {
    let app = create_test_app().await;
    let editor = app.admin_token("editor@kangagam.id").await;

    let response = app
        .server
        .post("/api/topics")
        .add_header("Authorization", bearer(&editor))
        .json(&json!({ "name": { "id": "Buah", "su": "", "en": "Fruit" } }))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "name is missing translations: su"
    );
}

#[tokio::test]
async fn test_only_owner_or_superadmin_may_update_topic() {
    let app = create_test_app().await;
    let owner = app.admin_token("owner@kangagam.id").await;
    let other = app.admin_token("other@kangagam.id").await;
    let root = app.superadmin_token().await;

    let topic = app.create_topic(&owner, "Warna").await;
    let path = format!("/api/topics/{}", topic["id"].as_str().unwrap());
    let update = json!({
        "name": { "id": "Warna", "su": "Warna", "en": "Colours" },
        "sort_order": 2
    });

    let forbidden = app
        .server
        .put(&path)
        .add_header("Authorization", bearer(&other))
        .json(&update)
        .expect_failure()
        .await;
    assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

    let updated = app
        .server
        .put(&path)
        .add_header("Authorization", bearer(&root))
        .json(&update)
        .await;
    updated.assert_status_ok();
    assert_eq!(updated.json::<Value>()["name"]["en"], "Colours");
    assert_eq!(updated.json::<Value>()["sort_order"], 2);
}

#[tokio::test]
async fn test_topic_deletion_requires_superadmin() {
    let app = create_test_app().await;
    let editor = app.admin_token("editor@kangagam.id").await;
    let root = app.superadmin_token().await;

    let topic = app.create_topic(&editor, "Buah").await;
    let topic_id = topic["id"].as_str().unwrap();
    let entry = app
        .create_entry(&editor, topic_id, ["Jeruk", "Jeruk", "Orange"], json!({}))
        .await;

    let forbidden = app
        .server
        .delete(&format!("/api/topics/{}", topic_id))
        .add_header("Authorization", bearer(&editor))
        .expect_failure()
        .await;
    assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

    app.server
        .delete(&format!("/api/topics/{}", topic_id))
        .add_header("Authorization", bearer(&root))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let gone = app
        .server
        .get(&format!("/api/entries/{}", entry["id"].as_str().unwrap()))
        .expect_failure()
        .await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_entry_rules() {
    let app = create_test_app().await;
    let owner = app.admin_token("owner@kangagam.id").await;
    let other = app.admin_token("other@kangagam.id").await;

    let missing_topic = app
        .server
        .post("/api/entries")
        .add_header("Authorization", bearer(&owner))
        .json(&json!({
            "topic_id": uuid::Uuid::new_v4(),
            "word": { "id": "Air", "su": "Cai", "en": "Water" }
        }))
        .expect_failure()
        .await;
    assert_eq!(missing_topic.status_code(), StatusCode::NOT_FOUND);

    let topic = app.create_topic(&owner, "Alam").await;
    let topic_id = topic["id"].as_str().unwrap();

    let bad_key = app
        .server
        .post("/api/entries")
        .add_header("Authorization", bearer(&owner))
        .json(&json!({
            "topic_id": topic_id,
            "word": { "id": "Air", "su": "Cai", "en": "Water" },
            "image_key": "../secret.png"
        }))
        .expect_failure()
        .await;
    assert_eq!(bad_key.status_code(), StatusCode::BAD_REQUEST);

    // Safe-looking paths that the uploader could never have produced
    for key in ["images/air.png", "docs/air.png", "images/air"] {
        let response = app
            .server
            .post("/api/entries")
            .add_header("Authorization", bearer(&owner))
            .json(&json!({
                "topic_id": topic_id,
                "word": { "id": "Air", "su": "Cai", "en": "Water" },
                "image_key": key
            }))
            .expect_failure()
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}", key);
        assert_eq!(
            response.json::<Value>()["error"],
            format!("Invalid media key: {}", key)
        );
    }

    let cai = media_key("audio", "cai", "mp3");
    let entry = app
        .create_entry(
            &owner,
            topic_id,
            ["Air", "Cai", "Water"],
            json!({ "su": cai, "en": "  " }),
        )
        .await;
    assert_eq!(
        entry["audio_urls"]["su"],
        format!("http://localhost/api/media/{}", cai)
    );
    assert_eq!(entry["audio"]["en"], Value::Null);

    let entry_path = format!("/api/entries/{}", entry["id"].as_str().unwrap());
    let forbidden = app
        .server
        .delete(&entry_path)
        .add_header("Authorization", bearer(&other))
        .expect_failure()
        .await;
    assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

    app.server
        .delete(&entry_path)
        .add_header("Authorization", bearer(&owner))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_dictionary_search() {
    let app = create_test_app().await;
    let editor = app.admin_token("editor@kangagam.id").await;
    let topic = app.create_topic(&editor, "Hewan").await;
    let topic_id = topic["id"].as_str().unwrap();

    app.create_entry(&editor, topic_id, ["Kucing", "Ucing", "Cat"], json!({}))
        .await;
    app.create_entry(&editor, topic_id, ["Anjing", "Anjing", "Dog"], json!({}))
        .await;
    app.create_entry(&editor, topic_id, ["Gajah", "Gajah", "Elephant"], json!({}))
        .await;

    let sundanese = app
        .server
        .get("/api/entries")
        .add_query_param("q", "UCING")
        .add_query_param("lang", "su")
        .await
        .json::<Value>();
    assert_eq!(sundanese["total"], 1);
    assert_eq!(sundanese["items"][0]["word"]["en"], "Cat");

    // "an" matches Anjing in Indonesian and Elephant in English
    let any_language = app
        .server
        .get("/api/entries")
        .add_query_param("q", "an")
        .await
        .json::<Value>();
    assert_eq!(any_language["total"], 2);

    let english_only = app
        .server
        .get("/api/entries")
        .add_query_param("q", "an")
        .add_query_param("lang", "en")
        .await
        .json::<Value>();
    assert_eq!(english_only["total"], 1);
    assert_eq!(english_only["items"][0]["word"]["id"], "Gajah");

    let unsupported = app
        .server
        .get("/api/entries")
        .add_query_param("lang", "fr")
        .expect_failure()
        .await;
    assert_eq!(unsupported.status_code(), StatusCode::BAD_REQUEST);

    let page = app
        .server
        .get("/api/entries")
        .add_query_param("limit", 2)
        .await
        .json::<Value>();
    assert_eq!(page["total"], 3);
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
}
