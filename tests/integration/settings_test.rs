// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{bearer, create_test_app};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_superadmin_upserts_settings() {
    let app = create_test_app().await;
    let root = app.superadmin_token().await;

    for value in ["Kang Agam", "Kang Agam Kamus"] {
        app.server
            .put("/api/settings/site.title")
            .add_header("Authorization", bearer(&root))
            .json(&json!({ "value": value }))
            .await
            .assert_status_ok();
    }

    let settings = app.server.get("/api/settings").await.json::<Value>();
    let settings = settings.as_array().unwrap();
    assert_eq!(settings.len(), 1);
    assert_eq!(settings[0]["key"], "site.title");
    assert_eq!(settings[0]["value"], "Kang Agam Kamus");
}

#[tokio::test]
async fn test_setting_rules() {
    let app = create_test_app().await;
    let root = app.superadmin_token().await;
    let editor = app.admin_token("editor@kangagam.id").await;

    let forbidden = app
        .server
        .put("/api/settings/site.title")
        .add_header("Authorization", bearer(&editor))
        .json(&json!({ "value": "x" }))
        .expect_failure()
        .await;
    assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

    let bad_key = app
        .server
        .put("/api/settings/Site%20Title")
        .add_header("Authorization", bearer(&root))
        .json(&json!({ "value": "x" }))
        .expect_failure()
        .await;
    assert_eq!(bad_key.status_code(), StatusCode::BAD_REQUEST);
}
