// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    bearer, create_test_app, create_test_app_with, test_settings, SUPERADMIN_EMAIL,
    SUPERADMIN_PASSWORD,
};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_superadmin_is_bootstrapped_and_can_log_in() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/admins/login")
        .json(&json!({ "email": "ROOT@kangagam.id ", "password": SUPERADMIN_PASSWORD }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["admin"]["email"], SUPERADMIN_EMAIL);
    assert_eq!(body["admin"]["role"], "superadmin");
    assert!(body["admin"].get("password_hash").is_none());

    let token = body["token"].as_str().unwrap();
    let me = app
        .server
        .get("/api/admins/me")
        .add_header("Authorization", bearer(token))
        .await;
    me.assert_status_ok();
    assert_eq!(me.json::<Value>()["email"], SUPERADMIN_EMAIL);
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = create_test_app().await;

    let wrong_password = app
        .server
        .post("/api/admins/login")
        .json(&json!({ "email": SUPERADMIN_EMAIL, "password": "nope-nope" }))
        .expect_failure()
        .await;
    let unknown_email = app
        .server
        .post("/api/admins/login")
        .json(&json!({ "email": "ghost@kangagam.id", "password": "nope-nope" }))
        .expect_failure()
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        wrong_password.json::<Value>()["error"],
        unknown_email.json::<Value>()["error"]
    );
}

#[tokio::test]
async fn test_admin_creation_rejects_duplicate_email() {
    let app = create_test_app().await;
    let root = app.superadmin_token().await;

    let payload = json!({
        "name": "Asep",
        "email": "asep@kangagam.id",
        "password": "asep-pass-1"
    });
    app.server
        .post("/api/admins")
        .add_header("Authorization", bearer(&root))
        .json(&payload)
        .await
        .assert_status(StatusCode::CREATED);

    let mut duplicate = payload.clone();
    duplicate["email"] = json!("ASEP@kangagam.id");
    let response = app
        .server
        .post("/api/admins")
        .add_header("Authorization", bearer(&root))
        .json(&duplicate)
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_admin_creation_validates_input() {
    let app = create_test_app().await;
    let root = app.superadmin_token().await;

    let response = app
        .server
        .post("/api/admins")
        .add_header("Authorization", bearer(&root))
        .json(&json!({ "name": "Short", "email": "not-an-email", "password": "123" }))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_regular_admin_cannot_manage_admins() {
    let app = create_test_app().await;
    let editor = app.admin_token("editor@kangagam.id").await;

    let response = app
        .server
        .get("/api/admins")
        .add_header("Authorization", bearer(&editor))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_last_superadmin_cannot_be_removed() {
    let app = create_test_app().await;
    let root = app.superadmin_token().await;

    let list = app
        .server
        .get("/api/admins")
        .add_header("Authorization", bearer(&root))
        .await;
    list.assert_status_ok();
    let body = list.json::<Value>();
    assert_eq!(body["total"], 1);
    let root_id = body["items"][0]["id"].as_str().unwrap().to_string();

    let self_delete = app
        .server
        .delete(&format!("/api/admins/{}", root_id))
        .add_header("Authorization", bearer(&root))
        .expect_failure()
        .await;
    assert_eq!(self_delete.status_code(), StatusCode::CONFLICT);

    let demote = app
        .server
        .put(&format!("/api/admins/{}", root_id))
        .add_header("Authorization", bearer(&root))
        .json(&json!({ "role": "admin" }))
        .expect_failure()
        .await;
    assert_eq!(demote.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_profile_password_change_requires_current_password() {
    let app = create_test_app().await;
    let editor = app.admin_token("editor@kangagam.id").await;

    let missing = app
        .server
        .put("/api/admins/me")
        .add_header("Authorization", bearer(&editor))
        .json(&json!({ "password": "brand-new-pass" }))
        .expect_failure()
        .await;
    assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);

    let wrong = app
        .server
        .put("/api/admins/me")
        .add_header("Authorization", bearer(&editor))
        .json(&json!({ "password": "brand-new-pass", "current_password": "guess-guess" }))
        .expect_failure()
        .await;
    assert_eq!(wrong.status_code(), StatusCode::UNAUTHORIZED);

    app.server
        .put("/api/admins/me")
        .add_header("Authorization", bearer(&editor))
        .json(&json!({
            "name": "Editor Baru",
            "password": "brand-new-pass",
            "current_password": "editor-pass-1"
        }))
        .await
        .assert_status_ok();

    app.login("editor@kangagam.id", "brand-new-pass").await;
}

#[tokio::test]
async fn test_login_is_rate_limited_per_email() {
    let mut settings = test_settings();
    settings.rate_limiting.login_attempts_per_minute = 2;
    let app = create_test_app_with(settings).await;

    for _ in 0..2 {
        let response = app
            .server
            .post("/api/admins/login")
            .json(&json!({ "email": "ghost@kangagam.id", "password": "whatever1" }))
            .expect_failure()
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    let limited = app
        .server
        .post("/api/admins/login")
        .json(&json!({ "email": "ghost@kangagam.id", "password": "whatever1" }))
        .expect_failure()
        .await;
    assert_eq!(limited.status_code(), StatusCode::TOO_MANY_REQUESTS);

    // Other accounts are unaffected
    app.superadmin_token().await;
}
