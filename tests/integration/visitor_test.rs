// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{bearer, create_test_app};
use axum::http::StatusCode;
use chrono::{Days, Utc};
use serde_json::{json, Value};

#[tokio::test]
async fn test_onboarding_normalizes_phone_and_issues_learner_token() {
    let app = create_test_app().await;

    let (learner_id, token) = app.onboard(" Dewi ", "0812-3456-7890", "Bandung").await;

    let me = app
        .server
        .get("/api/learners/me")
        .add_header("Authorization", bearer(&token))
        .await;
    me.assert_status_ok();
    let me = me.json::<Value>();
    assert_eq!(me["id"], learner_id.as_str());
    assert_eq!(me["name"], "Dewi");
    assert_eq!(me["phone"], "+6281234567890");

    // Learner tokens do not open the admin panel
    let admin_only = app
        .server
        .get("/api/learners")
        .add_header("Authorization", bearer(&token))
        .expect_failure()
        .await;
    assert_eq!(admin_only.status_code(), StatusCode::FORBIDDEN);

    let invalid = app
        .server
        .post("/api/learners")
        .json(&json!({ "name": "Budi", "phone": "12345", "city": "Garut" }))
        .expect_failure()
        .await;
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_visits_feed_dashboard_statistics() {
    let app = create_test_app().await;
    let editor = app.admin_token("editor@kangagam.id").await;

    let popular = app.create_topic(&editor, "Hewan").await;
    let quiet = app.create_topic(&editor, "Angka").await;
    let popular_id = popular["id"].as_str().unwrap();

    let (_, dewi) = app.onboard("Dewi", "081234567890", "Bandung").await;
    let (_, asep) = app.onboard("Asep", "+62 812 1111 2222", " bandung ").await;
    app.onboard("Rina", "6281333344445", "Garut").await;

    for token in [&dewi, &asep, &dewi] {
        app.server
            .post("/api/visitor-logs")
            .add_header("Authorization", bearer(token))
            .json(&json!({ "topic_id": popular_id }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let unknown_topic = app
        .server
        .post("/api/visitor-logs")
        .add_header("Authorization", bearer(&dewi))
        .json(&json!({ "topic_id": uuid::Uuid::new_v4() }))
        .expect_failure()
        .await;
    assert_eq!(unknown_topic.status_code(), StatusCode::NOT_FOUND);

    let admin_visit = app
        .server
        .post("/api/visitor-logs")
        .add_header("Authorization", bearer(&editor))
        .json(&json!({ "topic_id": popular_id }))
        .expect_failure()
        .await;
    assert_eq!(admin_visit.status_code(), StatusCode::FORBIDDEN);

    let stats = app
        .server
        .get("/api/dashboard/stats")
        .add_header("Authorization", bearer(&editor))
        .await;
    stats.assert_status_ok();
    let stats = stats.json::<Value>();

    assert_eq!(stats["totals"]["learners"], 3);
    assert_eq!(stats["totals"]["topics"], 2);
    assert_eq!(stats["totals"]["admins"], 2);
    assert_eq!(stats["totals"]["visits"], 3);

    assert_eq!(stats["visits_by_topic"][0]["topic_id"], popular_id);
    assert_eq!(stats["visits_by_topic"][0]["visits"], 3);
    assert_eq!(stats["visits_by_topic"][1]["topic_id"], quiet["id"]);
    assert_eq!(stats["visits_by_topic"][1]["visits"], 0);

    let days = stats["visits_by_day"].as_array().unwrap();
    assert_eq!(days.len(), 30);
    assert_eq!(days[29]["date"], Utc::now().date_naive().to_string());
    assert_eq!(days[29]["visits"], 3);

    assert_eq!(stats["learners_by_city"][0]["city"], "Bandung");
    assert_eq!(stats["learners_by_city"][0]["learners"], 2);
    assert_eq!(stats["learners_by_city"][1]["city"], "Garut");

    let visits = app
        .server
        .get("/api/visitor-logs")
        .add_header("Authorization", bearer(&editor))
        .add_query_param("topic_id", popular_id)
        .await
        .json::<Value>();
    assert_eq!(visits["total"], 3);
}

#[tokio::test]
async fn test_statistics_range_validation() {
    let app = create_test_app().await;
    let editor = app.admin_token("editor@kangagam.id").await;
    let today = Utc::now().date_naive();

    let inverted = app
        .server
        .get("/api/dashboard/stats")
        .add_header("Authorization", bearer(&editor))
        .add_query_param("from", today.to_string())
        .add_query_param("to", (today - Days::new(1)).to_string())
        .expect_failure()
        .await;
    assert_eq!(inverted.status_code(), StatusCode::BAD_REQUEST);

    let too_long = app
        .server
        .get("/api/dashboard/stats")
        .add_header("Authorization", bearer(&editor))
        .add_query_param("from", (today - Days::new(400)).to_string())
        .add_query_param("to", today.to_string())
        .expect_failure()
        .await;
    assert_eq!(too_long.status_code(), StatusCode::BAD_REQUEST);

    let single_day = app
        .server
        .get("/api/dashboard/stats")
        .add_header("Authorization", bearer(&editor))
        .add_query_param("from", today.to_string())
        .add_query_param("to", today.to_string())
        .await
        .json::<Value>();
    assert_eq!(single_day["visits_by_day"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_visit_list_filters_with_single_date_bound() {
    let app = create_test_app().await;
    let editor = app.admin_token("editor@kangagam.id").await;
    let topic = app.create_topic(&editor, "Hewan").await;
    let today = Utc::now().date_naive();

    let (_, token) = app.onboard("Dewi", "081234567890", "Bandung").await;
    app.server
        .post("/api/visitor-logs")
        .add_header("Authorization", bearer(&token))
        .json(&json!({ "topic_id": topic["id"] }))
        .await
        .assert_status(StatusCode::CREATED);

    let list_visits = |from: Option<String>, to: Option<String>| {
        let mut request = app
            .server
            .get("/api/visitor-logs")
            .add_header("Authorization", bearer(&editor));
        if let Some(from) = from {
            request = request.add_query_param("from", from);
        }
        if let Some(to) = to {
            request = request.add_query_param("to", to);
        }
        request
    };

    let since_today = list_visits(Some(today.to_string()), None).await;
    since_today.assert_status_ok();
    assert_eq!(since_today.json::<Value>()["total"], 1);

    let since_tomorrow = list_visits(Some((today + Days::new(1)).to_string()), None).await;
    assert_eq!(since_tomorrow.json::<Value>()["total"], 0);

    let until_today = list_visits(None, Some(today.to_string())).await;
    until_today.assert_status_ok();
    assert_eq!(until_today.json::<Value>()["total"], 1);

    let until_yesterday = list_visits(None, Some((today - Days::new(1)).to_string())).await;
    assert_eq!(until_yesterday.json::<Value>()["total"], 0);
}

#[tokio::test]
async fn test_csv_export() {
    let app = create_test_app().await;
    let editor = app.admin_token("editor@kangagam.id").await;
    let topic = app.create_topic(&editor, "Hewan").await;

    let (_, token) = app
        .onboard("Siti, S.Pd", "081299998888", "Tasikmalaya")
        .await;
    app.server
        .post("/api/visitor-logs")
        .add_header("Authorization", bearer(&token))
        .json(&json!({ "topic_id": topic["id"] }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = app
        .server
        .get("/api/visitor-logs/export")
        .add_header("Authorization", bearer(&editor))
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "text/csv; charset=utf-8");
    let disposition = response.header("content-disposition");
    assert!(disposition.to_str().unwrap().starts_with("attachment; filename=\"visitor-logs_"));

    let body = response.text();
    let lines: Vec<&str> = body.split("\r\n").filter(|line| !line.is_empty()).collect();
    assert_eq!(
        lines[0],
        "visited_at,learner_name,learner_phone,learner_city,topic_id,topic_name_id,topic_name_su,topic_name_en"
    );
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("\"Siti, S.Pd\",+6281299998888,Tasikmalaya"));
    assert!(lines[1].ends_with("Hewan,Hewan (su),Hewan (en)"));
}

#[tokio::test]
async fn test_deleting_learner_removes_visits() {
    let app = create_test_app().await;
    let root = app.superadmin_token().await;
    let topic = app.create_topic(&root, "Hewan").await;

    let (learner_id, token) = app.onboard("Dewi", "081234567890", "Bandung").await;
    app.server
        .post("/api/visitor-logs")
        .add_header("Authorization", bearer(&token))
        .json(&json!({ "topic_id": topic["id"] }))
        .await
        .assert_status(StatusCode::CREATED);

    app.server
        .delete(&format!("/api/learners/{}", learner_id))
        .add_header("Authorization", bearer(&root))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let visits = app
        .server
        .get("/api/visitor-logs")
        .add_header("Authorization", bearer(&root))
        .await
        .json::<Value>();
    assert_eq!(visits["total"], 0);
}
