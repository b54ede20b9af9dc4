// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;

/// 健康检查测试
///
/// 验证健康检查端点是否正常工作
#[tokio::test]
async fn health_check_works() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");

    let version = app.server.get("/api/version").await;
    version.assert_text(env!("CARGO_PKG_VERSION"));
}

/// 受保护端点在没有令牌时返回401
#[tokio::test]
async fn protected_endpoints_return_401_without_token() {
    let app = create_test_app().await;

    for path in ["/api/admins/me", "/api/dashboard/stats", "/api/visitor-logs"] {
        let response = app.server.get(path).expect_failure().await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED, "{}", path);
    }

    let response = app
        .server
        .post("/api/topics")
        .add_header("Authorization", "Bearer not-a-jwt")
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
