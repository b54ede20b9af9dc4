// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use kang_agam::config::settings::Settings;
use kang_agam::domain::repositories::storage_repository::StorageRepository;
use kang_agam::infrastructure::database::connection;
use kang_agam::infrastructure::storage::InMemoryStorage;
use kang_agam::presentation::routes::{self, AppState};
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use std::sync::Arc;

pub const SUPERADMIN_EMAIL: &str = "root@kangagam.id";
pub const SUPERADMIN_PASSWORD: &str = "super-secret-1";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub storage: InMemoryStorage,
}

/// 测试配置：内存数据库、内存存储、关闭指标导出
pub fn test_settings() -> Settings {
    let mut settings = Settings::defaults().expect("default settings");
    settings.database.url = "sqlite::memory:".to_string();
    settings.auth.jwt_secret = "integration-test-secret".to_string();
    settings.bootstrap.superadmin_email = Some(SUPERADMIN_EMAIL.to_string());
    settings.bootstrap.superadmin_password = Some(SUPERADMIN_PASSWORD.to_string());
    settings.storage.storage_type = "memory".to_string();
    settings.storage.public_base_url = "http://localhost/api/media".to_string();
    settings.uploads.max_bytes = 4 * 1024;
    settings.rate_limiting.login_attempts_per_minute = 1000;
    settings.metrics.enabled = false;
    settings
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with(test_settings()).await
}

pub async fn create_test_app_with(settings: Settings) -> TestApp {
    kang_agam::utils::telemetry::try_init_telemetry();

    let db = connection::connect_and_migrate(&settings.database)
        .await
        .expect("migrated database");
    let storage = InMemoryStorage::default();
    let storage_repo: Arc<dyn StorageRepository> = Arc::new(storage.clone());

    let state = AppState::new(Arc::new(db), storage_repo, &settings);
    state
        .admins
        .ensure_superadmin(&settings.bootstrap)
        .await
        .expect("bootstrap superadmin");

    let app = routes::routes(state.clone(), &settings.cors);
    let server = TestServer::new(app).expect("test server");

    TestApp {
        server,
        state,
        storage,
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// 按上传接口的规则为 `name` 生成内容寻址媒体键
pub fn media_key(kind: &str, name: &str, ext: &str) -> String {
    format!("{}/{}.{}", kind, hex::encode(Sha256::digest(name.as_bytes())), ext)
}

impl TestApp {
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .server
            .post("/api/admins/login")
            .json(&json!({ "email": email, "password": password }))
            .await;
        response.assert_status_ok();
        response.json::<Value>()["token"]
            .as_str()
            .expect("token")
            .to_string()
    }

    pub async fn superadmin_token(&self) -> String {
        self.login(SUPERADMIN_EMAIL, SUPERADMIN_PASSWORD).await
    }

    /// 创建普通管理员并返回其令牌
    pub async fn admin_token(&self, email: &str) -> String {
        let root = self.superadmin_token().await;
        let response = self
            .server
            .post("/api/admins")
            .add_header("Authorization", bearer(&root))
            .json(&json!({
                "name": "Editor",
                "email": email,
                "password": "editor-pass-1",
                "role": "admin"
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        self.login(email, "editor-pass-1").await
    }

    pub async fn create_topic(&self, token: &str, name_id: &str) -> Value {
        let response = self
            .server
            .post("/api/topics")
            .add_header("Authorization", bearer(token))
            .json(&json!({
                "name": {
                    "id": name_id,
                    "su": format!("{} (su)", name_id),
                    "en": format!("{} (en)", name_id)
                },
                "description": { "id": "Deskripsi" }
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()
    }

    pub async fn create_entry(
        &self,
        token: &str,
        topic_id: &str,
        word: [&str; 3],
        audio: Value,
    ) -> Value {
        let response = self
            .server
            .post("/api/entries")
            .add_header("Authorization", bearer(token))
            .json(&json!({
                "topic_id": topic_id,
                "word": { "id": word[0], "su": word[1], "en": word[2] },
                "audio": audio
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()
    }

    /// 学习者引导，返回 (学习者ID, 令牌)
    pub async fn onboard(&self, name: &str, phone: &str, city: &str) -> (String, String) {
        let response = self
            .server
            .post("/api/learners")
            .json(&json!({ "name": name, "phone": phone, "city": city }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let body = response.json::<Value>();
        (
            body["learner"]["id"].as_str().expect("learner id").to_string(),
            body["token"].as_str().expect("token").to_string(),
        )
    }
}
