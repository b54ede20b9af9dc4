// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use kang_agam::config::settings::Settings;
use kang_agam::infrastructure::database::connection;
use kang_agam::infrastructure::metrics;
use kang_agam::infrastructure::storage::create_storage_repository;
use kang_agam::presentation::routes::{self, AppState};
use kang_agam::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting kang-agam {}...", env!("CARGO_PKG_VERSION"));

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");
    if settings.auth.jwt_secret == "change-me-in-production" {
        warn!("auth.jwt_secret uses the built-in default, set KANGAGAM__AUTH__JWT_SECRET");
    }

    metrics::init_metrics(&settings.metrics);

    // 3. Connect to database and apply migrations
    let db = Arc::new(connection::connect_and_migrate(&settings.database).await?);
    info!("Database ready");

    // 4. Storage backend for uploaded media
    let storage = create_storage_repository(&settings.storage)?;
    info!("Storage backend: {}", settings.storage.storage_type);

    // 5. Assemble use cases
    let state = AppState::new(db, storage, &settings);

    if let Some(admin) = state.admins.ensure_superadmin(&settings.bootstrap).await? {
        info!("Bootstrapped superadmin {}", admin.email);
    }

    // 6. Start HTTP server
    let app = routes::routes(state, &settings.cors);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
