// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::admin_use_case::AdminUseCase;
use crate::application::use_cases::culture_use_case::CultureUseCase;
use crate::application::use_cases::dashboard_use_case::DashboardUseCase;
use crate::application::use_cases::entry_use_case::EntryUseCase;
use crate::application::use_cases::learner_use_case::LearnerUseCase;
use crate::application::use_cases::media_use_case::MediaUseCase;
use crate::application::use_cases::playlist_use_case::PlaylistUseCase;
use crate::application::use_cases::setting_use_case::SettingUseCase;
use crate::application::use_cases::shared::MediaUrls;
use crate::application::use_cases::topic_use_case::TopicUseCase;
use crate::application::use_cases::visitor_log_use_case::VisitorLogUseCase;
use crate::config::settings::{CorsSettings, Settings};
use crate::domain::repositories::admin_repository::AdminRepository;
use crate::domain::repositories::culture_repository::CultureRepository;
use crate::domain::repositories::entry_repository::EntryRepository;
use crate::domain::repositories::learner_repository::LearnerRepository;
use crate::domain::repositories::setting_repository::SettingRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::domain::repositories::topic_repository::TopicRepository;
use crate::domain::repositories::visitor_log_repository::VisitorLogRepository;
use crate::domain::services::auth_service::TokenService;
use crate::infrastructure::repositories::admin_repo_impl::AdminRepositoryImpl;
use crate::infrastructure::repositories::culture_repo_impl::CultureRepositoryImpl;
use crate::infrastructure::repositories::entry_repo_impl::EntryRepositoryImpl;
use crate::infrastructure::repositories::learner_repo_impl::LearnerRepositoryImpl;
use crate::infrastructure::repositories::setting_repo_impl::SettingRepositoryImpl;
use crate::infrastructure::repositories::topic_repo_impl::TopicRepositoryImpl;
use crate::infrastructure::repositories::visitor_log_repo_impl::VisitorLogRepositoryImpl;
use crate::presentation::handlers::{
    admin_handler, culture_handler, dashboard_handler, entry_handler, learner_handler,
    media_handler, setting_handler, topic_handler, visitor_log_handler,
};
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use crate::presentation::middleware::rate_limit_middleware::RateLimiter;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

// Room for multipart boundaries and headers around the file itself
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// 应用状态
///
/// 所有处理器共享的用例实例，克隆开销只是若干 `Arc` 的引用计数
#[derive(Clone)]
pub struct AppState {
    pub admins: Arc<AdminUseCase>,
    pub learners: Arc<LearnerUseCase>,
    pub topics: Arc<TopicUseCase>,
    pub entries: Arc<EntryUseCase>,
    pub culture: Arc<CultureUseCase>,
    pub visitor_logs: Arc<VisitorLogUseCase>,
    pub dashboard: Arc<DashboardUseCase>,
    pub media: Arc<MediaUseCase>,
    pub playlists: Arc<PlaylistUseCase>,
    pub settings: Arc<SettingUseCase>,
    pub tokens: Arc<TokenService>,
    pub login_limiter: Arc<RateLimiter>,
    pub upload_max_bytes: usize,
}

impl AppState {
    /// 基于数据库连接和存储后端组装全部用例
    pub fn new(
        db: Arc<DatabaseConnection>,
        storage: Arc<dyn StorageRepository>,
        settings: &Settings,
    ) -> Self {
        let admin_repo: Arc<dyn AdminRepository> = Arc::new(AdminRepositoryImpl::new(db.clone()));
        let learner_repo: Arc<dyn LearnerRepository> =
            Arc::new(LearnerRepositoryImpl::new(db.clone()));
        let topic_repo: Arc<dyn TopicRepository> = Arc::new(TopicRepositoryImpl::new(db.clone()));
        let entry_repo: Arc<dyn EntryRepository> = Arc::new(EntryRepositoryImpl::new(db.clone()));
        let culture_repo: Arc<dyn CultureRepository> =
            Arc::new(CultureRepositoryImpl::new(db.clone()));
        let visitor_log_repo: Arc<dyn VisitorLogRepository> =
            Arc::new(VisitorLogRepositoryImpl::new(db.clone()));
        let setting_repo: Arc<dyn SettingRepository> = Arc::new(SettingRepositoryImpl::new(db));

        let tokens = Arc::new(TokenService::new(
            &settings.auth.jwt_secret,
            settings.auth.admin_token_ttl_minutes,
            settings.auth.learner_token_ttl_days,
        ));
        let urls = MediaUrls::new(settings.storage.public_base_url.clone());
        let upload_max_bytes = settings.uploads.max_bytes;

        Self {
            admins: Arc::new(AdminUseCase::new(admin_repo.clone(), tokens.clone())),
            learners: Arc::new(LearnerUseCase::new(learner_repo.clone(), tokens.clone())),
            topics: Arc::new(TopicUseCase::new(
                topic_repo.clone(),
                entry_repo.clone(),
                urls.clone(),
            )),
            entries: Arc::new(EntryUseCase::new(
                entry_repo.clone(),
                topic_repo.clone(),
                urls.clone(),
            )),
            culture: Arc::new(CultureUseCase::new(culture_repo.clone(), urls.clone())),
            visitor_logs: Arc::new(VisitorLogUseCase::new(
                visitor_log_repo.clone(),
                learner_repo.clone(),
                topic_repo.clone(),
            )),
            dashboard: Arc::new(DashboardUseCase::new(
                admin_repo,
                learner_repo,
                topic_repo.clone(),
                entry_repo.clone(),
                culture_repo,
                visitor_log_repo,
            )),
            media: Arc::new(MediaUseCase::new(storage, urls.clone(), upload_max_bytes)),
            playlists: Arc::new(PlaylistUseCase::new(topic_repo, entry_repo, urls)),
            settings: Arc::new(SettingUseCase::new(setting_repo)),
            tokens,
            login_limiter: Arc::new(RateLimiter::new(&settings.rate_limiting)),
            upload_max_bytes,
        }
    }
}

/// 创建应用路由
///
/// 公开的只读端点不经过认证中间件；其余端点要求有效的 Bearer 令牌，
/// 角色和归属检查由提取器和用例完成
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(state: AppState, cors: &CorsSettings) -> Router {
    let auth_state = AuthState {
        tokens: state.tokens.clone(),
    };

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/api/version", get(version))
        .route("/api/admins/login", post(admin_handler::login))
        .route("/api/learners", post(learner_handler::onboard))
        .route("/api/topics", get(topic_handler::list_topics))
        .route("/api/topics/{id}", get(topic_handler::get_topic))
        .route(
            "/api/topics/{id}/entries",
            get(topic_handler::list_topic_entries),
        )
        .route(
            "/api/topics/{id}/playlist",
            get(topic_handler::topic_playlist),
        )
        .route("/api/entries", get(entry_handler::search_entries))
        .route("/api/entries/{id}", get(entry_handler::get_entry))
        .route(
            "/api/culture-topics",
            get(culture_handler::list_culture_topics),
        )
        .route(
            "/api/culture-topics/{id}",
            get(culture_handler::get_culture_topic),
        )
        .route(
            "/api/culture-topics/{id}/entries",
            get(culture_handler::list_culture_topic_entries),
        )
        .route(
            "/api/culture-entries/{id}",
            get(culture_handler::get_culture_entry),
        )
        .route("/api/media/{*key}", get(media_handler::get_media))
        .route("/api/settings", get(setting_handler::list_settings));

    let protected_routes = Router::new()
        .route(
            "/api/admins/me",
            get(admin_handler::me).put(admin_handler::update_me),
        )
        .route(
            "/api/admins",
            get(admin_handler::list_admins).post(admin_handler::create_admin),
        )
        .route(
            "/api/admins/{id}",
            put(admin_handler::update_admin).delete(admin_handler::delete_admin),
        )
        .route("/api/learners/me", get(learner_handler::me))
        .route("/api/learners", get(learner_handler::list_learners))
        .route(
            "/api/learners/{id}",
            get(learner_handler::get_learner).delete(learner_handler::delete_learner),
        )
        .route("/api/topics", post(topic_handler::create_topic))
        .route(
            "/api/topics/{id}",
            put(topic_handler::update_topic).delete(topic_handler::delete_topic),
        )
        .route("/api/entries", post(entry_handler::create_entry))
        .route(
            "/api/entries/{id}",
            put(entry_handler::update_entry).delete(entry_handler::delete_entry),
        )
        .route(
            "/api/culture-topics",
            post(culture_handler::create_culture_topic),
        )
        .route(
            "/api/culture-topics/{id}",
            put(culture_handler::update_culture_topic)
                .delete(culture_handler::delete_culture_topic),
        )
        .route(
            "/api/culture-entries",
            post(culture_handler::create_culture_entry),
        )
        .route(
            "/api/culture-entries/{id}",
            put(culture_handler::update_culture_entry)
                .delete(culture_handler::delete_culture_entry),
        )
        .route(
            "/api/media",
            post(media_handler::upload_media).layer(DefaultBodyLimit::max(
                state.upload_max_bytes + MULTIPART_OVERHEAD,
            )),
        )
        .route(
            "/api/visitor-logs",
            get(visitor_log_handler::list_visits).post(visitor_log_handler::record_visit),
        )
        .route(
            "/api/visitor-logs/export",
            get(visitor_log_handler::export_visits),
        )
        .route(
            "/api/dashboard/stats",
            get(dashboard_handler::dashboard_stats),
        )
        .route("/api/settings/{key}", put(setting_handler::put_setting))
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
        .with_state(state)
}

/// 跨域配置，未配置来源时允许任意来源
fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if settings.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
