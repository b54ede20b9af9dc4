// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::application::dto::playlist_dto::PlaylistQuery;
use crate::application::dto::topic_dto::TopicRequest;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::auth_user::AdminUser;
use crate::presentation::routes::AppState;

/// 列出所有主题及其词条数量
pub async fn list_topics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.topics.list().await?))
}

pub async fn get_topic(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.topics.get(id).await?))
}

pub async fn list_topic_entries(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.topics.entries(id).await?))
}

/// 生成主题的音频播放计划
///
/// # 参数
///
/// * `id` - 主题ID
/// * `query` - 播放模式、语言顺序、重复次数与随机种子
///
/// # 返回值
///
/// 返回按播放顺序排列的步骤列表
pub async fn topic_playlist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PlaylistQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.playlists.build(id, query).await?))
}

pub async fn create_topic(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Json(payload): Json<TopicRequest>,
) -> Result<impl IntoResponse, AppError> {
    let topic = state.topics.create(&user.actor(), payload).await?;
    Ok((StatusCode::CREATED, Json(topic)))
}

pub async fn update_topic(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<TopicRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.topics.update(&user.actor(), id, payload).await?))
}

/// 删除主题（仅超级管理员），同时删除其词条与访问记录
pub async fn delete_topic(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.topics.delete(&user.actor(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
