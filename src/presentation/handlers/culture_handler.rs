// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::application::dto::culture_dto::{CultureEntryRequest, CultureTopicRequest};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::auth_user::AdminUser;
use crate::presentation::routes::AppState;

pub async fn list_culture_topics(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.culture.list_topics().await?))
}

pub async fn get_culture_topic(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.culture.get_topic(id).await?))
}

pub async fn list_culture_topic_entries(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.culture.list_entries(id).await?))
}

pub async fn create_culture_topic(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Json(payload): Json<CultureTopicRequest>,
) -> Result<impl IntoResponse, AppError> {
    let topic = state.culture.create_topic(&user.actor(), payload).await?;
    Ok((StatusCode::CREATED, Json(topic)))
}

pub async fn update_culture_topic(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CultureTopicRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(
        state.culture.update_topic(&user.actor(), id, payload).await?,
    ))
}

/// 删除文化主题（仅超级管理员），同时删除其下的文章
pub async fn delete_culture_topic(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.culture.delete_topic(&user.actor(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_culture_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.culture.get_entry(id).await?))
}

pub async fn create_culture_entry(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Json(payload): Json<CultureEntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state.culture.create_entry(&user.actor(), payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update_culture_entry(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CultureEntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(
        state.culture.update_entry(&user.actor(), id, payload).await?,
    ))
}

pub async fn delete_culture_entry(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.culture.delete_entry(&user.actor(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
