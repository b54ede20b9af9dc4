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

use crate::application::dto::topic_dto::{EntryRequest, EntrySearchQuery};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::auth_user::AdminUser;
use crate::presentation::routes::AppState;

/// 词典搜索
///
/// 未指定 `lang` 时在印尼语、巽他语和英语中同时匹配
pub async fn search_entries(
    State(state): State<AppState>,
    Query(query): Query<EntrySearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.entries.search(query).await?))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.entries.get(id).await?))
}

pub async fn create_entry(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Json(payload): Json<EntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state.entries.create(&user.actor(), payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update_entry(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<EntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.entries.update(&user.actor(), id, payload).await?))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.entries.delete(&user.actor(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
