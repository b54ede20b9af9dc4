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

use crate::application::dto::learner_dto::{LearnerListQuery, OnboardLearnerRequest};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::auth_user::{AdminUser, LearnerUser, SuperAdminUser};
use crate::presentation::routes::AppState;

/// 学习者引导
///
/// 公开端点，登记学习者并返回学习者令牌
pub async fn onboard(
    State(state): State<AppState>,
    Json(payload): Json<OnboardLearnerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.learners.onboard(payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn me(
    State(state): State<AppState>,
    LearnerUser(user): LearnerUser,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.learners.me(&user.actor()).await?))
}

pub async fn list_learners(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    Query(query): Query<LearnerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.learners.list(query).await?))
}

pub async fn get_learner(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.learners.get(id).await?))
}

/// 删除学习者及其访问记录
pub async fn delete_learner(
    State(state): State<AppState>,
    SuperAdminUser(user): SuperAdminUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.learners.delete(&user.actor(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
