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

use crate::application::dto::admin_dto::{
    CreateAdminRequest, LoginRequest, UpdateAdminRequest, UpdateProfileRequest,
};
use crate::application::dto::pagination::ListParams;
use crate::application::use_cases::errors::UseCaseError;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::auth_user::{AdminUser, SuperAdminUser};
use crate::presentation::routes::AppState;

/// 管理员登录
///
/// 登录尝试按邮箱限流，超出配额时返回 429
///
/// # 参数
///
/// * `state` - 应用状态
/// * `payload` - 邮箱与密码
///
/// # 返回值
///
/// 返回访问令牌及管理员信息
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .login_limiter
        .check(&payload.email)
        .map_err(|e| UseCaseError::TooManyRequests(e.to_string()))?;

    let response = state.admins.login(payload).await?;
    Ok(Json(response))
}

/// 获取当前管理员资料
pub async fn me(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.admins.me(&user.actor()).await?))
}

/// 更新当前管理员的姓名或密码
pub async fn update_me(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(
        state.admins.update_profile(&user.actor(), payload).await?,
    ))
}

pub async fn list_admins(
    State(state): State<AppState>,
    SuperAdminUser(user): SuperAdminUser,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.admins.list(&user.actor(), params).await?))
}

/// 创建管理员账号，重复邮箱返回 409
pub async fn create_admin(
    State(state): State<AppState>,
    SuperAdminUser(user): SuperAdminUser,
    Json(payload): Json<CreateAdminRequest>,
) -> Result<impl IntoResponse, AppError> {
    let admin = state.admins.create(&user.actor(), payload).await?;
    Ok((StatusCode::CREATED, Json(admin)))
}

pub async fn update_admin(
    State(state): State<AppState>,
    SuperAdminUser(user): SuperAdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAdminRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.admins.update(&user.actor(), id, payload).await?))
}

pub async fn delete_admin(
    State(state): State<AppState>,
    SuperAdminUser(user): SuperAdminUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.admins.delete(&user.actor(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
