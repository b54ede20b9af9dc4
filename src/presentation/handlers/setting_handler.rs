// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::application::dto::setting_dto::UpdateSettingRequest;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::auth_user::SuperAdminUser;
use crate::presentation::routes::AppState;

pub async fn list_settings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.settings.list().await?))
}

/// 新增或更新一个站点设置
pub async fn put_setting(
    State(state): State<AppState>,
    SuperAdminUser(user): SuperAdminUser,
    Path(key): Path<String>,
    Json(payload): Json<UpdateSettingRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.settings.put(&user.actor(), &key, payload).await?))
}
