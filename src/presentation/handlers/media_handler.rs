// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::debug;

use crate::presentation::errors::AppError;
use crate::presentation::extractors::auth_user::AdminUser;
use crate::presentation::routes::AppState;

/// 上传表单中文件字段的名称
pub const FILE_FIELD: &str = "file";

/// 上传媒体文件
///
/// 读取 multipart 表单中的 `file` 字段，内容类型取自该字段的 Content-Type
///
/// # 返回值
///
/// 返回对象键、公开URL、内容类型和大小
pub async fn upload_media(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::bad_request(format!("Failed to read upload: {}", e)))?;

        debug!(
            "Admin {} uploading {} bytes of {}",
            user.id,
            data.len(),
            content_type
        );
        let response = state.media.upload(&data, &content_type).await?;
        return Ok((StatusCode::CREATED, Json(response)));
    }

    Err(AppError::bad_request(format!(
        "Missing multipart field '{}'",
        FILE_FIELD
    )))
}

/// 读取媒体文件，内容类型由扩展名推断
pub async fn get_media(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let content = state.media.get(&key).await?;
    Ok((
        [
            (header::CONTENT_TYPE, content.content_type),
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
        ],
        content.data,
    ))
}
