// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::application::dto::visitor_dto::{
    DateRangeQuery, RecordVisitRequest, VisitorLogListQuery,
};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::auth_user::{AdminUser, LearnerUser};
use crate::presentation::routes::AppState;

/// 记录当前学习者的一次主题访问
pub async fn record_visit(
    State(state): State<AppState>,
    LearnerUser(user): LearnerUser,
    Json(payload): Json<RecordVisitRequest>,
) -> Result<impl IntoResponse, AppError> {
    let log = state.visitor_logs.record(&user.actor(), payload).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

pub async fn list_visits(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    Query(query): Query<VisitorLogListQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.visitor_logs.list(query).await?))
}

/// 以CSV附件形式导出访问记录
///
/// # 参数
///
/// * `query` - 可选的起止日期，缺省为最近30天
pub async fn export_visits(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let report = state
        .visitor_logs
        .export(query, Utc::now().date_naive())
        .await?;

    let disposition = format!("attachment; filename=\"{}\"", report.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.body,
    ))
}
