// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::application::dto::visitor_dto::DateRangeQuery;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::auth_user::AdminUser;
use crate::presentation::routes::AppState;

/// 仪表盘统计数据
///
/// 区间按UTC日历日计算，缺省为截至今天的最近30天
pub async fn dashboard_stats(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(
        state
            .dashboard
            .stats(query, Utc::now().date_naive())
            .await?,
    ))
}
