// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RecordVisitRequest {
    pub topic_id: Uuid,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct VisitorLogListQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub topic_id: Option<Uuid>,
    pub learner_id: Option<Uuid>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// 统计与导出共用的日期区间参数
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct DateRangeQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// CSV 导出结果
#[derive(Debug, Serialize)]
pub struct CsvReport {
    pub filename: String,
    pub rows: usize,
    #[serde(skip)]
    pub body: String,
}
