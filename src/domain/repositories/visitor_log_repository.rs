// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::{Page, RepositoryError};
use crate::domain::models::visitor_log::VisitorLog;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 半开时间区间 `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// 访问记录查询参数
///
/// 时间过滤的两端可以各自缺省，`until` 不包含在内
#[derive(Debug, Clone, Default)]
pub struct VisitorLogQuery {
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
    pub topic_id: Option<Uuid>,
    pub learner_id: Option<Uuid>,
    pub page: Page,
}

/// 访问记录仓库特质
#[async_trait]
pub trait VisitorLogRepository: Send + Sync {
    async fn create(&self, log: &VisitorLog) -> Result<VisitorLog, RepositoryError>;
    /// 按访问时间倒序分页查询
    async fn query(&self, query: VisitorLogQuery)
        -> Result<(Vec<VisitorLog>, u64), RepositoryError>;
    /// 区间内的全部记录，按访问时间正序
    async fn list_in_range(&self, range: TimeRange) -> Result<Vec<VisitorLog>, RepositoryError>;
    /// 区间内每个主题的访问次数
    async fn count_by_topic(&self, range: TimeRange) -> Result<Vec<(Uuid, u64)>, RepositoryError>;
    async fn count_in_range(&self, range: TimeRange) -> Result<u64, RepositoryError>;
}
