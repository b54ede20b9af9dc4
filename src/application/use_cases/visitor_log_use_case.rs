// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::UseCaseError;
use crate::application::dto::pagination::{ListParams, Paginated};
use crate::application::dto::visitor_dto::{
    CsvReport, DateRangeQuery, RecordVisitRequest, VisitorLogListQuery,
};
use crate::domain::models::learner::Learner;
use crate::domain::models::topic::Topic;
use crate::domain::models::visitor_log::VisitorLog;
use crate::domain::repositories::learner_repository::LearnerRepository;
use crate::domain::repositories::topic_repository::TopicRepository;
use crate::domain::repositories::visitor_log_repository::{
    VisitorLogQuery, VisitorLogRepository,
};
use crate::domain::services::access_policy::Actor;
use crate::domain::services::statistics_service::{DateRange, StatisticsError};
use crate::infrastructure::metrics;
use crate::utils::csv_export::CsvWriter;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, SecondsFormat, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

/// 导出CSV的表头
pub const EXPORT_HEADER: [&str; 8] = [
    "visited_at",
    "learner_name",
    "learner_phone",
    "learner_city",
    "topic_id",
    "topic_name_id",
    "topic_name_su",
    "topic_name_en",
];

/// 访问记录用例
pub struct VisitorLogUseCase {
    visitor_logs: Arc<dyn VisitorLogRepository>,
    learners: Arc<dyn LearnerRepository>,
    topics: Arc<dyn TopicRepository>,
}

impl VisitorLogUseCase {
    pub fn new(
        visitor_logs: Arc<dyn VisitorLogRepository>,
        learners: Arc<dyn LearnerRepository>,
        topics: Arc<dyn TopicRepository>,
    ) -> Self {
        Self {
            visitor_logs,
            learners,
            topics,
        }
    }

    /// 记录当前学习者对某个主题的一次访问
    pub async fn record(
        &self,
        actor: &Actor,
        request: RecordVisitRequest,
    ) -> Result<VisitorLog, UseCaseError> {
        if self.learners.find_by_id(actor.id).await?.is_none() {
            return Err(UseCaseError::not_found("Learner"));
        }
        if self.topics.find_by_id(request.topic_id).await?.is_none() {
            return Err(UseCaseError::not_found("Topic"));
        }

        let log = VisitorLog {
            id: Uuid::new_v4(),
            learner_id: actor.id,
            topic_id: request.topic_id,
            visited_at: Utc::now(),
        };
        let log = self.visitor_logs.create(&log).await?;
        metrics::record_visit();
        debug!("Learner {} visited topic {}", log.learner_id, log.topic_id);
        Ok(log)
    }

    /// 分页查询，最新的记录在前
    pub async fn list(
        &self,
        query: VisitorLogListQuery,
    ) -> Result<Paginated<VisitorLog>, UseCaseError> {
        query.validate()?;
        let page = ListParams {
            limit: query.limit,
            offset: query.offset,
        }
        .page();

        let (since, until) = day_bounds(query.from, query.to)?;
        let (logs, total) = self
            .visitor_logs
            .query(VisitorLogQuery {
                since,
                until,
                topic_id: query.topic_id,
                learner_id: query.learner_id,
                page,
            })
            .await?;
        Ok(Paginated::new(logs, total))
    }

    /// 导出区间内的访问记录为CSV，按访问时间正序
    pub async fn export(
        &self,
        query: DateRangeQuery,
        today: NaiveDate,
    ) -> Result<CsvReport, UseCaseError> {
        let range = DateRange::resolve(query.from, query.to, today)?;
        let logs = self.visitor_logs.list_in_range(range.to_time_range()).await?;

        let learner_ids: Vec<Uuid> = logs
            .iter()
            .map(|log| log.learner_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let learners: HashMap<Uuid, Learner> = self
            .learners
            .find_by_ids(&learner_ids)
            .await?
            .into_iter()
            .map(|learner| (learner.id, learner))
            .collect();
        let topics: HashMap<Uuid, Topic> = self
            .topics
            .list_all()
            .await?
            .into_iter()
            .map(|topic| (topic.id, topic))
            .collect();

        let mut writer = CsvWriter::with_header(&EXPORT_HEADER);
        for log in &logs {
            let visited_at = log.visited_at.to_rfc3339_opts(SecondsFormat::Secs, true);
            let topic_id = log.topic_id.to_string();
            let learner = learners.get(&log.learner_id);
            let topic = topics.get(&log.topic_id);

            writer.write_record([
                visited_at.as_str(),
                learner.map(|l| l.name.as_str()).unwrap_or_default(),
                learner.map(|l| l.phone.as_str()).unwrap_or_default(),
                learner.map(|l| l.city.as_str()).unwrap_or_default(),
                topic_id.as_str(),
                topic.map(|t| t.name.id.as_str()).unwrap_or_default(),
                topic.map(|t| t.name.su.as_str()).unwrap_or_default(),
                topic.map(|t| t.name.en.as_str()).unwrap_or_default(),
            ]);
        }

        let rows = logs.len();
        info!(
            "Exported {} visits between {} and {}",
            rows, range.from, range.to
        );
        Ok(CsvReport {
            filename: format!("visitor-logs_{}_{}.csv", range.from, range.to),
            rows,
            body: writer.finish(),
        })
    }
}

type DayBounds = (Option<DateTime<Utc>>, Option<DateTime<Utc>>);

/// 列表查询的时间过滤，起止日期都可以单独缺省
///
/// 返回 `[since, until)`，`until` 是 `to` 次日的零点
fn day_bounds(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<DayBounds, UseCaseError> {
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(StatisticsError::InvertedRange.into());
        }
    }

    let since = from.map(|day| day.and_time(NaiveTime::MIN).and_utc());
    let until = match to {
        Some(day) => Some(
            day.checked_add_days(Days::new(1))
                .ok_or_else(|| UseCaseError::Validation("'to' is out of range".to_string()))?
                .and_time(NaiveTime::MIN)
                .and_utc(),
        ),
        None => None,
    };
    Ok((since, until))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_bounds_cover_whole_days() {
        let from = NaiveDate::from_ymd_opt(2025, 3, 1);
        let to = NaiveDate::from_ymd_opt(2025, 3, 2);

        let (since, until) = day_bounds(from, to).unwrap();
        assert_eq!(since.unwrap().to_rfc3339(), "2025-03-01T00:00:00+00:00");
        assert_eq!(until.unwrap().to_rfc3339(), "2025-03-03T00:00:00+00:00");

        assert_eq!(day_bounds(None, None).unwrap(), (None, None));
        assert!(day_bounds(to, from).is_err());
    }

    #[test]
    fn test_day_bounds_leave_missing_side_open() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 1);

        let (since, until) = day_bounds(day, None).unwrap();
        assert!(since.is_some());
        assert!(until.is_none());

        let (since, until) = day_bounds(None, day).unwrap();
        assert!(since.is_none());
        assert_eq!(until.unwrap().to_rfc3339(), "2025-03-02T00:00:00+00:00");
    }
}
