// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::UseCaseError;
use crate::application::dto::dashboard_dto::{DashboardStats, Totals};
use crate::application::dto::visitor_dto::DateRangeQuery;
use crate::domain::repositories::admin_repository::AdminRepository;
use crate::domain::repositories::culture_repository::CultureRepository;
use crate::domain::repositories::entry_repository::EntryRepository;
use crate::domain::repositories::learner_repository::LearnerRepository;
use crate::domain::repositories::topic_repository::TopicRepository;
use crate::domain::repositories::visitor_log_repository::VisitorLogRepository;
use crate::domain::services::statistics_service::{DateRange, StatisticsService};
use chrono::NaiveDate;
use std::sync::Arc;

/// 仪表盘统计用例
///
/// 汇总各类记录的总数，并把区间内的访问记录聚合为按主题、按天、按城市的图表数据
pub struct DashboardUseCase {
    admins: Arc<dyn AdminRepository>,
    learners: Arc<dyn LearnerRepository>,
    topics: Arc<dyn TopicRepository>,
    entries: Arc<dyn EntryRepository>,
    culture: Arc<dyn CultureRepository>,
    visitor_logs: Arc<dyn VisitorLogRepository>,
}

impl DashboardUseCase {
    pub fn new(
        admins: Arc<dyn AdminRepository>,
        learners: Arc<dyn LearnerRepository>,
        topics: Arc<dyn TopicRepository>,
        entries: Arc<dyn EntryRepository>,
        culture: Arc<dyn CultureRepository>,
        visitor_logs: Arc<dyn VisitorLogRepository>,
    ) -> Self {
        Self {
            admins,
            learners,
            topics,
            entries,
            culture,
            visitor_logs,
        }
    }

    pub async fn stats(
        &self,
        query: DateRangeQuery,
        today: NaiveDate,
    ) -> Result<DashboardStats, UseCaseError> {
        let range = DateRange::resolve(query.from, query.to, today)?;
        let window = range.to_time_range();

        let totals = Totals {
            admins: self.admins.count().await?,
            learners: self.learners.count().await?,
            topics: self.topics.count().await?,
            entries: self.entries.count().await?,
            culture_topics: self.culture.count_topics().await?,
            culture_entries: self.culture.count_entries().await?,
            visits: self.visitor_logs.count_in_range(window).await?,
        };

        let topics = self.topics.list_all().await?;
        let topic_counts = self.visitor_logs.count_by_topic(window).await?;
        let visits = self.visitor_logs.list_in_range(window).await?;
        let cities = self.learners.cities().await?;

        Ok(DashboardStats {
            range,
            totals,
            visits_by_topic: StatisticsService::rank_topics(&topics, &topic_counts),
            visits_by_day: StatisticsService::daily_series(
                &range,
                visits.into_iter().map(|log| log.visited_at),
            ),
            learners_by_city: StatisticsService::city_breakdown(cities),
        })
    }
}
