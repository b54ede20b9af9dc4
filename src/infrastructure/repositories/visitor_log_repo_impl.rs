// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::visitor_log::VisitorLog;
use crate::domain::repositories::errors::RepositoryError;
use crate::domain::repositories::visitor_log_repository::{
    TimeRange, VisitorLogQuery, VisitorLogRepository,
};
use crate::infrastructure::database::entities::visitor_log;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 访问记录仓库实现
#[derive(Clone)]
pub struct VisitorLogRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl VisitorLogRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn in_range(range: TimeRange) -> Condition {
    Condition::all()
        .add(visitor_log::Column::VisitedAt.gte(range.start.fixed_offset()))
        .add(visitor_log::Column::VisitedAt.lt(range.end.fixed_offset()))
}

impl From<visitor_log::Model> for VisitorLog {
    fn from(model: visitor_log::Model) -> Self {
        Self {
            id: model.id,
            learner_id: model.learner_id,
            topic_id: model.topic_id,
            visited_at: model.visited_at.into(),
        }
    }
}

#[async_trait]
impl VisitorLogRepository for VisitorLogRepositoryImpl {
    async fn create(&self, log: &VisitorLog) -> Result<VisitorLog, RepositoryError> {
        let model = visitor_log::ActiveModel {
            id: Set(log.id),
            learner_id: Set(log.learner_id),
            topic_id: Set(log.topic_id),
            visited_at: Set(log.visited_at.into()),
        };

        Ok(model.insert(self.db.as_ref()).await?.into())
    }

    async fn query(
        &self,
        query: VisitorLogQuery,
    ) -> Result<(Vec<VisitorLog>, u64), RepositoryError> {
        let mut select = visitor_log::Entity::find();

        if let Some(since) = query.since {
            select = select.filter(visitor_log::Column::VisitedAt.gte(since.fixed_offset()));
        }
        if let Some(until) = query.until {
            select = select.filter(visitor_log::Column::VisitedAt.lt(until.fixed_offset()));
        }
        if let Some(topic_id) = query.topic_id {
            select = select.filter(visitor_log::Column::TopicId.eq(topic_id));
        }
        if let Some(learner_id) = query.learner_id {
            select = select.filter(visitor_log::Column::LearnerId.eq(learner_id));
        }

        let total = select.clone().count(self.db.as_ref()).await?;
        let models = select
            .order_by_desc(visitor_log::Column::VisitedAt)
            .offset(query.page.offset)
            .limit(query.page.limit)
            .all(self.db.as_ref())
            .await?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }

    async fn list_in_range(&self, range: TimeRange) -> Result<Vec<VisitorLog>, RepositoryError> {
        let models = visitor_log::Entity::find()
            .filter(in_range(range))
            .order_by_asc(visitor_log::Column::VisitedAt)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count_by_topic(&self, range: TimeRange) -> Result<Vec<(Uuid, u64)>, RepositoryError> {
        let rows: Vec<(Uuid, i64)> = visitor_log::Entity::find()
            .select_only()
            .column(visitor_log::Column::TopicId)
            .column_as(visitor_log::Column::Id.count(), "visits")
            .filter(in_range(range))
            .group_by(visitor_log::Column::TopicId)
            .into_tuple()
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(topic_id, visits)| (topic_id, visits.max(0) as u64))
            .collect())
    }

    async fn count_in_range(&self, range: TimeRange) -> Result<u64, RepositoryError> {
        Ok(visitor_log::Entity::find()
            .filter(in_range(range))
            .count(self.db.as_ref())
            .await?)
    }
}
