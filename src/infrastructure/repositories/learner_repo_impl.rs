// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::common::{contains_ignore_case, ensure_deleted};
use crate::domain::models::learner::Learner;
use crate::domain::repositories::errors::RepositoryError;
use crate::domain::repositories::learner_repository::{LearnerQuery, LearnerRepository};
use crate::infrastructure::database::entities::{learner, visitor_log};
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 学习者仓库实现
#[derive(Clone)]
pub struct LearnerRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl LearnerRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn filtered(query: &LearnerQuery) -> Select<learner::Entity> {
        let mut select = learner::Entity::find();

        if let Some(search) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            select = select.filter(
                Condition::any()
                    .add(contains_ignore_case(learner::Column::Name, search))
                    .add(contains_ignore_case(learner::Column::Phone, search))
                    .add(contains_ignore_case(learner::Column::City, search)),
            );
        }

        if let Some(city) = query.city.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            select = select.filter(
                Expr::expr(Func::lower(Expr::col(learner::Column::City))).eq(city.to_lowercase()),
            );
        }

        select
    }
}

impl From<learner::Model> for Learner {
    fn from(model: learner::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            phone: model.phone,
            city: model.city,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

#[async_trait]
impl LearnerRepository for LearnerRepositoryImpl {
    async fn create(&self, learner: &Learner) -> Result<Learner, RepositoryError> {
        let model = learner::ActiveModel {
            id: Set(learner.id),
            name: Set(learner.name.clone()),
            phone: Set(learner.phone.clone()),
            city: Set(learner.city.clone()),
            created_at: Set(learner.created_at.into()),
            updated_at: Set(learner.updated_at.into()),
        };

        Ok(model.insert(self.db.as_ref()).await?.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Learner>, RepositoryError> {
        let model = learner::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Learner>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = learner::Entity::find()
            .filter(learner::Column::Id.is_in(ids.to_vec()))
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list(&self, query: LearnerQuery) -> Result<(Vec<Learner>, u64), RepositoryError> {
        let select = Self::filtered(&query);
        let total = select.clone().count(self.db.as_ref()).await?;

        let models = select
            .order_by_desc(learner::Column::CreatedAt)
            .offset(query.page.offset)
            .limit(query.page.limit)
            .all(self.db.as_ref())
            .await?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }

    async fn delete_cascade(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let txn = self.db.begin().await?;

        let visits = visitor_log::Entity::delete_many()
            .filter(visitor_log::Column::LearnerId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;
        let result = learner::Entity::delete_by_id(id).exec(&txn).await?;
        ensure_deleted(result.rows_affected)?;

        txn.commit().await?;
        Ok(visits)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(learner::Entity::find().count(self.db.as_ref()).await?)
    }

    async fn cities(&self) -> Result<Vec<String>, RepositoryError> {
        Ok(learner::Entity::find()
            .select_only()
            .column(learner::Column::City)
            .order_by_asc(learner::Column::CreatedAt)
            .into_tuple::<String>()
            .all(self.db.as_ref())
            .await?)
    }
}
