// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::common::{ensure_deleted, map_write_error};
use crate::domain::models::localized::{LocalizedText, OptionalLocalizedText};
use crate::domain::models::topic::Topic;
use crate::domain::repositories::errors::RepositoryError;
use crate::domain::repositories::topic_repository::{TopicRemoval, TopicRepository};
use crate::infrastructure::database::entities::{entry, topic, visitor_log};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 主题仓库实现
#[derive(Clone)]
pub struct TopicRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<topic::Model> for Topic {
    fn from(model: topic::Model) -> Self {
        Self {
            id: model.id,
            name: LocalizedText::new(model.name_id, model.name_su, model.name_en),
            description: OptionalLocalizedText {
                id: model.description_id,
                su: model.description_su,
                en: model.description_en,
            },
            image_key: model.image_key,
            sort_order: model.sort_order,
            created_by: model.created_by,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

fn to_active_model(topic: &Topic) -> topic::ActiveModel {
    topic::ActiveModel {
        id: Set(topic.id),
        name_id: Set(topic.name.id.clone()),
        name_su: Set(topic.name.su.clone()),
        name_en: Set(topic.name.en.clone()),
        description_id: Set(topic.description.id.clone()),
        description_su: Set(topic.description.su.clone()),
        description_en: Set(topic.description.en.clone()),
        image_key: Set(topic.image_key.clone()),
        sort_order: Set(topic.sort_order),
        created_by: Set(topic.created_by),
        created_at: Set(topic.created_at.into()),
        updated_at: Set(topic.updated_at.into()),
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryImpl {
    async fn create(&self, topic: &Topic) -> Result<Topic, RepositoryError> {
        let model = to_active_model(topic)
            .insert(self.db.as_ref())
            .await
            .map_err(map_write_error)?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Topic>, RepositoryError> {
        let model = topic::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<Topic>, RepositoryError> {
        let models = topic::Entity::find()
            .order_by_asc(topic::Column::SortOrder)
            .order_by_asc(topic::Column::NameId)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, topic: &Topic) -> Result<Topic, RepositoryError> {
        let mut model = to_active_model(topic);
        model.id = Unchanged(topic.id);
        // Ownership and creation time never change
        model.created_by = NotSet;
        model.created_at = NotSet;

        let updated = model
            .update(self.db.as_ref())
            .await
            .map_err(map_write_error)?;
        Ok(updated.into())
    }

    async fn delete_cascade(&self, id: Uuid) -> Result<TopicRemoval, RepositoryError> {
        let txn = self.db.begin().await?;

        let entries = entry::Entity::delete_many()
            .filter(entry::Column::TopicId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;
        let visits = visitor_log::Entity::delete_many()
            .filter(visitor_log::Column::TopicId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;
        let result = topic::Entity::delete_by_id(id).exec(&txn).await?;
        // Dropping the transaction without commit rolls the child deletes back
        ensure_deleted(result.rows_affected)?;

        txn.commit().await?;
        Ok(TopicRemoval { entries, visits })
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(topic::Entity::find().count(self.db.as_ref()).await?)
    }
}
