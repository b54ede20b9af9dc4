// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::common::{ensure_deleted, map_write_error};
use crate::domain::models::culture::{CultureEntry, CultureTopic};
use crate::domain::models::localized::LocalizedText;
use crate::domain::repositories::culture_repository::CultureRepository;
use crate::domain::repositories::errors::RepositoryError;
use crate::infrastructure::database::entities::{culture_entry, culture_topic};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 文化内容仓库实现
#[derive(Clone)]
pub struct CultureRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CultureRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<culture_topic::Model> for CultureTopic {
    fn from(model: culture_topic::Model) -> Self {
        Self {
            id: model.id,
            name: LocalizedText::new(model.name_id, model.name_su, model.name_en),
            image_key: model.image_key,
            created_by: model.created_by,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<culture_entry::Model> for CultureEntry {
    fn from(model: culture_entry::Model) -> Self {
        Self {
            id: model.id,
            culture_topic_id: model.culture_topic_id,
            title: LocalizedText::new(model.title_id, model.title_su, model.title_en),
            content: LocalizedText::new(model.content_id, model.content_su, model.content_en),
            image_key: model.image_key,
            video_url: model.video_url,
            created_by: model.created_by,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

fn topic_active_model(topic: &CultureTopic) -> culture_topic::ActiveModel {
    culture_topic::ActiveModel {
        id: Set(topic.id),
        name_id: Set(topic.name.id.clone()),
        name_su: Set(topic.name.su.clone()),
        name_en: Set(topic.name.en.clone()),
        image_key: Set(topic.image_key.clone()),
        created_by: Set(topic.created_by),
        created_at: Set(topic.created_at.into()),
        updated_at: Set(topic.updated_at.into()),
    }
}

fn entry_active_model(entry: &CultureEntry) -> culture_entry::ActiveModel {
    culture_entry::ActiveModel {
        id: Set(entry.id),
        culture_topic_id: Set(entry.culture_topic_id),
        title_id: Set(entry.title.id.clone()),
        title_su: Set(entry.title.su.clone()),
        title_en: Set(entry.title.en.clone()),
        content_id: Set(entry.content.id.clone()),
        content_su: Set(entry.content.su.clone()),
        content_en: Set(entry.content.en.clone()),
        image_key: Set(entry.image_key.clone()),
        video_url: Set(entry.video_url.clone()),
        created_by: Set(entry.created_by),
        created_at: Set(entry.created_at.into()),
        updated_at: Set(entry.updated_at.into()),
    }
}

#[async_trait]
impl CultureRepository for CultureRepositoryImpl {
    async fn create_topic(&self, topic: &CultureTopic) -> Result<CultureTopic, RepositoryError> {
        let model = topic_active_model(topic)
            .insert(self.db.as_ref())
            .await
            .map_err(map_write_error)?;
        Ok(model.into())
    }

    async fn find_topic(&self, id: Uuid) -> Result<Option<CultureTopic>, RepositoryError> {
        let model = culture_topic::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list_topics(&self) -> Result<Vec<CultureTopic>, RepositoryError> {
        let models = culture_topic::Entity::find()
            .order_by_asc(culture_topic::Column::NameId)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update_topic(&self, topic: &CultureTopic) -> Result<CultureTopic, RepositoryError> {
        let mut model = topic_active_model(topic);
        model.id = Unchanged(topic.id);
        model.created_by = NotSet;
        model.created_at = NotSet;

        let updated = model
            .update(self.db.as_ref())
            .await
            .map_err(map_write_error)?;
        Ok(updated.into())
    }

    async fn delete_topic_cascade(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let txn = self.db.begin().await?;

        let entries = culture_entry::Entity::delete_many()
            .filter(culture_entry::Column::CultureTopicId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;
        let result = culture_topic::Entity::delete_by_id(id).exec(&txn).await?;
        ensure_deleted(result.rows_affected)?;

        txn.commit().await?;
        Ok(entries)
    }

    async fn count_topics(&self) -> Result<u64, RepositoryError> {
        Ok(culture_topic::Entity::find().count(self.db.as_ref()).await?)
    }

    async fn create_entry(&self, entry: &CultureEntry) -> Result<CultureEntry, RepositoryError> {
        let model = entry_active_model(entry)
            .insert(self.db.as_ref())
            .await
            .map_err(map_write_error)?;
        Ok(model.into())
    }

    async fn find_entry(&self, id: Uuid) -> Result<Option<CultureEntry>, RepositoryError> {
        let model = culture_entry::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list_entries(
        &self,
        culture_topic_id: Uuid,
    ) -> Result<Vec<CultureEntry>, RepositoryError> {
        let models = culture_entry::Entity::find()
            .filter(culture_entry::Column::CultureTopicId.eq(culture_topic_id))
            .order_by_asc(culture_entry::Column::TitleId)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update_entry(&self, entry: &CultureEntry) -> Result<CultureEntry, RepositoryError> {
        let mut model = entry_active_model(entry);
        model.id = Unchanged(entry.id);
        model.created_by = NotSet;
        model.created_at = NotSet;

        let updated = model
            .update(self.db.as_ref())
            .await
            .map_err(map_write_error)?;
        Ok(updated.into())
    }

    async fn delete_entry(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = culture_entry::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        ensure_deleted(result.rows_affected)
    }

    async fn count_entries(&self) -> Result<u64, RepositoryError> {
        Ok(culture_entry::Entity::find().count(self.db.as_ref()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::common::test_db;
    use chrono::Utc;

    fn culture_topic(name: &str) -> CultureTopic {
        CultureTopic {
            id: Uuid::new_v4(),
            name: LocalizedText::new(name, name, name),
            image_key: None,
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn article(culture_topic_id: Uuid, title: &str) -> CultureEntry {
        CultureEntry {
            id: Uuid::new_v4(),
            culture_topic_id,
            title: LocalizedText::new(title, title, title),
            content: LocalizedText::new("Eusi", "Eusi", "Content"),
            image_key: None,
            video_url: None,
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_delete_topic_cascade_removes_only_its_articles() {
        let repo = CultureRepositoryImpl::new(test_db().await);
        let tari = repo.create_topic(&culture_topic("Tari")).await.unwrap();
        let musik = repo.create_topic(&culture_topic("Musik")).await.unwrap();
        repo.create_entry(&article(tari.id, "Jaipong")).await.unwrap();
        repo.create_entry(&article(tari.id, "Ketuk Tilu")).await.unwrap();
        repo.create_entry(&article(musik.id, "Angklung")).await.unwrap();

        assert_eq!(repo.delete_topic_cascade(tari.id).await.unwrap(), 2);
        assert!(repo.find_topic(tari.id).await.unwrap().is_none());
        assert!(repo.list_entries(tari.id).await.unwrap().is_empty());
        assert_eq!(repo.list_entries(musik.id).await.unwrap().len(), 1);
        assert_eq!(repo.count_entries().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_topic_cascade_rolls_back_when_topic_is_missing() {
        let repo = CultureRepositoryImpl::new(test_db().await);
        let missing = Uuid::new_v4();
        repo.create_entry(&article(missing, "Wayang")).await.unwrap();

        assert!(matches!(
            repo.delete_topic_cascade(missing).await,
            Err(RepositoryError::NotFound)
        ));
        assert_eq!(repo.list_entries(missing).await.unwrap().len(), 1);
    }
}
