// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::{authorize, UseCaseError};
use super::shared::{optional_media_key, require_localized, MediaUrls};
use crate::application::dto::culture_dto::{
    CultureEntryRequest, CultureEntryResponse, CultureTopicRequest, CultureTopicResponse,
};
use crate::domain::models::culture::{CultureEntry, CultureTopic};
use crate::domain::repositories::culture_repository::CultureRepository;
use crate::domain::services::access_policy::{AccessPolicy, Actor};
use crate::utils::validators::validate_video_url;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// 文化内容用例
///
/// 权限规则与词汇主题相同：删除主题仅限超级管理员，文章由作者或超级管理员维护
pub struct CultureUseCase {
    culture: Arc<dyn CultureRepository>,
    urls: MediaUrls,
}

impl CultureUseCase {
    pub fn new(culture: Arc<dyn CultureRepository>, urls: MediaUrls) -> Self {
        Self { culture, urls }
    }

    fn topic_response(&self, topic: CultureTopic) -> CultureTopicResponse {
        CultureTopicResponse {
            image_url: self.urls.resolve(topic.image_key.as_deref()),
            topic,
        }
    }

    fn entry_response(&self, entry: CultureEntry) -> CultureEntryResponse {
        CultureEntryResponse {
            image_url: self.urls.resolve(entry.image_key.as_deref()),
            entry,
        }
    }

    async fn find_topic(&self, id: Uuid) -> Result<CultureTopic, UseCaseError> {
        self.culture
            .find_topic(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Culture topic"))
    }

    async fn find_entry(&self, id: Uuid) -> Result<CultureEntry, UseCaseError> {
        self.culture
            .find_entry(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Culture entry"))
    }

    pub async fn list_topics(&self) -> Result<Vec<CultureTopicResponse>, UseCaseError> {
        let topics = self.culture.list_topics().await?;
        Ok(topics.into_iter().map(|t| self.topic_response(t)).collect())
    }

    pub async fn get_topic(&self, id: Uuid) -> Result<CultureTopicResponse, UseCaseError> {
        Ok(self.topic_response(self.find_topic(id).await?))
    }

    pub async fn list_entries(
        &self,
        culture_topic_id: Uuid,
    ) -> Result<Vec<CultureEntryResponse>, UseCaseError> {
        self.find_topic(culture_topic_id).await?;
        let entries = self.culture.list_entries(culture_topic_id).await?;
        Ok(entries.into_iter().map(|e| self.entry_response(e)).collect())
    }

    pub async fn get_entry(&self, id: Uuid) -> Result<CultureEntryResponse, UseCaseError> {
        Ok(self.entry_response(self.find_entry(id).await?))
    }

    pub async fn create_topic(
        &self,
        actor: &Actor,
        request: CultureTopicRequest,
    ) -> Result<CultureTopicResponse, UseCaseError> {
        authorize(AccessPolicy::can_create_content(actor))?;

        let now = Utc::now();
        let topic = CultureTopic {
            id: Uuid::new_v4(),
            name: require_localized("name", &request.name)?,
            image_key: optional_media_key(request.image_key.as_deref())?,
            created_by: actor.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.culture.create_topic(&topic).await?;
        info!("Culture topic {} created by {}", created.id, actor.id);
        Ok(self.topic_response(created))
    }

    pub async fn update_topic(
        &self,
        actor: &Actor,
        id: Uuid,
        request: CultureTopicRequest,
    ) -> Result<CultureTopicResponse, UseCaseError> {
        let mut topic = self.find_topic(id).await?;
        authorize(AccessPolicy::can_modify(actor, topic.created_by))?;

        topic.name = require_localized("name", &request.name)?;
        topic.image_key = optional_media_key(request.image_key.as_deref())?;
        topic.updated_at = Utc::now();

        Ok(self.topic_response(self.culture.update_topic(&topic).await?))
    }

    pub async fn delete_topic(&self, actor: &Actor, id: Uuid) -> Result<(), UseCaseError> {
        authorize(AccessPolicy::can_delete_topic(actor))?;
        self.find_topic(id).await?;

        let removed = self.culture.delete_topic_cascade(id).await?;
        info!(
            "Culture topic {} deleted by {} ({} entries)",
            id, actor.id, removed
        );
        Ok(())
    }

    pub async fn create_entry(
        &self,
        actor: &Actor,
        request: CultureEntryRequest,
    ) -> Result<CultureEntryResponse, UseCaseError> {
        authorize(AccessPolicy::can_create_content(actor))?;
        self.find_topic(request.culture_topic_id).await?;

        let now = Utc::now();
        let entry = CultureEntry {
            id: Uuid::new_v4(),
            culture_topic_id: request.culture_topic_id,
            title: require_localized("title", &request.title)?,
            content: require_localized("content", &request.content)?,
            image_key: optional_media_key(request.image_key.as_deref())?,
            video_url: video_url(request.video_url.as_deref())?,
            created_by: actor.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.culture.create_entry(&entry).await?;
        info!("Culture entry {} created by {}", created.id, actor.id);
        Ok(self.entry_response(created))
    }

    pub async fn update_entry(
        &self,
        actor: &Actor,
        id: Uuid,
        request: CultureEntryRequest,
    ) -> Result<CultureEntryResponse, UseCaseError> {
        let mut entry = self.find_entry(id).await?;
        authorize(AccessPolicy::can_modify(actor, entry.created_by))?;

        if request.culture_topic_id != entry.culture_topic_id {
            self.find_topic(request.culture_topic_id).await?;
            entry.culture_topic_id = request.culture_topic_id;
        }
        entry.title = require_localized("title", &request.title)?;
        entry.content = require_localized("content", &request.content)?;
        entry.image_key = optional_media_key(request.image_key.as_deref())?;
        entry.video_url = video_url(request.video_url.as_deref())?;
        entry.updated_at = Utc::now();

        Ok(self.entry_response(self.culture.update_entry(&entry).await?))
    }

    pub async fn delete_entry(&self, actor: &Actor, id: Uuid) -> Result<(), UseCaseError> {
        let entry = self.find_entry(id).await?;
        authorize(AccessPolicy::can_delete_item(actor, entry.created_by))?;

        self.culture.delete_entry(id).await?;
        info!("Culture entry {} deleted by {}", id, actor.id);
        Ok(())
    }
}

fn video_url(url: Option<&str>) -> Result<Option<String>, UseCaseError> {
    match url.map(str::trim).filter(|u| !u.is_empty()) {
        None => Ok(None),
        Some(url) => Ok(Some(validate_video_url(url)?)),
    }
}
