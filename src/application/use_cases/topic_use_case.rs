// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::{authorize, UseCaseError};
use super::shared::{optional_media_key, require_localized, MediaUrls};
use crate::application::dto::topic_dto::{AudioUrls, EntryResponse, TopicRequest, TopicResponse};
use crate::domain::models::entry::Entry;
use crate::domain::models::topic::Topic;
use crate::domain::repositories::entry_repository::EntryRepository;
use crate::domain::repositories::topic_repository::TopicRepository;
use crate::domain::services::access_policy::{AccessPolicy, Actor};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// 词汇主题用例
pub struct TopicUseCase {
    topics: Arc<dyn TopicRepository>,
    entries: Arc<dyn EntryRepository>,
    urls: MediaUrls,
}

impl TopicUseCase {
    pub fn new(
        topics: Arc<dyn TopicRepository>,
        entries: Arc<dyn EntryRepository>,
        urls: MediaUrls,
    ) -> Self {
        Self {
            topics,
            entries,
            urls,
        }
    }

    fn respond(&self, topic: Topic, entry_count: u64) -> TopicResponse {
        TopicResponse {
            image_url: self.urls.resolve(topic.image_key.as_deref()),
            topic,
            entry_count,
        }
    }

    pub async fn list(&self) -> Result<Vec<TopicResponse>, UseCaseError> {
        let topics = self.topics.list_all().await?;
        let counts = self.entries.count_by_topic().await?;

        Ok(topics
            .into_iter()
            .map(|topic| {
                let count = counts.get(&topic.id).copied().unwrap_or(0);
                self.respond(topic, count)
            })
            .collect())
    }

    pub async fn find(&self, id: Uuid) -> Result<Topic, UseCaseError> {
        self.topics
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Topic"))
    }

    pub async fn get(&self, id: Uuid) -> Result<TopicResponse, UseCaseError> {
        let topic = self.find(id).await?;
        self.with_count(topic).await
    }

    pub async fn entries(&self, id: Uuid) -> Result<Vec<EntryResponse>, UseCaseError> {
        self.find(id).await?;
        let entries = self.entries.list_by_topic(id).await?;
        Ok(entries
            .into_iter()
            .map(|entry| entry_response(&self.urls, entry))
            .collect())
    }

    pub async fn create(
        &self,
        actor: &Actor,
        request: TopicRequest,
    ) -> Result<TopicResponse, UseCaseError> {
        authorize(AccessPolicy::can_create_content(actor))?;

        let now = Utc::now();
        let topic = Topic {
            id: Uuid::new_v4(),
            name: require_localized("name", &request.name)?,
            description: request.description.normalized(),
            image_key: optional_media_key(request.image_key.as_deref())?,
            sort_order: request.sort_order.unwrap_or(0),
            created_by: actor.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.topics.create(&topic).await?;
        info!("Topic {} created by {}", created.id, actor.id);
        Ok(self.respond(created, 0))
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: Uuid,
        request: TopicRequest,
    ) -> Result<TopicResponse, UseCaseError> {
        let mut topic = self.find(id).await?;
        authorize(AccessPolicy::can_modify(actor, topic.created_by))?;

        topic.name = require_localized("name", &request.name)?;
        topic.description = request.description.normalized();
        topic.image_key = optional_media_key(request.image_key.as_deref())?;
        if let Some(sort_order) = request.sort_order {
            topic.sort_order = sort_order;
        }
        topic.updated_at = Utc::now();

        let updated = self.topics.update(&topic).await?;
        self.with_count(updated).await
    }

    async fn with_count(&self, topic: Topic) -> Result<TopicResponse, UseCaseError> {
        let count = self.entries.list_by_topic(topic.id).await?.len() as u64;
        Ok(self.respond(topic, count))
    }

    /// 删除主题及其词条和访问记录，仅限超级管理员
    pub async fn delete(&self, actor: &Actor, id: Uuid) -> Result<(), UseCaseError> {
        authorize(AccessPolicy::can_delete_topic(actor))?;
        self.find(id).await?;

        let removal = self.topics.delete_cascade(id).await?;
        info!(
            "Topic {} deleted by {} ({} entries, {} visits)",
            id, actor.id, removal.entries, removal.visits
        );
        Ok(())
    }
}

pub(crate) fn entry_response(urls: &MediaUrls, entry: Entry) -> EntryResponse {
    EntryResponse {
        image_url: urls.resolve(entry.image_key.as_deref()),
        audio_urls: AudioUrls {
            id: urls.resolve(entry.audio.id.as_deref()),
            su: urls.resolve(entry.audio.su.as_deref()),
            en: urls.resolve(entry.audio.en.as_deref()),
        },
        entry,
    }
}
