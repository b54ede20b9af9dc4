// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::{authorize, UseCaseError};
use super::shared::{normalize_audio, optional_media_key, require_localized, MediaUrls};
use super::topic_use_case::entry_response;
use crate::application::dto::pagination::{ListParams, Paginated};
use crate::application::dto::topic_dto::{EntryRequest, EntryResponse, EntrySearchQuery};
use crate::domain::models::entry::Entry;
use crate::domain::models::localized::Language;
use crate::domain::repositories::entry_repository::{EntryRepository, EntrySearch};
use crate::domain::repositories::topic_repository::TopicRepository;
use crate::domain::services::access_policy::{AccessPolicy, Actor};
use crate::infrastructure::metrics;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// 词典词条用例
pub struct EntryUseCase {
    entries: Arc<dyn EntryRepository>,
    topics: Arc<dyn TopicRepository>,
    urls: MediaUrls,
}

impl EntryUseCase {
    pub fn new(
        entries: Arc<dyn EntryRepository>,
        topics: Arc<dyn TopicRepository>,
        urls: MediaUrls,
    ) -> Self {
        Self {
            entries,
            topics,
            urls,
        }
    }

    /// 词典搜索，未指定语言时在三种语言中匹配
    pub async fn search(
        &self,
        query: EntrySearchQuery,
    ) -> Result<Paginated<EntryResponse>, UseCaseError> {
        query.validate()?;

        let language = match query.lang.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            None => None,
            Some(code) => Some(code.parse::<Language>().map_err(|_| {
                UseCaseError::Validation(format!("Unsupported language: {}", code))
            })?),
        };

        let page = ListParams {
            limit: query.limit,
            offset: query.offset,
        }
        .page();

        let (entries, total) = self
            .entries
            .search(EntrySearch {
                query: query.q,
                language,
                topic_id: query.topic_id,
                page,
            })
            .await?;

        Ok(Paginated::new(entries, total).map(|entry| entry_response(&self.urls, entry)))
    }

    async fn find(&self, id: Uuid) -> Result<Entry, UseCaseError> {
        self.entries
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Entry"))
    }

    pub async fn get(&self, id: Uuid) -> Result<EntryResponse, UseCaseError> {
        Ok(entry_response(&self.urls, self.find(id).await?))
    }

    async fn ensure_topic(&self, topic_id: Uuid) -> Result<(), UseCaseError> {
        match self.topics.find_by_id(topic_id).await? {
            Some(_) => Ok(()),
            None => Err(UseCaseError::not_found("Topic")),
        }
    }

    pub async fn create(
        &self,
        actor: &Actor,
        request: EntryRequest,
    ) -> Result<EntryResponse, UseCaseError> {
        authorize(AccessPolicy::can_create_content(actor))?;
        self.ensure_topic(request.topic_id).await?;

        let now = Utc::now();
        let entry = Entry {
            id: Uuid::new_v4(),
            topic_id: request.topic_id,
            word: require_localized("word", &request.word)?,
            description: request.description.normalized(),
            image_key: optional_media_key(request.image_key.as_deref())?,
            audio: normalize_audio(&request.audio)?,
            created_by: actor.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.entries.create(&entry).await?;
        metrics::record_entry_created();
        info!("Entry {} created in topic {}", created.id, created.topic_id);
        Ok(entry_response(&self.urls, created))
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: Uuid,
        request: EntryRequest,
    ) -> Result<EntryResponse, UseCaseError> {
        let mut entry = self.find(id).await?;
        authorize(AccessPolicy::can_modify(actor, entry.created_by))?;

        if request.topic_id != entry.topic_id {
            self.ensure_topic(request.topic_id).await?;
            entry.topic_id = request.topic_id;
        }
        entry.word = require_localized("word", &request.word)?;
        entry.description = request.description.normalized();
        entry.image_key = optional_media_key(request.image_key.as_deref())?;
        entry.audio = normalize_audio(&request.audio)?;
        entry.updated_at = Utc::now();

        let updated = self.entries.update(&entry).await?;
        Ok(entry_response(&self.urls, updated))
    }

    pub async fn delete(&self, actor: &Actor, id: Uuid) -> Result<(), UseCaseError> {
        let entry = self.find(id).await?;
        authorize(AccessPolicy::can_delete_item(actor, entry.created_by))?;

        self.entries.delete(id).await?;
        info!("Entry {} deleted by {}", id, actor.id);
        Ok(())
    }
}
