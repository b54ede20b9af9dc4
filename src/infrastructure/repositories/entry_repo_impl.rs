// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::common::{contains_ignore_case, ensure_deleted, map_write_error};
use crate::domain::models::entry::{Entry, EntryAudio};
use crate::domain::models::localized::{Language, LocalizedText, OptionalLocalizedText};
use crate::domain::repositories::entry_repository::{EntryRepository, EntrySearch};
use crate::domain::repositories::errors::RepositoryError;
use crate::infrastructure::database::entities::entry;
use async_trait::async_trait;
use sea_orm::*;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// 词条仓库实现
#[derive(Clone)]
pub struct EntryRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl EntryRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn word_column(language: Language) -> entry::Column {
    match language {
        Language::Indonesian => entry::Column::WordId,
        Language::Sundanese => entry::Column::WordSu,
        Language::English => entry::Column::WordEn,
    }
}

impl From<entry::Model> for Entry {
    fn from(model: entry::Model) -> Self {
        Self {
            id: model.id,
            topic_id: model.topic_id,
            word: LocalizedText::new(model.word_id, model.word_su, model.word_en),
            description: OptionalLocalizedText {
                id: model.description_id,
                su: model.description_su,
                en: model.description_en,
            },
            image_key: model.image_key,
            audio: EntryAudio {
                id: model.audio_id_key,
                su: model.audio_su_key,
                en: model.audio_en_key,
            },
            created_by: model.created_by,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

fn to_active_model(entry: &Entry) -> entry::ActiveModel {
    entry::ActiveModel {
        id: Set(entry.id),
        topic_id: Set(entry.topic_id),
        word_id: Set(entry.word.id.clone()),
        word_su: Set(entry.word.su.clone()),
        word_en: Set(entry.word.en.clone()),
        description_id: Set(entry.description.id.clone()),
        description_su: Set(entry.description.su.clone()),
        description_en: Set(entry.description.en.clone()),
        image_key: Set(entry.image_key.clone()),
        audio_id_key: Set(entry.audio.id.clone()),
        audio_su_key: Set(entry.audio.su.clone()),
        audio_en_key: Set(entry.audio.en.clone()),
        created_by: Set(entry.created_by),
        created_at: Set(entry.created_at.into()),
        updated_at: Set(entry.updated_at.into()),
    }
}

#[async_trait]
impl EntryRepository for EntryRepositoryImpl {
    async fn create(&self, entry: &Entry) -> Result<Entry, RepositoryError> {
        let model = to_active_model(entry)
            .insert(self.db.as_ref())
            .await
            .map_err(map_write_error)?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Entry>, RepositoryError> {
        let model = entry::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn list_by_topic(&self, topic_id: Uuid) -> Result<Vec<Entry>, RepositoryError> {
        let models = entry::Entity::find()
            .filter(entry::Column::TopicId.eq(topic_id))
            .order_by_asc(entry::Column::WordId)
            .order_by_asc(entry::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn search(&self, search: EntrySearch) -> Result<(Vec<Entry>, u64), RepositoryError> {
        let mut select = entry::Entity::find();

        if let Some(topic_id) = search.topic_id {
            select = select.filter(entry::Column::TopicId.eq(topic_id));
        }

        if let Some(query) = search.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let languages: Vec<Language> = match search.language {
                Some(language) => vec![language],
                None => Language::ALL.to_vec(),
            };
            let condition = languages
                .into_iter()
                .fold(Condition::any(), |condition, language| {
                    condition.add(contains_ignore_case(word_column(language), query))
                });
            select = select.filter(condition);
        }

        let total = select.clone().count(self.db.as_ref()).await?;
        let order_column = word_column(search.language.unwrap_or(Language::Indonesian));
        let models = select
            .order_by_asc(order_column)
            .order_by_asc(entry::Column::Id)
            .offset(search.page.offset)
            .limit(search.page.limit)
            .all(self.db.as_ref())
            .await?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }

    async fn update(&self, entry: &Entry) -> Result<Entry, RepositoryError> {
        let mut model = to_active_model(entry);
        model.id = Unchanged(entry.id);
        model.created_by = NotSet;
        model.created_at = NotSet;

        let updated = model
            .update(self.db.as_ref())
            .await
            .map_err(map_write_error)?;
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = entry::Entity::delete_by_id(id).exec(self.db.as_ref()).await?;
        ensure_deleted(result.rows_affected)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(entry::Entity::find().count(self.db.as_ref()).await?)
    }

    async fn count_by_topic(&self) -> Result<HashMap<Uuid, u64>, RepositoryError> {
        let rows: Vec<(Uuid, i64)> = entry::Entity::find()
            .select_only()
            .column(entry::Column::TopicId)
            .column_as(entry::Column::Id.count(), "entry_count")
            .group_by(entry::Column::TopicId)
            .into_tuple()
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(topic_id, count)| (topic_id, count.max(0) as u64))
            .collect())
    }
}
