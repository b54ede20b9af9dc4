// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::UseCaseError;
use super::shared::MediaUrls;
use crate::application::dto::playlist_dto::{PlaylistQuery, PlaylistResponse, PlaylistStep};
use crate::domain::models::localized::Language;
use crate::domain::repositories::entry_repository::EntryRepository;
use crate::domain::repositories::topic_repository::TopicRepository;
use crate::domain::services::audio_sequencer::{
    default_seed, quiz_playlist, vocabulary_playlist, AudioSequencer, PlaybackMode,
};
use std::sync::Arc;
use uuid::Uuid;

/// 音频播放计划用例
pub struct PlaylistUseCase {
    topics: Arc<dyn TopicRepository>,
    entries: Arc<dyn EntryRepository>,
    urls: MediaUrls,
}

impl PlaylistUseCase {
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

    /// 为主题生成完整的播放步骤
    pub async fn build(
        &self,
        topic_id: Uuid,
        query: PlaylistQuery,
    ) -> Result<PlaylistResponse, UseCaseError> {
        let mode = match query.mode.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
            None => PlaybackMode::default(),
            Some(mode) => mode.parse().map_err(|_| {
                UseCaseError::Validation(format!("Unsupported playback mode: {}", mode))
            })?,
        };
        let languages = parse_languages(query.langs.as_deref())?;
        let repeat = query.repeat.unwrap_or(1);

        if self.topics.find_by_id(topic_id).await?.is_none() {
            return Err(UseCaseError::not_found("Topic"));
        }
        let entries = self.entries.list_by_topic(topic_id).await?;

        let tracks = match mode {
            PlaybackMode::Vocabulary => vocabulary_playlist(&entries, &languages)?,
            PlaybackMode::Quiz => {
                let seed = query.seed.unwrap_or_else(|| default_seed(topic_id));
                quiz_playlist(&entries, &languages, seed)?
            }
        };

        let steps = AudioSequencer::new(tracks, repeat)?
            .plan()
            .into_iter()
            .map(|step| PlaylistStep {
                step: step.step,
                entry_id: step.track.entry_id,
                language: step.track.language,
                url: self.urls.url(&step.track.media_key),
                media_key: step.track.media_key,
                repetition: step.repetition,
            })
            .collect();

        Ok(PlaylistResponse {
            topic_id,
            mode,
            steps,
        })
    }
}

/// 解析逗号分隔的语言代码，缺省为 `id,su,en`
fn parse_languages(langs: Option<&str>) -> Result<Vec<Language>, UseCaseError> {
    let Some(langs) = langs else {
        return Ok(Language::ALL.to_vec());
    };

    langs
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| {
            code.parse::<Language>()
                .map_err(|_| UseCaseError::Validation(format!("Unsupported language: {}", code)))
        })
        .collect()
}
