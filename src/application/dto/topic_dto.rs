// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::entry::{Entry, EntryAudio};
use crate::domain::models::localized::{LocalizedText, OptionalLocalizedText};
use crate::domain::models::topic::Topic;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct TopicRequest {
    pub name: LocalizedText,
    #[serde(default)]
    pub description: OptionalLocalizedText,
    pub image_key: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct TopicResponse {
    #[serde(flatten)]
    pub topic: Topic,
    pub image_url: Option<String>,
    pub entry_count: u64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct EntryRequest {
    pub topic_id: Uuid,
    pub word: LocalizedText,
    #[serde(default)]
    pub description: OptionalLocalizedText,
    pub image_key: Option<String>,
    #[serde(default)]
    pub audio: EntryAudio,
}

/// 三语音频的访问地址
#[derive(Debug, Default, Serialize)]
pub struct AudioUrls {
    pub id: Option<String>,
    pub su: Option<String>,
    pub en: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    #[serde(flatten)]
    pub entry: Entry,
    pub image_url: Option<String>,
    pub audio_urls: AudioUrls,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct EntrySearchQuery {
    pub q: Option<String>,
    pub lang: Option<String>,
    pub topic_id: Option<Uuid>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}
