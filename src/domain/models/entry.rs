// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::localized::{Language, LocalizedText, OptionalLocalizedText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 词条的三语音频
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryAudio {
    pub id: Option<String>,
    pub su: Option<String>,
    pub en: Option<String>,
}

impl EntryAudio {
    pub fn get(&self, language: Language) -> Option<&str> {
        match language {
            Language::Indonesian => self.id.as_deref(),
            Language::Sundanese => self.su.as_deref(),
            Language::English => self.en.as_deref(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        [&self.id, &self.su, &self.en]
            .into_iter()
            .filter_map(|key| key.as_deref())
    }
}

/// 词典词条
///
/// 一个词汇在三种语言中的写法、释义、插图和发音
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub word: LocalizedText,
    pub description: OptionalLocalizedText,
    pub image_key: Option<String>,
    pub audio: EntryAudio,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// 该词条引用的全部媒体键
    pub fn media_keys(&self) -> Vec<String> {
        self.image_key
            .iter()
            .map(String::as_str)
            .chain(self.audio.keys())
            .map(str::to_string)
            .collect()
    }
}
