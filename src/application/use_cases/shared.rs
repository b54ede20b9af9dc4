// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::UseCaseError;
use crate::domain::models::entry::EntryAudio;
use crate::domain::models::localized::LocalizedText;
use crate::domain::services::media_service::MediaService;

/// 媒体访问地址解析
#[derive(Debug, Clone)]
pub struct MediaUrls {
    base: String,
}

impl MediaUrls {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, key: &str) -> String {
        format!("{}/{}", self.base, key)
    }

    pub fn resolve(&self, key: Option<&str>) -> Option<String> {
        key.map(|k| self.url(k))
    }
}

/// 校验必填的三语字段，返回去除空白后的值
pub fn require_localized(
    field: &str,
    text: &LocalizedText,
) -> Result<LocalizedText, UseCaseError> {
    let trimmed = text.trimmed();
    let missing = trimmed.missing_languages();
    if missing.is_empty() {
        return Ok(trimmed);
    }

    let codes: Vec<&str> = missing.iter().map(|lang| lang.code()).collect();
    Err(UseCaseError::Validation(format!(
        "{} is missing translations: {}",
        field,
        codes.join(", ")
    )))
}

/// 可选的媒体键：空白视为缺省，否则必须是上传接口生成的内容寻址键
pub fn optional_media_key(key: Option<&str>) -> Result<Option<String>, UseCaseError> {
    match key.map(str::trim).filter(|k| !k.is_empty()) {
        None => Ok(None),
        Some(key) => {
            MediaService::parse_key(key)?;
            Ok(Some(key.to_string()))
        }
    }
}

pub fn normalize_audio(audio: &EntryAudio) -> Result<EntryAudio, UseCaseError> {
    Ok(EntryAudio {
        id: optional_media_key(audio.id.as_deref())?,
        su: optional_media_key(audio.su.as_deref())?,
        en: optional_media_key(audio.en.as_deref())?,
    })
}
