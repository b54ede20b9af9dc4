// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// 媒体校验错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MediaError {
    #[error("Uploaded file is empty")]
    Empty,
    #[error("Unsupported content type: {0}")]
    UnsupportedType(String),
    #[error("File is too large: {size} bytes (limit {max} bytes)")]
    TooLarge { size: usize, max: usize },
    #[error("Invalid media key: {0}")]
    InvalidKey(String),
}

/// 媒体类别，同时决定对象键的目录前缀
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Images,
    Audio,
    Videos,
}

impl MediaKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            MediaKind::Images => "images",
            MediaKind::Audio => "audio",
            MediaKind::Videos => "videos",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "images" => Some(MediaKind::Images),
            "audio" => Some(MediaKind::Audio),
            "videos" => Some(MediaKind::Videos),
            _ => None,
        }
    }
}

// Extension given to uploads whose subtype is not listed below
const FALLBACK_EXTENSION: &str = "bin";

// (mime, extension)
const KNOWN_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("image/svg+xml", "svg"),
    ("audio/mpeg", "mp3"),
    ("audio/mp4", "m4a"),
    ("audio/aac", "aac"),
    ("audio/ogg", "ogg"),
    ("audio/wav", "wav"),
    ("audio/x-wav", "wav"),
    ("audio/webm", "weba"),
    ("video/mp4", "mp4"),
    ("video/webm", "webm"),
    ("video/ogg", "ogv"),
    ("video/quicktime", "mov"),
];

/// 通过校验的上传文件描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDescriptor {
    pub kind: MediaKind,
    pub key: String,
    pub content_type: String,
}

/// 媒体服务
///
/// 负责上传文件的类型与大小校验，以及内容寻址键的生成
pub struct MediaService;

impl MediaService {
    /// 去掉参数并转小写，例如 `Audio/MPEG; codecs=mp3` -> `audio/mpeg`
    pub fn essence(content_type: &str) -> String {
        content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }

    pub fn kind_of(content_type: &str) -> Option<MediaKind> {
        let essence = Self::essence(content_type);
        let (top, sub) = essence.split_once('/')?;
        if sub.is_empty() {
            return None;
        }
        match top {
            "image" => Some(MediaKind::Images),
            "audio" => Some(MediaKind::Audio),
            "video" => Some(MediaKind::Videos),
            _ => None,
        }
    }

    pub fn extension_for(content_type: &str) -> &'static str {
        let essence = Self::essence(content_type);
        KNOWN_TYPES
            .iter()
            .find(|(mime, _)| *mime == essence)
            .map(|(_, ext)| *ext)
            .unwrap_or(FALLBACK_EXTENSION)
    }

    /// 由对象键的扩展名推断响应的内容类型
    pub fn content_type_for_key(key: &str) -> &'static str {
        let ext = key
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        KNOWN_TYPES
            .iter()
            .find(|(_, known)| *known == ext)
            .map(|(mime, _)| *mime)
            .unwrap_or("application/octet-stream")
    }

    /// `{kind}/{sha256}.{ext}`，相同内容总是得到相同的键
    pub fn media_key(kind: MediaKind, data: &[u8], content_type: &str) -> String {
        let digest = hex::encode(Sha256::digest(data));
        format!(
            "{}/{}.{}",
            kind.prefix(),
            digest,
            Self::extension_for(content_type)
        )
    }

    /// 解析记录中引用的媒体键，只接受 [`Self::media_key`] 生成的格式：
    /// 已知类别前缀、64 位小写十六进制摘要和已知扩展名
    pub fn parse_key(key: &str) -> Result<MediaKind, MediaError> {
        let invalid = || MediaError::InvalidKey(key.to_string());

        let (prefix, file) = key.split_once('/').ok_or_else(invalid)?;
        let kind = MediaKind::from_prefix(prefix).ok_or_else(invalid)?;
        let (digest, ext) = file.split_once('.').ok_or_else(invalid)?;

        let digest_ok = digest.len() == 64
            && digest
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        let ext_ok =
            ext == FALLBACK_EXTENSION || KNOWN_TYPES.iter().any(|(_, known)| *known == ext);

        if digest_ok && ext_ok {
            Ok(kind)
        } else {
            Err(invalid())
        }
    }

    /// 校验上传文件并生成对象键
    pub fn describe(
        data: &[u8],
        content_type: &str,
        max_bytes: usize,
    ) -> Result<MediaDescriptor, MediaError> {
        if data.is_empty() {
            return Err(MediaError::Empty);
        }
        if data.len() > max_bytes {
            return Err(MediaError::TooLarge {
                size: data.len(),
                max: max_bytes,
            });
        }

        let kind = Self::kind_of(content_type)
            .ok_or_else(|| MediaError::UnsupportedType(content_type.to_string()))?;

        Ok(MediaDescriptor {
            kind,
            key: Self::media_key(kind, data, content_type),
            content_type: Self::essence(content_type),
        })
    }
}
