// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::localized::LocalizedText;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 文化主题
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CultureTopic {
    pub id: Uuid,
    pub name: LocalizedText,
    pub image_key: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 文化文章（文字、图片和视频）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CultureEntry {
    pub id: Uuid,
    pub culture_topic_id: Uuid,
    pub title: LocalizedText,
    pub content: LocalizedText,
    pub image_key: Option<String>,
    pub video_url: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
