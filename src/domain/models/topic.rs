// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::localized::{LocalizedText, OptionalLocalizedText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 词汇主题（例如“动物”），包含多个词条
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: Uuid,
    pub name: LocalizedText,
    pub description: OptionalLocalizedText,
    pub image_key: Option<String>,
    pub sort_order: i32,
    /// 创建该主题的管理员
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
