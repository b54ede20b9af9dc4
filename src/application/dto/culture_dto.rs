// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::culture::{CultureEntry, CultureTopic};
use crate::domain::models::localized::LocalizedText;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CultureTopicRequest {
    pub name: LocalizedText,
    pub image_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CultureTopicResponse {
    #[serde(flatten)]
    pub topic: CultureTopic,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CultureEntryRequest {
    pub culture_topic_id: Uuid,
    pub title: LocalizedText,
    pub content: LocalizedText,
    pub image_key: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CultureEntryResponse {
    #[serde(flatten)]
    pub entry: CultureEntry,
    pub image_url: Option<String>,
}
