// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::localized::Language;
use crate::domain::services::audio_sequencer::PlaybackMode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct PlaylistQuery {
    pub mode: Option<String>,
    /// 逗号分隔的语言代码，例如 `su,id`
    pub langs: Option<String>,
    pub repeat: Option<u8>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistStep {
    pub step: usize,
    pub entry_id: Uuid,
    pub language: Language,
    pub media_key: String,
    pub url: String,
    pub repetition: u8,
}

#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub topic_id: Uuid,
    pub mode: PlaybackMode,
    pub steps: Vec<PlaylistStep>,
}
