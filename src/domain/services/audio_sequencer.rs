// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::entry::Entry;
use crate::domain::models::localized::Language;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// 每个音轨允许的最大重复次数
pub const MAX_REPEAT: u8 = 5;

/// 播放计划错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("repeat must be between 1 and {MAX_REPEAT}, got {0}")]
    InvalidRepeat(u8),
    #[error("at least one language is required")]
    NoLanguages,
}

/// 播放模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackMode {
    /// 按词条顺序逐个朗读
    #[default]
    Vocabulary,
    /// 打乱顺序，每个词条只播放一种语言
    Quiz,
}

impl FromStr for PlaybackMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vocabulary" => Ok(PlaybackMode::Vocabulary),
            "quiz" => Ok(PlaybackMode::Quiz),
            _ => Err(()),
        }
    }
}

/// 一条待播放的音频
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub entry_id: Uuid,
    pub language: Language,
    pub media_key: String,
}

/// 播放器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    /// `repetition` 从 1 开始计数
    Playing { index: usize, repetition: u8 },
    Finished,
}

/// 播放计划中的一步
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackStep {
    pub step: usize,
    pub track: Track,
    pub repetition: u8,
}

/// 音频播放状态机
///
/// `Idle -> Playing { index, repetition } -> Finished`。每个音轨播放
/// `repeat` 次后才前进到下一个音轨，最后一个音轨结束后进入 `Finished`。
#[derive(Debug, Clone)]
pub struct AudioSequencer {
    tracks: Vec<Track>,
    repeat: u8,
    state: PlaybackState,
}

impl AudioSequencer {
    pub fn new(tracks: Vec<Track>, repeat: u8) -> Result<Self, PlaylistError> {
        if !(1..=MAX_REPEAT).contains(&repeat) {
            return Err(PlaylistError::InvalidRepeat(repeat));
        }

        Ok(Self {
            tracks,
            repeat,
            state: PlaybackState::Idle,
        })
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// 当前音轨及其重复序号
    pub fn current(&self) -> Option<(&Track, u8)> {
        match self.state {
            PlaybackState::Playing { index, repetition } => {
                self.tracks.get(index).map(|track| (track, repetition))
            }
            _ => None,
        }
    }

    /// 从头开始播放，空列表直接结束
    pub fn start(&mut self) -> PlaybackState {
        self.state = if self.tracks.is_empty() {
            PlaybackState::Finished
        } else {
            PlaybackState::Playing {
                index: 0,
                repetition: 1,
            }
        };
        self.state
    }

    /// 当前播放结束，前进到下一步
    pub fn advance(&mut self) -> PlaybackState {
        self.state = match self.state {
            PlaybackState::Idle => return self.start(),
            PlaybackState::Playing { index, repetition } if repetition < self.repeat => {
                PlaybackState::Playing {
                    index,
                    repetition: repetition + 1,
                }
            }
            PlaybackState::Playing { index, .. } if index + 1 < self.tracks.len() => {
                PlaybackState::Playing {
                    index: index + 1,
                    repetition: 1,
                }
            }
            PlaybackState::Playing { .. } | PlaybackState::Finished => PlaybackState::Finished,
        };
        self.state
    }

    pub fn stop(&mut self) {
        self.state = PlaybackState::Finished;
    }

    /// 从 `Idle` 运行到 `Finished`，记录经过的每一步
    pub fn plan(mut self) -> Vec<PlaybackStep> {
        let mut steps = Vec::with_capacity(self.tracks.len() * self.repeat as usize);
        self.start();

        while let Some((track, repetition)) = self.current() {
            steps.push(PlaybackStep {
                step: steps.len() + 1,
                track: track.clone(),
                repetition,
            });
            self.advance();
        }

        steps
    }
}

/// 词汇模式：按词条顺序，每个词条按给定语言顺序排列，跳过缺失的音频
pub fn vocabulary_playlist(
    entries: &[Entry],
    languages: &[Language],
) -> Result<Vec<Track>, PlaylistError> {
    let languages = distinct(languages)?;

    Ok(entries
        .iter()
        .flat_map(|entry| {
            languages.iter().filter_map(move |language| {
                entry.audio.get(*language).map(|key| Track {
                    entry_id: entry.id,
                    language: *language,
                    media_key: key.to_string(),
                })
            })
        })
        .collect())
}

/// 测验模式：每个词条只取第一种语言的音频，按种子确定性地打乱顺序
pub fn quiz_playlist(
    entries: &[Entry],
    languages: &[Language],
    seed: u64,
) -> Result<Vec<Track>, PlaylistError> {
    let languages = distinct(languages)?;
    let language = languages[0];

    let mut tracks: Vec<Track> = entries
        .iter()
        .filter_map(|entry| {
            entry.audio.get(language).map(|key| Track {
                entry_id: entry.id,
                language,
                media_key: key.to_string(),
            })
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(seed);
    tracks.shuffle(&mut rng);
    Ok(tracks)
}

/// 未指定种子时由主题ID派生，同一主题的测验顺序保持稳定
pub fn default_seed(topic_id: Uuid) -> u64 {
    let (high, low) = topic_id.as_u64_pair();
    high ^ low
}

fn distinct(languages: &[Language]) -> Result<Vec<Language>, PlaylistError> {
    let mut unique = Vec::with_capacity(languages.len());
    for language in languages {
        if !unique.contains(language) {
            unique.push(*language);
        }
    }

    if unique.is_empty() {
        return Err(PlaylistError::NoLanguages);
    }
    Ok(unique)
}

#[cfg(test)]
#[path = "audio_sequencer_test.rs"]
mod tests;
