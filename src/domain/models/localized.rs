// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 词典支持的语言
///
/// 序列化为 ISO 639-1 代码：`id`（印尼语）、`su`（巽他语）、`en`（英语）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "su")]
    Sundanese,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// 固定的展示顺序
    pub const ALL: [Language; 3] = [Language::Indonesian, Language::Sundanese, Language::English];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Indonesian => "id",
            Language::Sundanese => "su",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Language::Indonesian),
            "su" => Ok(Language::Sundanese),
            "en" => Ok(Language::English),
            _ => Err(()),
        }
    }
}

/// 三语文本
///
/// 三种语言都必须有值
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    pub id: String,
    pub su: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(id: impl Into<String>, su: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            su: su.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Indonesian => &self.id,
            Language::Sundanese => &self.su,
            Language::English => &self.en,
        }
    }

    /// 去除首尾空白后的副本
    pub fn trimmed(&self) -> Self {
        Self::new(self.id.trim(), self.su.trim(), self.en.trim())
    }

    /// 返回所有为空的语言
    pub fn missing_languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.get(*lang).trim().is_empty())
            .collect()
    }

    /// 任意一种语言包含给定片段（不区分大小写）
    pub fn contains_ignore_case(&self, needle: &str, language: Option<Language>) -> bool {
        let needle = needle.to_lowercase();
        match language {
            Some(lang) => self.get(lang).to_lowercase().contains(&needle),
            None => Language::ALL
                .into_iter()
                .any(|lang| self.get(lang).to_lowercase().contains(&needle)),
        }
    }
}

/// 可选的三语文本，每种语言可单独缺省
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptionalLocalizedText {
    pub id: Option<String>,
    pub su: Option<String>,
    pub en: Option<String>,
}

impl OptionalLocalizedText {
    /// 空白字符串视为缺省
    pub fn normalized(&self) -> Self {
        fn clean(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }

        Self {
            id: clean(&self.id),
            su: clean(&self.su),
            en: clean(&self.en),
        }
    }

    pub fn get(&self, language: Language) -> Option<&str> {
        match language {
            Language::Indonesian => self.id.as_deref(),
            Language::Sundanese => self.su.as_deref(),
            Language::English => self.en.as_deref(),
        }
    }
}
