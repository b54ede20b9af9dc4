// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use url::Url;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// +62 / 62 / 0, then the 8xx mobile prefix and 8-12 more digits
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+62|62|0)(8\d{8,12})$").expect("valid phone regex"));

static SETTING_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_.-]{1,64}$").expect("valid setting key regex"));

/// 验证错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// 必填字段为空
    #[error("{0} must not be blank")]
    Blank(&'static str),
    /// 邮箱无效
    #[error("Invalid email address")]
    InvalidEmail,
    /// 手机号无效
    #[error("Invalid Indonesian mobile number")]
    InvalidPhone,
    /// 设置键无效
    #[error("Setting key must match [a-z0-9_.-]{{1,64}}")]
    InvalidSettingKey,
    /// URL无效
    #[error("Invalid URL: only http and https are allowed")]
    InvalidUrl,
}

/// 去除首尾空白，空字符串视为错误
pub fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(trimmed.to_string())
}

/// 验证并规范化邮箱（去空白、转小写）
pub fn normalize_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim().to_lowercase();
    if EMAIL_RE.is_match(&email) {
        Ok(email)
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// 验证并规范化印尼手机号
///
/// 忽略空格和连字符，统一输出为 `+628...` 形式
pub fn normalize_phone(phone: &str) -> Result<String, ValidationError> {
    let compact: String = phone
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();

    let captures = PHONE_RE
        .captures(&compact)
        .ok_or(ValidationError::InvalidPhone)?;
    Ok(format!("+62{}", &captures[2]))
}

/// 验证设置键
pub fn validate_setting_key(key: &str) -> Result<(), ValidationError> {
    if SETTING_KEY_RE.is_match(key) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSettingKey)
    }
}

/// 验证视频链接，仅允许带主机名的 http/https 地址
pub fn validate_video_url(url: &str) -> Result<String, ValidationError> {
    let parsed = Url::parse(url.trim()).map_err(|_| ValidationError::InvalidUrl)?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ValidationError::InvalidUrl);
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(ValidationError::InvalidUrl),
    }

    Ok(parsed.to_string())
}
