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

use crate::config::settings::RateLimitingSettings;
use governor::{DefaultKeyedRateLimiter, Quota};
use std::num::NonZeroU32;
use thiserror::Error;
use tracing::{info, warn};

/// 速率限制错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RateLimitError {
    /// 请求过多错误
    #[error("Too many login attempts, please try again later")]
    TooManyRequests,
}

/// 速率限制器
///
/// 按键（登录邮箱）在进程内限流，使用 GCRA 算法，每分钟允许固定次数的尝试
pub struct RateLimiter {
    limiter: Option<DefaultKeyedRateLimiter<String>>,
}

impl RateLimiter {
    /// 根据配置创建速率限制器
    ///
    /// 未启用或配额为 0 时不做任何限制
    pub fn new(settings: &RateLimitingSettings) -> Self {
        if !settings.enabled {
            info!("Login rate limiting disabled");
            return Self::disabled();
        }

        match NonZeroU32::new(settings.login_attempts_per_minute) {
            Some(per_minute) => {
                info!("Login rate limit: {} attempts per minute", per_minute);
                Self {
                    limiter: Some(DefaultKeyedRateLimiter::keyed(Quota::per_minute(per_minute))),
                }
            }
            None => {
                warn!("rate_limiting.login_attempts_per_minute is 0, login rate limiting disabled");
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { limiter: None }
    }

    /// 检查给定键的请求是否超出限制
    ///
    /// # 参数
    ///
    /// * `key` - 限流键，大小写不敏感
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 请求未超出限制
    /// * `Err(RateLimitError)` - 请求超出限制
    pub fn check(&self, key: &str) -> Result<(), RateLimitError> {
        let Some(limiter) = &self.limiter else {
            return Ok(());
        };

        let key = key.trim().to_lowercase();
        if limiter.check_key(&key).is_err() {
            warn!("Rate limit exceeded for {}", key);
            return Err(RateLimitError::TooManyRequests);
        }

        // Drop idle keys so the map does not grow without bound
        if limiter.len() > 10_000 {
            limiter.retain_recent();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(enabled: bool, per_minute: u32) -> RateLimitingSettings {
        RateLimitingSettings {
            enabled,
            login_attempts_per_minute: per_minute,
        }
    }

    #[test]
    fn test_limits_each_key_independently() {
        let limiter = RateLimiter::new(&settings(true, 2));

        assert!(limiter.check("a@kang.id").is_ok());
        assert!(limiter.check("A@Kang.id ").is_ok());
        assert_eq!(
            limiter.check("a@kang.id"),
            Err(RateLimitError::TooManyRequests)
        );

        assert!(limiter.check("b@kang.id").is_ok());
    }

    #[test]
    fn test_disabled_limiter_allows_everything() {
        for limiter in [
            RateLimiter::new(&settings(false, 1)),
            RateLimiter::new(&settings(true, 0)),
        ] {
            for _ in 0..20 {
                assert!(limiter.check("a@kang.id").is_ok());
            }
        }
    }
}
