// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::RepositoryError;
use crate::domain::models::setting::Setting;
use async_trait::async_trait;

/// 站点设置仓库特质
#[async_trait]
pub trait SettingRepository: Send + Sync {
    /// 按键排序返回全部设置
    async fn list_all(&self) -> Result<Vec<Setting>, RepositoryError>;
    async fn find(&self, key: &str) -> Result<Option<Setting>, RepositoryError>;
    /// 插入或覆盖一项设置
    async fn upsert(&self, setting: &Setting) -> Result<Setting, RepositoryError>;
}
