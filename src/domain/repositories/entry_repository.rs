// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::{Page, RepositoryError};
use crate::domain::models::entry::Entry;
use crate::domain::models::localized::Language;
use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

/// 词条搜索参数
#[derive(Debug, Clone, Default)]
pub struct EntrySearch {
    /// 搜索片段，不区分大小写
    pub query: Option<String>,
    /// 限定搜索语言，为空时搜索全部三种语言
    pub language: Option<Language>,
    pub topic_id: Option<Uuid>,
    pub page: Page,
}

/// 词条仓库特质
#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn create(&self, entry: &Entry) -> Result<Entry, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Entry>, RepositoryError>;
    /// 某主题下的全部词条，按印尼语词排序
    async fn list_by_topic(&self, topic_id: Uuid) -> Result<Vec<Entry>, RepositoryError>;
    async fn search(&self, search: EntrySearch) -> Result<(Vec<Entry>, u64), RepositoryError>;
    async fn update(&self, entry: &Entry) -> Result<Entry, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
    /// 每个主题的词条数量
    async fn count_by_topic(&self) -> Result<HashMap<Uuid, u64>, RepositoryError>;
}
