// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::RepositoryError;
use crate::domain::models::culture::{CultureEntry, CultureTopic};
use async_trait::async_trait;
use uuid::Uuid;

/// 文化内容仓库特质
///
/// 同时管理文化主题及其文章
#[async_trait]
pub trait CultureRepository: Send + Sync {
    async fn create_topic(&self, topic: &CultureTopic) -> Result<CultureTopic, RepositoryError>;
    async fn find_topic(&self, id: Uuid) -> Result<Option<CultureTopic>, RepositoryError>;
    async fn list_topics(&self) -> Result<Vec<CultureTopic>, RepositoryError>;
    async fn update_topic(&self, topic: &CultureTopic) -> Result<CultureTopic, RepositoryError>;
    /// 在同一事务中删除文化主题及其全部文章，返回删除的文章数
    async fn delete_topic_cascade(&self, id: Uuid) -> Result<u64, RepositoryError>;
    async fn count_topics(&self) -> Result<u64, RepositoryError>;

    async fn create_entry(&self, entry: &CultureEntry) -> Result<CultureEntry, RepositoryError>;
    async fn find_entry(&self, id: Uuid) -> Result<Option<CultureEntry>, RepositoryError>;
    async fn list_entries(&self, culture_topic_id: Uuid)
        -> Result<Vec<CultureEntry>, RepositoryError>;
    async fn update_entry(&self, entry: &CultureEntry) -> Result<CultureEntry, RepositoryError>;
    async fn delete_entry(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn count_entries(&self) -> Result<u64, RepositoryError>;
}
