// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::RepositoryError;
use crate::domain::models::topic::Topic;
use async_trait::async_trait;
use uuid::Uuid;

/// 级联删除主题时一并移除的记录数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopicRemoval {
    pub entries: u64,
    pub visits: u64,
}

/// 主题仓库特质
///
/// 主题数量很少，列表接口一次返回全部主题
#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create(&self, topic: &Topic) -> Result<Topic, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Topic>, RepositoryError>;
    /// 按 `sort_order`、印尼语名称排序
    async fn list_all(&self) -> Result<Vec<Topic>, RepositoryError>;
    async fn update(&self, topic: &Topic) -> Result<Topic, RepositoryError>;
    /// 在同一事务中删除主题、其词条和访问记录，主题不存在时不删除任何内容
    async fn delete_cascade(&self, id: Uuid) -> Result<TopicRemoval, RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
}
