// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::{Page, RepositoryError};
use crate::domain::models::learner::Learner;
use async_trait::async_trait;
use uuid::Uuid;

/// 学习者查询参数
#[derive(Debug, Clone, Default)]
pub struct LearnerQuery {
    /// 名称、电话或城市的子串
    pub search: Option<String>,
    /// 城市精确匹配（不区分大小写）
    pub city: Option<String>,
    pub page: Page,
}

/// 学习者仓库特质
#[async_trait]
pub trait LearnerRepository: Send + Sync {
    async fn create(&self, learner: &Learner) -> Result<Learner, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Learner>, RepositoryError>;
    /// 批量查找，缺失的ID被忽略
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Learner>, RepositoryError>;
    async fn list(&self, query: LearnerQuery) -> Result<(Vec<Learner>, u64), RepositoryError>;
    /// 在同一事务中删除学习者及其访问记录，返回删除的访问记录数
    async fn delete_cascade(&self, id: Uuid) -> Result<u64, RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
    /// 所有学习者的城市字段，按登记时间排序，用于城市分布统计
    async fn cities(&self) -> Result<Vec<String>, RepositoryError>;
}
