// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::{Page, RepositoryError};
use crate::domain::models::admin::{Admin, Role};
use async_trait::async_trait;
use uuid::Uuid;

/// 管理员仓库特质
///
/// 邮箱在存储层以小写形式保存，查找时调用方负责先规范化
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// 创建管理员，邮箱已存在时返回 `RepositoryError::Conflict`
    async fn create(&self, admin: &Admin) -> Result<Admin, RepositoryError>;
    /// 根据ID查找管理员
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, RepositoryError>;
    /// 根据邮箱查找管理员
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, RepositoryError>;
    /// 分页列出管理员，按创建时间排序
    async fn list(&self, page: Page) -> Result<(Vec<Admin>, u64), RepositoryError>;
    /// 更新管理员的名称、角色和密码哈希
    async fn update(&self, admin: &Admin) -> Result<Admin, RepositoryError>;
    /// 删除管理员
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 统计指定角色的管理员数量
    async fn count_by_role(&self, role: Role) -> Result<u64, RepositoryError>;
    /// 统计管理员总数
    async fn count(&self) -> Result<u64, RepositoryError>;
}
