// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::admin::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 发起操作的已认证主体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

/// 访问决策结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// 允许访问
    Allowed,
    /// 拒绝访问
    Denied(String),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }
}

/// 内容与账号的访问策略
///
/// - 超级管理员可以修改任何内容
/// - 普通管理员只能修改自己创建的内容
/// - 删除主题（词汇主题和文化主题）只允许超级管理员
/// - 管理员账号的管理只允许超级管理员
pub struct AccessPolicy;

impl AccessPolicy {
    /// 能否修改 `owner` 创建的内容
    pub fn can_modify(actor: &Actor, owner: Uuid) -> AccessDecision {
        match actor.role {
            Role::SuperAdmin => AccessDecision::Allowed,
            Role::Admin if actor.id == owner => AccessDecision::Allowed,
            Role::Admin => {
                AccessDecision::Denied("Only the creator or a superadmin may modify this".into())
            }
            Role::User => AccessDecision::Denied("Admin access required".into()),
        }
    }

    /// 能否删除单个词条或文化文章
    pub fn can_delete_item(actor: &Actor, owner: Uuid) -> AccessDecision {
        Self::can_modify(actor, owner)
    }

    /// 能否删除主题（级联删除其下的所有内容）
    pub fn can_delete_topic(actor: &Actor) -> AccessDecision {
        Self::require_superadmin(actor)
    }

    /// 能否管理其他管理员账号
    pub fn can_manage_admins(actor: &Actor) -> AccessDecision {
        Self::require_superadmin(actor)
    }

    pub fn can_change_settings(actor: &Actor) -> AccessDecision {
        Self::require_superadmin(actor)
    }

    /// 能否创建内容
    pub fn can_create_content(actor: &Actor) -> AccessDecision {
        if actor.role.is_admin() {
            AccessDecision::Allowed
        } else {
            AccessDecision::Denied("Admin access required".into())
        }
    }

    fn require_superadmin(actor: &Actor) -> AccessDecision {
        if actor.role == Role::SuperAdmin {
            AccessDecision::Allowed
        } else {
            AccessDecision::Denied("Superadmin access required".into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: Role) -> Actor {
        Actor {
            id: Uuid::new_v4(),
            role,
        }
    }

    #[test]
    fn test_admin_can_modify_only_own_content() {
        let admin = actor(Role::Admin);

        assert!(AccessPolicy::can_modify(&admin, admin.id).is_allowed());
        assert!(!AccessPolicy::can_modify(&admin, Uuid::new_v4()).is_allowed());
    }

    #[test]
    fn test_superadmin_can_modify_anything() {
        let superadmin = actor(Role::SuperAdmin);
        assert!(AccessPolicy::can_modify(&superadmin, Uuid::new_v4()).is_allowed());
        assert!(AccessPolicy::can_delete_item(&superadmin, Uuid::new_v4()).is_allowed());
    }

    #[test]
    fn test_topic_deletion_requires_superadmin() {
        let admin = actor(Role::Admin);
        assert_eq!(
            AccessPolicy::can_delete_topic(&admin),
            AccessDecision::Denied("Superadmin access required".into())
        );
        assert!(AccessPolicy::can_delete_topic(&actor(Role::SuperAdmin)).is_allowed());
    }

    #[test]
    fn test_learners_cannot_touch_content() {
        let learner = actor(Role::User);
        assert!(!AccessPolicy::can_create_content(&learner).is_allowed());
        assert!(!AccessPolicy::can_modify(&learner, learner.id).is_allowed());
        assert!(!AccessPolicy::can_manage_admins(&learner).is_allowed());
    }
}
