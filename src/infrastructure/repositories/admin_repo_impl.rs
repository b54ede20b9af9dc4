// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::common::{ensure_deleted, map_write_error};
use crate::domain::models::admin::{Admin, Role};
use crate::domain::repositories::admin_repository::AdminRepository;
use crate::domain::repositories::errors::{Page, RepositoryError};
use crate::infrastructure::database::entities::admin;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 管理员仓库实现
#[derive(Clone)]
pub struct AdminRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl AdminRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl TryFrom<admin::Model> for Admin {
    type Error = RepositoryError;

    fn try_from(model: admin::Model) -> Result<Self, Self::Error> {
        let role = model
            .role
            .parse()
            .map_err(|_| RepositoryError::Corrupted(format!("unknown role '{}'", model.role)))?;

        Ok(Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            role,
            created_by: model.created_by,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

#[async_trait]
impl AdminRepository for AdminRepositoryImpl {
    async fn create(&self, admin: &Admin) -> Result<Admin, RepositoryError> {
        if self.find_by_email(&admin.email).await?.is_some() {
            return Err(RepositoryError::Conflict(format!(
                "email {} is already registered",
                admin.email
            )));
        }

        let model = admin::ActiveModel {
            id: Set(admin.id),
            name: Set(admin.name.clone()),
            email: Set(admin.email.clone()),
            password_hash: Set(admin.password_hash.clone()),
            role: Set(admin.role.to_string()),
            created_by: Set(admin.created_by),
            created_at: Set(admin.created_at.into()),
            updated_at: Set(admin.updated_at.into()),
        };

        // The unique index still guards against concurrent inserts
        model
            .insert(self.db.as_ref())
            .await
            .map_err(map_write_error)?
            .try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, RepositoryError> {
        admin::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(Admin::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, RepositoryError> {
        admin::Entity::find()
            .filter(admin::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await?
            .map(Admin::try_from)
            .transpose()
    }

    async fn list(&self, page: Page) -> Result<(Vec<Admin>, u64), RepositoryError> {
        let total = admin::Entity::find().count(self.db.as_ref()).await?;
        let admins = admin::Entity::find()
            .order_by_asc(admin::Column::CreatedAt)
            .order_by_asc(admin::Column::Email)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(Admin::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((admins, total))
    }

    async fn update(&self, admin: &Admin) -> Result<Admin, RepositoryError> {
        let model = admin::ActiveModel {
            id: Unchanged(admin.id),
            name: Set(admin.name.clone()),
            password_hash: Set(admin.password_hash.clone()),
            role: Set(admin.role.to_string()),
            updated_at: Set(admin.updated_at.into()),
            ..Default::default()
        };

        model
            .update(self.db.as_ref())
            .await
            .map_err(map_write_error)?
            .try_into()
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = admin::Entity::delete_by_id(id).exec(self.db.as_ref()).await?;
        ensure_deleted(result.rows_affected)
    }

    async fn count_by_role(&self, role: Role) -> Result<u64, RepositoryError> {
        Ok(admin::Entity::find()
            .filter(admin::Column::Role.eq(role.to_string()))
            .count(self.db.as_ref())
            .await?)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(admin::Entity::find().count(self.db.as_ref()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::common::test_db;
    use chrono::Utc;

    fn admin(email: &str, role: Role) -> Admin {
        Admin {
            id: Uuid::new_v4(),
            name: "Nyai".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role,
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_is_a_conflict() {
        let repo = AdminRepositoryImpl::new(test_db().await);
        repo.create(&admin("nyai@kang.id", Role::Admin)).await.unwrap();

        let result = repo.create(&admin("nyai@kang.id", Role::SuperAdmin)).await;
        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_and_count_by_role() {
        let repo = AdminRepositoryImpl::new(test_db().await);
        let mut created = repo.create(&admin("asep@kang.id", Role::Admin)).await.unwrap();
        assert_eq!(repo.count_by_role(Role::SuperAdmin).await.unwrap(), 0);

        created.role = Role::SuperAdmin;
        created.name = "Asep".to_string();
        let updated = repo.update(&created).await.unwrap();

        assert_eq!(updated.name, "Asep");
        assert_eq!(updated.email, "asep@kang.id");
        assert_eq!(repo.count_by_role(Role::SuperAdmin).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_admin() {
        let repo = AdminRepositoryImpl::new(test_db().await);
        let ghost = admin("ghost@kang.id", Role::Admin);

        assert!(matches!(repo.update(&ghost).await, Err(RepositoryError::NotFound)));
        assert!(matches!(repo.delete(ghost.id).await, Err(RepositoryError::NotFound)));
    }
}
