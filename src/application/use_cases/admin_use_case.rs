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

use super::errors::{authorize, UseCaseError};
use crate::{
    application::dto::{
        admin_dto::{
            CreateAdminRequest, LoginRequest, LoginResponse, UpdateAdminRequest,
            UpdateProfileRequest,
        },
        pagination::{ListParams, Paginated},
    },
    config::settings::BootstrapSettings,
    domain::{
        models::admin::{Admin, Role},
        repositories::{admin_repository::AdminRepository, errors::RepositoryError},
        services::{
            access_policy::{AccessPolicy, Actor},
            auth_service::{hash_password, verify_password, TokenService},
        },
    },
    infrastructure::metrics,
    utils::validators::{normalize_email, require_text},
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// 管理员账号用例
///
/// 登录、个人资料维护，以及超级管理员对账号的增删改查
pub struct AdminUseCase {
    admins: Arc<dyn AdminRepository>,
    tokens: Arc<TokenService>,
}

impl AdminUseCase {
    pub fn new(admins: Arc<dyn AdminRepository>, tokens: Arc<TokenService>) -> Self {
        Self { admins, tokens }
    }

    /// 邮箱密码登录
    ///
    /// 邮箱不存在和密码错误返回相同的错误信息
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, UseCaseError> {
        let email = normalize_email(&request.email)
            .map_err(|_| UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        let admin = match self.admins.find_by_email(&email).await? {
            Some(admin) => admin,
            None => {
                metrics::record_login("failure");
                return Err(UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()));
            }
        };

        let hash = admin.password_hash.clone();
        let password = request.password;
        let valid =
            tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await?;
        if !valid {
            metrics::record_login("failure");
            warn!("Failed login attempt for admin {}", admin.id);
            return Err(UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.tokens.issue(admin.id, admin.role, &admin.name)?;
        metrics::record_login("success");
        info!("Admin {} logged in", admin.id);

        Ok(LoginResponse { token, admin })
    }

    pub async fn me(&self, actor: &Actor) -> Result<Admin, UseCaseError> {
        self.admins
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Admin"))
    }

    pub async fn update_profile(
        &self,
        actor: &Actor,
        request: UpdateProfileRequest,
    ) -> Result<Admin, UseCaseError> {
        request.validate()?;
        let mut admin = self.me(actor).await?;

        if let Some(name) = request.name.as_deref() {
            admin.name = require_text("name", name)?;
        }

        if let Some(password) = request.password {
            let current = request.current_password.ok_or_else(|| {
                UseCaseError::Validation("current_password is required to change password".into())
            })?;
            let hash = admin.password_hash.clone();
            let matches =
                tokio::task::spawn_blocking(move || verify_password(&current, &hash)).await?;
            if !matches {
                return Err(UseCaseError::Unauthorized(
                    "Current password is incorrect".to_string(),
                ));
            }
            admin.password_hash = hash_blocking(password).await?;
        }

        admin.updated_at = Utc::now();
        Ok(self.admins.update(&admin).await?)
    }

    pub async fn list(
        &self,
        actor: &Actor,
        params: ListParams,
    ) -> Result<Paginated<Admin>, UseCaseError> {
        authorize(AccessPolicy::can_manage_admins(actor))?;
        params.validate()?;

        let (admins, total) = self.admins.list(params.page()).await?;
        Ok(Paginated::new(admins, total))
    }

    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateAdminRequest,
    ) -> Result<Admin, UseCaseError> {
        authorize(AccessPolicy::can_manage_admins(actor))?;
        request.validate()?;

        let role = request.role.unwrap_or(Role::Admin);
        ensure_admin_role(role)?;

        let name = require_text("name", &request.name)?;
        let email = normalize_email(&request.email)?;
        let password_hash = hash_blocking(request.password).await?;

        let now = Utc::now();
        let admin = Admin {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role,
            created_by: Some(actor.id),
            created_at: now,
            updated_at: now,
        };

        let created = self.admins.create(&admin).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => {
                UseCaseError::Conflict(format!("Email {} is already registered", admin.email))
            }
            other => other.into(),
        })?;

        info!("Admin {} created by {}", created.id, actor.id);
        Ok(created)
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: Uuid,
        request: UpdateAdminRequest,
    ) -> Result<Admin, UseCaseError> {
        authorize(AccessPolicy::can_manage_admins(actor))?;
        request.validate()?;

        let mut admin = self
            .admins
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Admin"))?;

        if let Some(name) = request.name.as_deref() {
            admin.name = require_text("name", name)?;
        }

        if let Some(role) = request.role {
            ensure_admin_role(role)?;
            if admin.role == Role::SuperAdmin && role != Role::SuperAdmin {
                self.ensure_not_last_superadmin().await?;
            }
            admin.role = role;
        }

        if let Some(password) = request.password {
            admin.password_hash = hash_blocking(password).await?;
        }

        admin.updated_at = Utc::now();
        Ok(self.admins.update(&admin).await?)
    }

    pub async fn delete(&self, actor: &Actor, id: Uuid) -> Result<(), UseCaseError> {
        authorize(AccessPolicy::can_manage_admins(actor))?;

        if actor.id == id {
            return Err(UseCaseError::Conflict(
                "You cannot delete your own account".to_string(),
            ));
        }

        let admin = self
            .admins
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Admin"))?;

        if admin.role == Role::SuperAdmin {
            self.ensure_not_last_superadmin().await?;
        }

        self.admins.delete(id).await?;
        info!("Admin {} deleted by {}", id, actor.id);
        Ok(())
    }

    /// 没有超级管理员时，根据启动配置创建一个
    pub async fn ensure_superadmin(
        &self,
        bootstrap: &BootstrapSettings,
    ) -> Result<Option<Admin>, UseCaseError> {
        let (Some(email), Some(password)) = (
            bootstrap.superadmin_email.as_deref(),
            bootstrap.superadmin_password.as_deref(),
        ) else {
            return Ok(None);
        };

        if self.admins.count_by_role(Role::SuperAdmin).await? > 0 {
            return Ok(None);
        }

        if password.chars().count() < 8 {
            return Err(UseCaseError::Validation(
                "bootstrap.superadmin_password must be at least 8 characters".to_string(),
            ));
        }

        let email = normalize_email(email)?;
        if let Some(mut existing) = self.admins.find_by_email(&email).await? {
            existing.role = Role::SuperAdmin;
            existing.updated_at = Utc::now();
            let promoted = self.admins.update(&existing).await?;
            info!("Promoted existing admin {} to superadmin", promoted.id);
            return Ok(Some(promoted));
        }

        let now = Utc::now();
        let admin = Admin {
            id: Uuid::new_v4(),
            name: require_text("bootstrap.superadmin_name", &bootstrap.superadmin_name)?,
            email,
            password_hash: hash_blocking(password.to_string()).await?,
            role: Role::SuperAdmin,
            created_by: None,
            created_at: now,
            updated_at: now,
        };

        let created = self.admins.create(&admin).await?;
        info!("Bootstrapped superadmin {}", created.email);
        Ok(Some(created))
    }

    async fn ensure_not_last_superadmin(&self) -> Result<(), UseCaseError> {
        if self.admins.count_by_role(Role::SuperAdmin).await? <= 1 {
            return Err(UseCaseError::Conflict(
                "At least one superadmin must remain".to_string(),
            ));
        }
        Ok(())
    }
}

fn ensure_admin_role(role: Role) -> Result<(), UseCaseError> {
    if role.is_admin() {
        Ok(())
    } else {
        Err(UseCaseError::Validation(
            "role must be 'admin' or 'superadmin'".to_string(),
        ))
    }
}

async fn hash_blocking(password: String) -> Result<String, UseCaseError> {
    Ok(tokio::task::spawn_blocking(move || hash_password(&password)).await??)
}
