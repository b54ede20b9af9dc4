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

use crate::application::use_cases::errors::UseCaseError;
use crate::domain::models::admin::Role;
use crate::domain::services::access_policy::Actor;
use crate::domain::services::auth_service::Claims;
use crate::presentation::errors::AppError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

/// 已通过认证的调用方，由认证中间件写入请求扩展
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: Role,
    pub name: String,
}

impl AuthUser {
    pub fn actor(&self) -> Actor {
        Actor {
            id: self.id,
            role: self.role,
        }
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            role: claims.role,
            name: claims.name,
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| UseCaseError::Unauthorized("Authentication required".into()).into())
    }
}

async fn require_role<S, F>(
    parts: &mut Parts,
    state: &S,
    allowed: F,
    message: &str,
) -> Result<AuthUser, AppError>
where
    S: Send + Sync,
    F: Fn(Role) -> bool,
{
    let user = AuthUser::from_request_parts(parts, state).await?;
    if allowed(user.role) {
        Ok(user)
    } else {
        Err(UseCaseError::Forbidden(message.to_string()).into())
    }
}

/// 管理员或超级管理员
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

/// 仅超级管理员
#[derive(Debug, Clone)]
pub struct SuperAdminUser(pub AuthUser);

/// 通过引导流程登记的学习者
#[derive(Debug, Clone)]
pub struct LearnerUser(pub AuthUser);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        require_role(parts, state, |role| role.is_admin(), "Admin access required")
            .await
            .map(AdminUser)
    }
}

impl<S> FromRequestParts<S> for SuperAdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        require_role(
            parts,
            state,
            |role| role == Role::SuperAdmin,
            "Superadmin access required",
        )
        .await
        .map(SuperAdminUser)
    }
}

impl<S> FromRequestParts<S> for LearnerUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        require_role(
            parts,
            state,
            |role| role == Role::User,
            "Learner access required",
        )
        .await
        .map(LearnerUser)
    }
}
