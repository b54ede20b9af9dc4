// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::{authorize, UseCaseError};
use crate::application::dto::learner_dto::{
    LearnerListQuery, OnboardLearnerRequest, OnboardLearnerResponse,
};
use crate::application::dto::pagination::{ListParams, Paginated};
use crate::domain::models::admin::Role;
use crate::domain::models::learner::Learner;
use crate::domain::repositories::learner_repository::{LearnerQuery, LearnerRepository};
use crate::domain::services::access_policy::{AccessPolicy, Actor};
use crate::domain::services::auth_service::TokenService;
use crate::utils::validators::{normalize_phone, require_text};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// 学习者用例
pub struct LearnerUseCase {
    learners: Arc<dyn LearnerRepository>,
    tokens: Arc<TokenService>,
}

impl LearnerUseCase {
    pub fn new(
        learners: Arc<dyn LearnerRepository>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            learners,
            tokens,
        }
    }

    /// 首次使用引导：登记学习者并签发 `user` 角色的令牌
    pub async fn onboard(
        &self,
        request: OnboardLearnerRequest,
    ) -> Result<OnboardLearnerResponse, UseCaseError> {
        request.validate()?;

        let now = Utc::now();
        let learner = Learner {
            id: Uuid::new_v4(),
            name: require_text("name", &request.name)?,
            phone: normalize_phone(&request.phone)?,
            city: require_text("city", &request.city)?,
            created_at: now,
            updated_at: now,
        };

        let learner = self.learners.create(&learner).await?;
        let token = self.tokens.issue(learner.id, Role::User, &learner.name)?;
        info!("Learner {} onboarded from {}", learner.id, learner.city);

        Ok(OnboardLearnerResponse { learner, token })
    }

    /// 当前令牌对应的学习者
    pub async fn me(&self, actor: &Actor) -> Result<Learner, UseCaseError> {
        self.get(actor.id).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Learner, UseCaseError> {
        self.learners
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Learner"))
    }

    pub async fn list(&self, query: LearnerListQuery) -> Result<Paginated<Learner>, UseCaseError> {
        query.validate()?;
        let page = ListParams {
            limit: query.limit,
            offset: query.offset,
        }
        .page();

        let (learners, total) = self
            .learners
            .list(LearnerQuery {
                search: query.q,
                city: query.city,
                page,
            })
            .await?;
        Ok(Paginated::new(learners, total))
    }

    /// 删除学习者及其访问记录
    pub async fn delete(&self, actor: &Actor, id: Uuid) -> Result<(), UseCaseError> {
        authorize(AccessPolicy::can_manage_admins(actor))?;
        self.get(id).await?;

        let removed = self.learners.delete_cascade(id).await?;
        info!("Learner {} deleted with {} visits by {}", id, removed, actor.id);
        Ok(())
    }
}
