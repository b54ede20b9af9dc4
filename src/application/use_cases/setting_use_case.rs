// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::{authorize, UseCaseError};
use crate::application::dto::setting_dto::UpdateSettingRequest;
use crate::domain::models::setting::Setting;
use crate::domain::repositories::setting_repository::SettingRepository;
use crate::domain::services::access_policy::{AccessPolicy, Actor};
use crate::utils::validators::validate_setting_key;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// 站点设置用例
pub struct SettingUseCase {
    settings: Arc<dyn SettingRepository>,
}

impl SettingUseCase {
    pub fn new(settings: Arc<dyn SettingRepository>) -> Self {
        Self { settings }
    }

    pub async fn list(&self) -> Result<Vec<Setting>, UseCaseError> {
        Ok(self.settings.list_all().await?)
    }

    pub async fn put(
        &self,
        actor: &Actor,
        key: &str,
        request: UpdateSettingRequest,
    ) -> Result<Setting, UseCaseError> {
        authorize(AccessPolicy::can_change_settings(actor))?;
        validate_setting_key(key)?;
        request.validate()?;

        let setting = self
            .settings
            .upsert(&Setting {
                key: key.to_string(),
                value: request.value,
                updated_by: Some(actor.id),
                updated_at: Utc::now(),
            })
            .await?;
        info!("Setting {} updated by {}", setting.key, actor.id);
        Ok(setting)
    }
}
