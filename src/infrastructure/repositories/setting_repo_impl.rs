// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::setting::Setting;
use crate::domain::repositories::errors::RepositoryError;
use crate::domain::repositories::setting_repository::SettingRepository;
use crate::infrastructure::database::entities::setting;
use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use std::sync::Arc;

/// 站点设置仓库实现
#[derive(Clone)]
pub struct SettingRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl SettingRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<setting::Model> for Setting {
    fn from(model: setting::Model) -> Self {
        Self {
            key: model.key,
            value: model.value,
            updated_by: model.updated_by,
            updated_at: model.updated_at.into(),
        }
    }
}

#[async_trait]
impl SettingRepository for SettingRepositoryImpl {
    async fn list_all(&self) -> Result<Vec<Setting>, RepositoryError> {
        let models = setting::Entity::find()
            .order_by_asc(setting::Column::Key)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find(&self, key: &str) -> Result<Option<Setting>, RepositoryError> {
        let model = setting::Entity::find_by_id(key.to_string())
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn upsert(&self, setting: &Setting) -> Result<Setting, RepositoryError> {
        let model = setting::ActiveModel {
            key: Set(setting.key.clone()),
            value: Set(setting.value.clone()),
            updated_by: Set(setting.updated_by),
            updated_at: Set(setting.updated_at.into()),
        };

        setting::Entity::insert(model)
            .on_conflict(
                OnConflict::column(setting::Column::Key)
                    .update_columns([
                        setting::Column::Value,
                        setting::Column::UpdatedBy,
                        setting::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db.as_ref())
            .await?;

        Ok(setting.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::common::test_db;
    use chrono::Utc;
    use uuid::Uuid;

    fn setting(key: &str, value: &str) -> Setting {
        Setting {
            key: key.to_string(),
            value: value.to_string(),
            updated_by: Some(Uuid::new_v4()),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_upsert_overwrites_existing_value() {
        let repo = SettingRepositoryImpl::new(test_db().await);
        repo.upsert(&setting("site.title", "Kang Agam")).await.unwrap();
        repo.upsert(&setting("site.title", "Kamus Kang Agam")).await.unwrap();
        repo.upsert(&setting("contact.email", "info@kang.id")).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].key, "contact.email");
        assert_eq!(
            repo.find("site.title").await.unwrap().map(|s| s.value),
            Some("Kamus Kang Agam".to_string())
        );
        assert!(repo.find("missing").await.unwrap().is_none());
    }
}
