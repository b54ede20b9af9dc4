// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::errors::UseCaseError;
use super::shared::MediaUrls;
use crate::application::dto::media_dto::{MediaContent, MediaUploadResponse};
use crate::domain::repositories::storage_repository::{validate_key, StorageRepository};
use crate::domain::services::media_service::MediaService;
use crate::infrastructure::metrics;
use std::sync::Arc;
use tracing::{debug, info};

/// 媒体上传与读取用例
pub struct MediaUseCase {
    storage: Arc<dyn StorageRepository>,
    urls: MediaUrls,
    max_bytes: usize,
}

impl MediaUseCase {
    pub fn new(storage: Arc<dyn StorageRepository>, urls: MediaUrls, max_bytes: usize) -> Self {
        Self {
            storage,
            urls,
            max_bytes,
        }
    }

    /// 保存上传文件
    ///
    /// 对象键由内容哈希决定，相同文件重复上传不会再次写入存储
    pub async fn upload(
        &self,
        data: &[u8],
        content_type: &str,
    ) -> Result<MediaUploadResponse, UseCaseError> {
        let descriptor = MediaService::describe(data, content_type, self.max_bytes)?;

        if self.storage.exists(&descriptor.key).await? {
            debug!("Media {} already stored", descriptor.key);
        } else {
            self.storage.save(&descriptor.key, data).await?;
            info!("Stored media {} ({} bytes)", descriptor.key, data.len());
        }
        metrics::record_media_upload(descriptor.kind.prefix());

        Ok(MediaUploadResponse {
            url: self.urls.url(&descriptor.key),
            key: descriptor.key,
            content_type: descriptor.content_type,
            size: data.len(),
        })
    }

    pub async fn get(&self, key: &str) -> Result<MediaContent, UseCaseError> {
        if validate_key(key).is_err() {
            return Err(UseCaseError::not_found("Media"));
        }

        let data = self
            .storage
            .get(key)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Media"))?;

        Ok(MediaContent {
            content_type: MediaService::content_type_for_key(key),
            data,
        })
    }
}
