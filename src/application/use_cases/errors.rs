// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::errors::RepositoryError;
use crate::domain::repositories::storage_repository::StorageError;
use crate::domain::services::access_policy::AccessDecision;
use crate::domain::services::audio_sequencer::PlaylistError;
use crate::domain::services::auth_service::AuthError;
use crate::domain::services::media_service::MediaError;
use crate::domain::services::statistics_service::StatisticsError;
use crate::utils::validators::ValidationError;
use thiserror::Error;

/// 用例错误类型
///
/// 表示层据此映射 HTTP 状态码
#[derive(Error, Debug)]
pub enum UseCaseError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    TooManyRequests(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UseCaseError {
    pub fn not_found(what: &str) -> Self {
        Self::NotFound(format!("{} not found", what))
    }
}

impl From<ValidationError> for UseCaseError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<validator::ValidationErrors> for UseCaseError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(format!("Validation failed: {}", err))
    }
}

impl From<MediaError> for UseCaseError {
    fn from(err: MediaError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<PlaylistError> for UseCaseError {
    fn from(err: PlaylistError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<StatisticsError> for UseCaseError {
    fn from(err: StatisticsError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<tokio::task::JoinError> for UseCaseError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// 将访问策略的结论转换为 `Forbidden`
pub fn authorize(decision: AccessDecision) -> Result<(), UseCaseError> {
    match decision {
        AccessDecision::Allowed => Ok(()),
        AccessDecision::Denied(reason) => Err(UseCaseError::Forbidden(reason)),
    }
}
