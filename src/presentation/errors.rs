// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::use_cases::errors::UseCaseError;
use crate::domain::repositories::errors::RepositoryError;
use crate::domain::services::auth_service::AuthError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    /// 请求本身不合法，例如无法解析的表单
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(UseCaseError::Validation(message.into()).into())
    }

    fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<UseCaseError>() {
            return match err {
                UseCaseError::Validation(_) => StatusCode::BAD_REQUEST,
                UseCaseError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                UseCaseError::Forbidden(_) => StatusCode::FORBIDDEN,
                UseCaseError::NotFound(_) => StatusCode::NOT_FOUND,
                UseCaseError::Conflict(_) => StatusCode::CONFLICT,
                UseCaseError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
                UseCaseError::Repository(inner) => repository_status(inner),
                UseCaseError::Auth(inner) => auth_status(inner),
                UseCaseError::Storage(_) | UseCaseError::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
        }
        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            return repository_status(err);
        }
        if let Some(err) = self.0.downcast_ref::<AuthError>() {
            return auth_status(err);
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    match err {
        RepositoryError::NotFound => StatusCode::NOT_FOUND,
        RepositoryError::Conflict(_) => StatusCode::CONFLICT,
        RepositoryError::Database(_) | RepositoryError::Corrupted(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn auth_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::MissingToken | AuthError::Expired | AuthError::InvalidToken => {
            StatusCode::UNAUTHORIZED
        }
        AuthError::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error_message = if status.is_server_error() {
            // Internal details stay in the logs
            error!("Request failed: {:#}", self.0);
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: impl Into<anyhow::Error>) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn test_use_case_errors_map_to_statuses() {
        assert_eq!(
            status_of(UseCaseError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(UseCaseError::Forbidden("no".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(UseCaseError::Conflict("dup".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(UseCaseError::TooManyRequests("slow down".into())),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            status_of(UseCaseError::Repository(RepositoryError::NotFound)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_unknown_errors_are_internal() {
        assert_eq!(
            status_of(anyhow::anyhow!("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(status_of(AuthError::Expired), StatusCode::UNAUTHORIZED);
    }
}
