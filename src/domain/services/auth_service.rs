// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::admin::Role;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// 认证错误类型
#[derive(Error, Debug)]
pub enum AuthError {
    /// 令牌缺失或格式错误
    #[error("Missing or malformed token")]
    MissingToken,
    /// 令牌已过期
    #[error("Token expired")]
    Expired,
    /// 令牌签名或声明无效
    #[error("Invalid token")]
    InvalidToken,
    /// 密码哈希失败
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

/// JWT 声明
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// 管理员或学习者ID
    pub sub: Uuid,
    pub role: Role,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

/// 令牌服务
///
/// 使用 HS256 签发和校验访问令牌，管理员与学习者使用不同的有效期
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    admin_ttl: Duration,
    learner_ttl: Duration,
}

impl TokenService {
    /// 创建新的令牌服务
    ///
    /// # 参数
    ///
    /// * `secret` - HS256 签名密钥
    /// * `admin_ttl_minutes` - 管理员令牌有效期（分钟）
    /// * `learner_ttl_days` - 学习者令牌有效期（天）
    pub fn new(secret: &str, admin_ttl_minutes: i64, learner_ttl_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            admin_ttl: Duration::minutes(admin_ttl_minutes),
            learner_ttl: Duration::days(learner_ttl_days),
        }
    }

    /// 签发令牌，有效期由角色决定
    pub fn issue(&self, subject: Uuid, role: Role, name: &str) -> Result<String, AuthError> {
        let ttl = if role.is_admin() {
            self.admin_ttl
        } else {
            self.learner_ttl
        };
        self.issue_with_ttl(subject, role, name, ttl)
    }

    pub(crate) fn issue_with_ttl(
        &self,
        subject: Uuid,
        role: Role,
        name: &str,
        ttl: Duration,
    ) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject,
            role,
            name: name.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| AuthError::InvalidToken)
    }

    /// 校验令牌并返回声明
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken,
            })
    }
}

/// 使用 Argon2id 生成密码哈希（PHC 字符串）
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// 校验密码，哈希无法解析时返回 false
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash is not a valid PHC string: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 30, 7)
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = service();
        let id = Uuid::new_v4();

        let token = service.issue(id, Role::SuperAdmin, "Dadang").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, id);
        assert_eq!(claims.role, Role::SuperAdmin);
        assert_eq!(claims.name, "Dadang");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_learner_tokens_use_day_ttl() {
        let service = service();
        let token = service.issue(Uuid::new_v4(), Role::User, "Euis").unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service();
        let token = service
            .issue_with_ttl(Uuid::new_v4(), Role::Admin, "Ujang", Duration::minutes(-10))
            .unwrap();

        assert!(matches!(service.verify(&token), Err(AuthError::Expired)));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = TokenService::new("another-secret", 30, 7);
        let token = other.issue(Uuid::new_v4(), Role::Admin, "Ujang").unwrap();

        assert!(matches!(service().verify(&token), Err(AuthError::InvalidToken)));
        assert!(matches!(service().verify("not-a-jwt"), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_password_hash_verifies_only_original_password() {
        let hash = hash_password("rahasia123").unwrap();

        assert_ne!(hash, "rahasia123");
        assert!(verify_password("rahasia123", &hash));
        assert!(!verify_password("rahasia124", &hash));
        assert!(!verify_password("rahasia123", "plain-text"));
    }
}
