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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、数据库、认证、存储、上传、限流、指标和跨域等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 认证配置
    pub auth: AuthSettings,
    /// 启动时初始化的超级管理员
    pub bootstrap: BootstrapSettings,
    /// 存储配置
    pub storage: StorageSettings,
    /// 上传配置
    pub uploads: UploadSettings,
    /// 速率限制配置
    pub rate_limiting: RateLimitingSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
    /// 跨域配置
    pub cors: CorsSettings,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 认证配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// JWT 签名密钥 (HS256)
    pub jwt_secret: String,
    /// 管理员令牌有效期（分钟）
    pub admin_token_ttl_minutes: i64,
    /// 学习者令牌有效期（天）
    pub learner_token_ttl_days: i64,
}

/// 超级管理员初始化配置
///
/// 仅当邮箱和密码均已配置且数据库中不存在超级管理员时生效
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapSettings {
    pub superadmin_name: String,
    pub superadmin_email: Option<String>,
    pub superadmin_password: Option<String>,
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 存储类型 (local, s3, memory)
    pub storage_type: String,
    /// 本地存储路径 (当 type=local 时使用)
    pub local_path: Option<String>,
    /// S3 区域
    pub s3_region: Option<String>,
    /// S3 存储桶名称
    pub s3_bucket: Option<String>,
    /// S3 访问密钥
    pub s3_access_key: Option<String>,
    /// S3 密钥
    pub s3_secret_key: Option<String>,
    /// S3 端点 (可选，用于 MinIO 等兼容服务)
    pub s3_endpoint: Option<String>,
    /// 媒体文件对外访问的URL前缀
    pub public_base_url: String,
}

/// 上传配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    /// 单个文件最大字节数
    pub max_bytes: usize,
}

/// 速率限制配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitingSettings {
    /// 是否启用速率限制
    pub enabled: bool,
    /// 每个邮箱每分钟允许的登录尝试次数
    pub login_attempts_per_minute: u32,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// Prometheus 监听地址
    pub address: String,
}

/// 跨域配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// 允许的来源列表，为空时允许任意来源
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `KANGAGAM__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("KANGAGAM")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            .build()?
            .try_deserialize()
    }

    /// 仅使用内置默认值构建配置，测试中使用
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, ConfigError>
    {
        Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            // Default DB settings
            .set_default("database.url", "sqlite://kang_agam.db?mode=rwc")?
            .set_default("database.max_connections", 20)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default Auth settings
            .set_default("auth.jwt_secret", "change-me-in-production")?
            .set_default("auth.admin_token_ttl_minutes", 60 * 12)?
            .set_default("auth.learner_token_ttl_days", 365)?
            .set_default("bootstrap.superadmin_name", "Super Admin")?
            // Default Storage settings
            .set_default("storage.storage_type", "local")?
            .set_default("storage.local_path", "./storage")?
            .set_default("storage.public_base_url", "/api/media")?
            .set_default("uploads.max_bytes", 20 * 1024 * 1024)?
            // Default Rate Limiting settings
            .set_default("rate_limiting.enabled", true)?
            .set_default("rate_limiting.login_attempts_per_minute", 10)?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.address", "0.0.0.0:9000")?
            .set_default("cors.allowed_origins", Vec::<String>::new())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
