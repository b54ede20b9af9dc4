// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 管理员仓库（admin_repository）
/// - 学习者仓库（learner_repository）
/// - 主题与词条仓库（topic_repository / entry_repository）
/// - 文化内容仓库（culture_repository）
/// - 访问记录仓库（visitor_log_repository）
/// - 站点设置仓库（setting_repository）
/// - 存储仓库（storage_repository）：管理上传的媒体文件
pub mod admin_repository;
pub mod culture_repository;
pub mod entry_repository;
pub mod errors;
pub mod learner_repository;
pub mod setting_repository;
pub mod storage_repository;
pub mod topic_repository;
pub mod visitor_log_repository;
