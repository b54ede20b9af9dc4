// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口基于 SeaORM 的具体实现
pub mod admin_repo_impl;
mod common;
pub mod culture_repo_impl;
pub mod entry_repo_impl;
pub mod learner_repo_impl;
pub mod setting_repo_impl;
pub mod topic_repo_impl;
pub mod visitor_log_repo_impl;
