// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 包含应用程序的所有业务用例实现
/// 每个用例代表一个完整的业务流程，遵循单一职责原则
pub mod admin_use_case;
pub mod culture_use_case;
pub mod dashboard_use_case;
pub mod entry_use_case;
pub mod errors;
pub mod learner_use_case;
pub mod media_use_case;
pub mod playlist_use_case;
pub mod setting_use_case;
pub mod shared;
pub mod topic_use_case;
pub mod visitor_log_use_case;
