// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义应用程序层的数据传输对象
/// 用于在API请求和领域模型之间传输数据
pub mod admin_dto;
pub mod culture_dto;
pub mod dashboard_dto;
pub mod learner_dto;
pub mod media_dto;
pub mod pagination;
pub mod playlist_dto;
pub mod setting_dto;
pub mod topic_dto;
pub mod visitor_dto;
