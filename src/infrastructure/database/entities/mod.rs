// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 定义数据库表对应的实体结构
/// 使用SeaORM框架进行对象关系映射
/// 三语字段按语言拆成 `_id` / `_su` / `_en` 三列
pub mod admin;
pub mod culture_entry;
pub mod culture_topic;
pub mod entry;
pub mod learner;
pub mod setting;
pub mod topic;
pub mod visitor_log;
