// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 管理员（admin）：后台账号及其角色
/// - 学习者（learner）：通过引导流程创建的终端用户
/// - 主题与词条（topic / entry）：三语词典内容
/// - 文化内容（culture）：文化主题与文章
/// - 访问记录（visitor_log）：统计所依据的原始数据
/// - 站点设置（setting）：键值对配置
pub mod admin;
pub mod culture;
pub mod entry;
pub mod learner;
pub mod localized;
pub mod setting;
pub mod topic;
pub mod visitor_log;
