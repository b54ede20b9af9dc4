// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务，这些服务封装了
/// 不依赖任何外部实现的业务规则。
///
/// 包含的服务：
/// - 访问策略（access_policy）：角色与所有权检查
/// - 音频播放（audio_sequencer）：词汇与测验模式的播放状态机
/// - 认证服务（auth_service）：JWT 签发与校验、密码哈希
/// - 媒体服务（media_service）：上传文件校验与内容寻址键
/// - 统计服务（statistics_service）：访问记录聚合为图表数据
pub mod access_policy;
pub mod audio_sequencer;
pub mod auth_service;
pub mod media_service;
pub mod statistics_service;
