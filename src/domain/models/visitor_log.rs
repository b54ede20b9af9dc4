// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 访问记录，关联学习者与其访问的主题
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorLog {
    pub id: Uuid,
    pub learner_id: Uuid,
    pub topic_id: Uuid,
    pub visited_at: DateTime<Utc>,
}
