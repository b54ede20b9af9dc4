// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::learner::Learner;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct OnboardLearnerRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub phone: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
}

#[derive(Debug, Serialize)]
pub struct OnboardLearnerResponse {
    pub learner: Learner,
    pub token: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LearnerListQuery {
    pub q: Option<String>,
    pub city: Option<String>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}
