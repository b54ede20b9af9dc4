// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::statistics_service::{
    CityCount, DailyCount, DateRange, TopicVisits,
};
use serde::Serialize;

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub admins: u64,
    pub learners: u64,
    pub topics: u64,
    pub entries: u64,
    pub culture_topics: u64,
    pub culture_entries: u64,
    /// 统计区间内的访问次数
    pub visits: u64,
}

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub range: DateRange,
    pub totals: Totals,
    pub visits_by_topic: Vec<TopicVisits>,
    pub visits_by_day: Vec<DailyCount>,
    pub learners_by_city: Vec<CityCount>,
}
