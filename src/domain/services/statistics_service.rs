// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::localized::LocalizedText;
use crate::domain::models::topic::Topic;
use crate::domain::repositories::visitor_log_repository::TimeRange;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use uuid::Uuid;

/// 统计区间允许的最大天数
pub const MAX_RANGE_DAYS: i64 = 366;
/// 未指定区间时默认统计的天数
pub const DEFAULT_RANGE_DAYS: u64 = 30;

/// 统计错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatisticsError {
    #[error("invalid range: 'from' must not be after 'to'")]
    InvertedRange,
    #[error("invalid range: at most {MAX_RANGE_DAYS} days may be requested")]
    RangeTooLong,
}

/// 闭区间日期范围（按UTC日历日）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// 根据可选的起止日期解析统计区间
    ///
    /// 缺省的 `to` 为今天，缺省的 `from` 为 `to` 之前的 29 天
    pub fn resolve(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, StatisticsError> {
        let to = to.unwrap_or(today);
        let from = from.unwrap_or_else(|| {
            to.checked_sub_days(Days::new(DEFAULT_RANGE_DAYS - 1))
                .unwrap_or(NaiveDate::MIN)
        });

        if from > to {
            return Err(StatisticsError::InvertedRange);
        }
        if (to - from).num_days() + 1 > MAX_RANGE_DAYS {
            return Err(StatisticsError::RangeTooLong);
        }

        Ok(Self { from, to })
    }

    /// 转换为 `[from 00:00, to+1 00:00)` 的时间区间
    pub fn to_time_range(&self) -> TimeRange {
        let start = self.from.and_time(chrono::NaiveTime::MIN).and_utc();
        let end = self
            .to
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX)
            .and_time(chrono::NaiveTime::MIN)
            .and_utc();
        TimeRange { start, end }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |day| *day <= to)
    }
}

/// 某一天的访问次数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub visits: u64,
}

/// 某个主题的访问次数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicVisits {
    pub topic_id: Uuid,
    pub name: LocalizedText,
    pub visits: u64,
}

/// 某个城市的学习者数量
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCount {
    pub city: String,
    pub learners: u64,
}

/// 统计服务
///
/// 把访问记录聚合为图表数据，数据量小，全部在内存中完成
pub struct StatisticsService;

impl StatisticsService {
    /// 按天统计访问次数，区间内每一天都有一个数据点（无访问时为 0）
    pub fn daily_series<I>(range: &DateRange, visits: I) -> Vec<DailyCount>
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        let mut buckets: BTreeMap<NaiveDate, u64> = range.days().map(|day| (day, 0)).collect();

        for visited_at in visits {
            if let Some(count) = buckets.get_mut(&visited_at.date_naive()) {
                *count += 1;
            }
        }

        buckets
            .into_iter()
            .map(|(date, visits)| DailyCount { date, visits })
            .collect()
    }

    /// 按访问次数对主题排序
    ///
    /// 没有访问的主题也会出现（次数为 0）；已删除主题的计数被忽略。
    /// 次数相同时按印尼语名称排序
    pub fn rank_topics(topics: &[Topic], counts: &[(Uuid, u64)]) -> Vec<TopicVisits> {
        let counts: HashMap<Uuid, u64> = counts.iter().copied().collect();

        let mut ranked: Vec<TopicVisits> = topics
            .iter()
            .map(|topic| TopicVisits {
                topic_id: topic.id,
                name: topic.name.clone(),
                visits: counts.get(&topic.id).copied().unwrap_or(0),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.visits
                .cmp(&a.visits)
                .then_with(|| a.name.id.to_lowercase().cmp(&b.name.id.to_lowercase()))
        });
        ranked
    }

    /// 按城市统计学习者数量
    ///
    /// 城市名去除首尾空白后不区分大小写分组，展示首次出现的写法；空白城市被忽略
    pub fn city_breakdown<I>(cities: I) -> Vec<CityCount>
    where
        I: IntoIterator<Item = String>,
    {
        let mut groups: HashMap<String, CityCount> = HashMap::new();

        for city in cities {
            let display = city.trim();
            if display.is_empty() {
                continue;
            }
            groups
                .entry(display.to_lowercase())
                .or_insert_with(|| CityCount {
                    city: display.to_string(),
                    learners: 0,
                })
                .learners += 1;
        }

        let mut breakdown: Vec<CityCount> = groups.into_values().collect();
        breakdown.sort_by(|a, b| {
            b.learners
                .cmp(&a.learners)
                .then_with(|| a.city.to_lowercase().cmp(&b.city.to_lowercase()))
        });
        breakdown
    }
}

#[cfg(test)]
#[path = "statistics_service_test.rs"]
mod tests;
