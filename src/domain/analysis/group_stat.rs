//! Result rows of the aggregator.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// Distinct-respondent count and share for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStat {
    pub key: String,
    pub respondent_count: u32,
    pub percentage: Percentage,
}

impl GroupStat {
    pub fn new(key: impl Into<String>, respondent_count: u32, denominator: u32) -> Self {
        Self {
            key: key.into(),
            respondent_count,
            percentage: Percentage::of(respondent_count, denominator),
        }
    }
}

/// How `count_distinct` orders its groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupOrder {
    /// Largest groups first; equal counts fall back to key order.
    #[default]
    CountDescending,
    /// Lexical key order.
    Key,
    /// The dimension's natural answer order (key order when it has none).
    Categorical,
}

/// Options for `Aggregator::count_distinct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountOptions {
    pub order: GroupOrder,
    /// Keep only the first `top_n` groups after ordering.
    pub top_n: Option<usize>,
}

impl CountOptions {
    pub fn ordered(order: GroupOrder) -> Self {
        Self { order, top_n: None }
    }

    pub fn top(top_n: usize) -> Self {
        Self {
            order: GroupOrder::CountDescending,
            top_n: Some(top_n),
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }
}

/// Share of one group value within one compare cohort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareStat {
    pub compare_value: String,
    pub group_value: String,
    pub respondent_count: u32,
    /// Distinct respondents holding `compare_value`, the share's denominator.
    pub cohort_total: u32,
    pub percentage: Percentage,
}
