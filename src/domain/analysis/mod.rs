//! Analysis module - Distinct-respondent aggregation over the survey table.
//!
//! Every function here is pure: it reads an immutable [`Dataset`] and returns
//! new values. An empty population produces zero results, never an error.
//!
//! # Components
//!
//! - `Aggregator` - count_distinct, compare, crosstab, rate_by, share
//! - `Predicate` - Respondent-level "answered one of" filters
//! - `Crosstab` - Two-way tables with row/column normalization
//! - `CohortComparison` - Pain-point-pair cohort split
//! - `HeadlineMetrics` - Population-wide headline shares
//!
//! [`Dataset`]: crate::domain::survey::Dataset

mod aggregator;
mod cohort;
mod crosstab;
mod errors;
mod group_stat;
mod headline;
mod predicate;

pub use aggregator::{Aggregator, GroupSelection};
pub use cohort::{CohortComparison, CohortSide};
pub use crosstab::{Crosstab, Normalization};
pub use errors::AnalysisError;
pub use group_stat::{CompareStat, CountOptions, GroupOrder, GroupStat};
pub use headline::HeadlineMetrics;
pub use predicate::Predicate;
