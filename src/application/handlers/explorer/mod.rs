//! Explorer query handlers.
//!
//! Read-only handlers that resolve dimension names, apply the sidebar
//! filter and run one aggregation over the shared dataset.

mod compare_cohorts;
mod compare_groups;
mod get_crosstab;
mod get_distribution;
mod get_headline_metrics;
mod view;

pub use compare_cohorts::{CompareCohortsHandler, CompareCohortsQuery, CompareCohortsResult};
pub use compare_groups::{CompareGroupsHandler, CompareGroupsQuery, CompareGroupsResult};
pub use get_crosstab::{GetCrosstabHandler, GetCrosstabQuery, GetCrosstabResult};
pub use get_distribution::{GetDistributionHandler, GetDistributionQuery, GetDistributionResult};
pub use get_headline_metrics::{
    GetHeadlineMetricsHandler, GetHeadlineMetricsQuery, GetHeadlineMetricsResult,
};
pub use view::DimensionView;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::survey::{Dataset, ResponseRow};

    pub const SAMPLE_PAIR: &str = "Hard to maintain + Move fast pressure";

    /// Four respondents over two regions; respondent 1 has two pair rows.
    pub fn sample() -> Dataset {
        Dataset::new(vec![
            ResponseRow::builder(1)
                .industry("Tech")
                .region("Europe")
                .fights_fires(true)
                .pain_point_pair(SAMPLE_PAIR)
                .build(),
            ResponseRow::builder(1)
                .industry("Tech")
                .region("Europe")
                .fights_fires(true)
                .pain_point_pair("Hard to maintain + Lack of ownership")
                .build(),
            ResponseRow::builder(2).industry("Finance").region("Europe").build(),
            ResponseRow::builder(3)
                .industry("Tech")
                .region("North America")
                .fights_fires(true)
                .build(),
            ResponseRow::builder(4).industry("Retail").region("North America").build(),
        ])
        .expect("sample rows are consistent")
    }
}
