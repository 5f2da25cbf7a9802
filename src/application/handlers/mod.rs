//! Application handlers.
//!
//! Query handlers that run explorer aggregations over the shared dataset.

pub mod explorer;

pub use explorer::{
    CompareCohortsHandler, CompareCohortsQuery, CompareCohortsResult, CompareGroupsHandler,
    CompareGroupsQuery, CompareGroupsResult, DimensionView, GetCrosstabHandler, GetCrosstabQuery,
    GetCrosstabResult, GetDistributionHandler, GetDistributionQuery, GetDistributionResult,
    GetHeadlineMetricsHandler, GetHeadlineMetricsQuery, GetHeadlineMetricsResult,
};
