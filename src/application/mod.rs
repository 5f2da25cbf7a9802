//! Application layer - Startup wiring and query handlers.
//!
//! `SurveyCatalog` loads the dataset once and builds the question bank;
//! explorer handlers read from the catalog's shared dataset.

mod catalog;
pub mod handlers;

pub use catalog::SurveyCatalog;
pub use handlers::{
    CompareCohortsHandler, CompareCohortsQuery, CompareGroupsHandler, CompareGroupsQuery,
    DimensionView, GetCrosstabHandler, GetCrosstabQuery, GetDistributionHandler,
    GetDistributionQuery, GetHeadlineMetricsHandler, GetHeadlineMetricsQuery,
};
