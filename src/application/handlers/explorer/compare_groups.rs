//! CompareGroupsHandler - Query handler for a dimension split by another.

use std::sync::Arc;

use super::view::{population, DimensionView};
use crate::domain::analysis::{AnalysisError, Aggregator, CompareStat};
use crate::domain::survey::{Dataset, Dimension, ResponseFilter};

/// Query for the distribution of `group_dimension` inside each
/// `compare_dimension` cohort.
#[derive(Debug, Clone, Default)]
pub struct CompareGroupsQuery {
    pub group_dimension: String,
    pub compare_dimension: String,
    pub filter: ResponseFilter,
}

pub type CompareGroupsResult = DimensionView<Vec<CompareStat>>;

/// Handler for grouped comparisons.
pub struct CompareGroupsHandler {
    dataset: Arc<Dataset>,
}

impl CompareGroupsHandler {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn handle(&self, query: CompareGroupsQuery) -> Result<CompareGroupsResult, AnalysisError> {
        let group_dimension = Dimension::parse(&query.group_dimension)?;
        let compare_dimension = Dimension::parse(&query.compare_dimension)?;
        let scoped = population(&self.dataset, &query.filter);

        let stats = Aggregator::compare(&scoped, group_dimension, compare_dimension);
        Ok(DimensionView::new(
            vec![group_dimension, compare_dimension],
            scoped.respondent_count(),
            stats,
        ))
    }
}
