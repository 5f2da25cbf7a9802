//! GetDistributionHandler - Query handler for one dimension's distribution.

use std::sync::Arc;

use super::view::{population, DimensionView};
use crate::domain::analysis::{AnalysisError, Aggregator, CountOptions, GroupOrder, GroupStat};
use crate::domain::survey::{Dataset, Dimension, ResponseFilter};

/// Query for distinct-respondent counts per value of a dimension.
#[derive(Debug, Clone, Default)]
pub struct GetDistributionQuery {
    /// Column or variant name, e.g. `role_clean` or `role`.
    pub dimension: String,
    pub filter: ResponseFilter,
    pub order: GroupOrder,
    /// Overrides the handler's default when set.
    pub top_n: Option<usize>,
}

impl GetDistributionQuery {
    pub fn new(dimension: impl Into<String>) -> Self {
        Self {
            dimension: dimension.into(),
            ..Self::default()
        }
    }
}

pub type GetDistributionResult = DimensionView<Vec<GroupStat>>;

/// Handler for dimension distributions.
pub struct GetDistributionHandler {
    dataset: Arc<Dataset>,
    default_top_n: Option<usize>,
}

impl GetDistributionHandler {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            default_top_n: None,
        }
    }

    pub fn with_default_top_n(mut self, top_n: Option<usize>) -> Self {
        self.default_top_n = top_n;
        self
    }

    pub fn handle(&self, query: GetDistributionQuery) -> Result<GetDistributionResult, AnalysisError> {
        let dimension = Dimension::parse(&query.dimension)?;
        let scoped = population(&self.dataset, &query.filter);

        let options = CountOptions {
            order: query.order,
            top_n: query.top_n.or(self.default_top_n),
        };
        let stats = Aggregator::count_distinct(&scoped, dimension, &options);

        Ok(DimensionView::new(vec![dimension], scoped.respondent_count(), stats))
    }
}
