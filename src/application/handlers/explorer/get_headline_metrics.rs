//! GetHeadlineMetricsHandler - Query handler for the explorer overview numbers.

use std::sync::Arc;

use super::view::{population, DimensionView};
use crate::domain::analysis::HeadlineMetrics;
use crate::domain::survey::{Dataset, ResponseFilter};

#[derive(Debug, Clone, Default)]
pub struct GetHeadlineMetricsQuery {
    pub filter: ResponseFilter,
}

pub type GetHeadlineMetricsResult = DimensionView<HeadlineMetrics>;

/// Handler for headline metrics. Never fails: an empty population is all zeros.
pub struct GetHeadlineMetricsHandler {
    dataset: Arc<Dataset>,
}

impl GetHeadlineMetricsHandler {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn handle(&self, query: GetHeadlineMetricsQuery) -> GetHeadlineMetricsResult {
        let scoped = population(&self.dataset, &query.filter);
        let metrics = HeadlineMetrics::compute(&scoped);
        DimensionView::new(Vec::new(), metrics.respondents, metrics)
    }
}
