//! CompareCohortsHandler - Query handler for pain-point-pair cohorts.

use std::sync::Arc;

use super::view::{population, DimensionView};
use crate::domain::analysis::{AnalysisError, CohortComparison};
use crate::domain::survey::{Dataset, Dimension, ResponseFilter};

/// Query comparing respondents reporting `pair` with everyone else.
#[derive(Debug, Clone, Default)]
pub struct CompareCohortsQuery {
    /// One of `taxonomy::PAIN_POINT_PAIRS`; other values yield an empty cohort.
    pub pair: String,
    pub compare_dimension: String,
    pub filter: ResponseFilter,
}

pub type CompareCohortsResult = DimensionView<CohortComparison>;

/// Handler for cohort comparisons.
pub struct CompareCohortsHandler {
    dataset: Arc<Dataset>,
}

impl CompareCohortsHandler {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn handle(&self, query: CompareCohortsQuery) -> Result<CompareCohortsResult, AnalysisError> {
        let compare_dimension = Dimension::parse(&query.compare_dimension)?;
        let scoped = population(&self.dataset, &query.filter);

        let comparison = CohortComparison::build(&scoped, query.pair.trim(), compare_dimension);
        Ok(DimensionView::new(
            vec![Dimension::PainPointPair, compare_dimension],
            scoped.respondent_count(),
            comparison,
        ))
    }
}
