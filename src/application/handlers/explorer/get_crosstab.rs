//! GetCrosstabHandler - Query handler for two-way tables.

use std::sync::Arc;

use super::view::{population, DimensionView};
use crate::domain::analysis::{AnalysisError, Aggregator, Crosstab, Normalization};
use crate::domain::survey::{Dataset, Dimension, ResponseFilter};

/// Query for a crosstab of two dimensions.
#[derive(Debug, Clone, Default)]
pub struct GetCrosstabQuery {
    pub row_dimension: String,
    pub column_dimension: String,
    pub normalization: Normalization,
    pub filter: ResponseFilter,
}

pub type GetCrosstabResult = DimensionView<Crosstab>;

/// Handler for crosstabs.
pub struct GetCrosstabHandler {
    dataset: Arc<Dataset>,
}

impl GetCrosstabHandler {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn handle(&self, query: GetCrosstabQuery) -> Result<GetCrosstabResult, AnalysisError> {
        let row_dimension = Dimension::parse(&query.row_dimension)?;
        let column_dimension = Dimension::parse(&query.column_dimension)?;
        let scoped = population(&self.dataset, &query.filter);

        let table = Aggregator::crosstab(&scoped, row_dimension, column_dimension, query.normalization);
        Ok(DimensionView::new(
            vec![row_dimension, column_dimension],
            scoped.respondent_count(),
            table,
        ))
    }
}
