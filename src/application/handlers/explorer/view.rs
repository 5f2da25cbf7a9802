//! DimensionView - Explorer results tagged with what produced them.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::survey::{Dataset, Dimension, ResponseFilter};

/// An explorer result plus the dimensions and population behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionView<T> {
    /// Dimensions used, in query order (empty for headline metrics).
    pub dimensions: Vec<Dimension>,
    /// Distinct respondents left after filtering.
    pub respondents: u32,
    pub data: T,
}

impl<T> DimensionView<T> {
    pub fn new(dimensions: Vec<Dimension>, respondents: u32, data: T) -> Self {
        Self {
            dimensions,
            respondents,
            data,
        }
    }
}

/// Applies `filter`, borrowing the dataset when nothing is filtered out.
pub(super) fn population<'a>(dataset: &'a Dataset, filter: &ResponseFilter) -> Cow<'a, Dataset> {
    if filter.is_unrestricted() {
        Cow::Borrowed(dataset)
    } else {
        Cow::Owned(dataset.filtered(filter))
    }
}
