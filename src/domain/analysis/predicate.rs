//! Respondent predicates over one dimension.

use serde::{Deserialize, Serialize};

use crate::domain::survey::{Dimension, ResponseRow};

/// "Respondent answered one of `values` for `dimension`" (or did not, when
/// negated).
///
/// Matching is per respondent: a respondent matches when any of its rows
/// holds an accepted value, and a negated predicate matches when none does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    pub dimension: Dimension,
    pub values: Vec<String>,
    pub negated: bool,
}

impl Predicate {
    pub fn equals(dimension: Dimension, value: impl Into<String>) -> Self {
        Self {
            dimension,
            values: vec![value.into()],
            negated: false,
        }
    }

    pub fn one_of<I, S>(dimension: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dimension,
            values: values.into_iter().map(Into::into).collect(),
            negated: false,
        }
    }

    /// Boolean column is true.
    pub fn is_true(dimension: Dimension) -> Self {
        Self::equals(dimension, "true")
    }

    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// True when this row carries an accepted value (ignores negation).
    pub(crate) fn row_hits(&self, row: &ResponseRow) -> bool {
        row.has_any(self.dimension, &self.values)
    }

    /// Applies the predicate to all rows of one respondent.
    pub fn matches_respondent<'a, I>(&self, rows: I) -> bool
    where
        I: IntoIterator<Item = &'a ResponseRow>,
    {
        let hit = rows.into_iter().any(|row| self.row_hits(row));
        hit != self.negated
    }
}
