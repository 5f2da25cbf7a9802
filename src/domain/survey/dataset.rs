//! Immutable survey table.

use std::collections::{BTreeSet, HashMap};

use super::{DatasetError, Dimension, ResponseFilter, ResponseRow};
use crate::domain::foundation::RespondentId;

/// The loaded survey: exploded rows plus their distinct respondents.
///
/// # Invariants
///
/// - Never mutated after construction; filtering returns a new `Dataset`.
/// - Every respondent's single-select answers agree across its rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<ResponseRow>,
    respondents: BTreeSet<RespondentId>,
}

impl Dataset {
    /// Validates and wraps a table of rows.
    ///
    /// # Errors
    ///
    /// - `InconsistentRespondent` if two rows of one respondent disagree on a
    ///   single-select answer
    pub fn new(rows: Vec<ResponseRow>) -> Result<Self, DatasetError> {
        let mut first_rows: HashMap<RespondentId, usize> = HashMap::new();
        for (idx, row) in rows.iter().enumerate() {
            match first_rows.get(&row.respondent_id) {
                Some(&first) => {
                    if let Some(dimension) = rows[first].single_select_mismatch(row) {
                        return Err(DatasetError::InconsistentRespondent {
                            respondent_id: row.respondent_id,
                            dimension,
                        });
                    }
                }
                None => {
                    first_rows.insert(row.respondent_id, idx);
                }
            }
        }

        Ok(Self::from_validated(rows))
    }

    /// A dataset with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    // Rows taken from an already-validated dataset stay consistent.
    fn from_validated(rows: Vec<ResponseRow>) -> Self {
        let respondents = rows.iter().map(|r| r.respondent_id).collect();
        Self { rows, respondents }
    }

    pub fn rows(&self) -> &[ResponseRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of distinct respondents, the denominator of every share.
    pub fn respondent_count(&self) -> u32 {
        self.respondents.len() as u32
    }

    pub fn respondent_ids(&self) -> &BTreeSet<RespondentId> {
        &self.respondents
    }

    pub fn is_empty(&self) -> bool {
        self.respondents.is_empty()
    }

    /// Rows accepted by an explorer filter.
    pub fn filtered(&self, filter: &ResponseFilter) -> Dataset {
        if filter.is_unrestricted() {
            return self.clone();
        }
        self.filter_rows(|row| filter.accepts(row))
    }

    /// Rows matching an arbitrary predicate.
    pub fn filter_rows<F>(&self, mut keep: F) -> Dataset
    where
        F: FnMut(&ResponseRow) -> bool,
    {
        Self::from_validated(self.rows.iter().filter(|row| keep(*row)).cloned().collect())
    }

    /// Every respondent with at least one row satisfying `matches`.
    pub fn respondents_where<F>(&self, mut matches: F) -> BTreeSet<RespondentId>
    where
        F: FnMut(&ResponseRow) -> bool,
    {
        self.rows
            .iter()
            .filter(|row| matches(*row))
            .map(|row| row.respondent_id)
            .collect()
    }

    /// Distinct answers present for `dimension`, in display order.
    pub fn distinct_values(&self, dimension: Dimension) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .rows
            .iter()
            .flat_map(|row| row.values(dimension))
            .collect();
        let mut values: Vec<String> = unique.into_iter().map(str::to_string).collect();
        dimension.sort_labels(&mut values);
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::taxonomy::OrgSize;

    fn sample_rows() -> Vec<ResponseRow> {
        vec![
            ResponseRow::builder(1)
                .industry("Tech")
                .org_size(OrgSize::Over10000)
                .team_focus("Fighting fires")
                .build(),
            ResponseRow::builder(1)
                .industry("Tech")
                .org_size(OrgSize::Over10000)
                .team_focus("Platform")
                .build(),
            ResponseRow::builder(2)
                .industry("Finance")
                .org_size(OrgSize::Under50)
                .build(),
        ]
    }

    #[test]
    fn counts_distinct_respondents_not_rows() {
        let dataset = Dataset::new(sample_rows()).unwrap();
        assert_eq!(dataset.row_count(), 3);
        assert_eq!(dataset.respondent_count(), 2);
    }

    #[test]
    fn rejects_conflicting_single_select_answers() {
        let mut rows = sample_rows();
        rows.push(ResponseRow::builder(2).industry("Retail").org_size(OrgSize::Under50).build());

        let err = Dataset::new(rows).unwrap_err();
        assert_eq!(
            err,
            DatasetError::InconsistentRespondent {
                respondent_id: RespondentId::new(2),
                dimension: Dimension::Industry,
            }
        );
    }

    #[test]
    fn empty_dataset_has_no_respondents() {
        let dataset = Dataset::empty();
        assert!(dataset.is_empty());
        assert_eq!(dataset.respondent_count(), 0);
    }

    #[test]
    fn filtered_returns_new_dataset() {
        let dataset = Dataset::new(sample_rows()).unwrap();
        let finance = dataset.filtered(&ResponseFilter::all().with_industries(["Finance"]));

        assert_eq!(finance.respondent_count(), 1);
        assert_eq!(dataset.respondent_count(), 2);
    }

    #[test]
    fn respondents_where_deduplicates() {
        let dataset = Dataset::new(sample_rows()).unwrap();
        let tech = dataset.respondents_where(|row| row.industry == "Tech");
        assert_eq!(tech.len(), 1);
    }

    #[test]
    fn distinct_values_follow_categorical_order() {
        let dataset = Dataset::new(sample_rows()).unwrap();
        assert_eq!(
            dataset.distinct_values(Dimension::OrgSize),
            vec!["< 50 employees".to_string(), "10,000+".to_string()]
        );
        assert_eq!(
            dataset.distinct_values(Dimension::Industry),
            vec!["Finance".to_string(), "Tech".to_string()]
        );
    }
}
