//! Crosstab - Two-way distinct-respondent table with optional normalization.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, RespondentId};
use crate::domain::survey::{Dataset, Dimension};

/// How crosstab cells are scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Raw distinct-respondent counts.
    #[default]
    None,
    /// Each row sums to 100.
    Row,
    /// Each column sums to 100.
    Column,
}

/// Distinct respondents per (row value, column value).
///
/// `counts[r][c]` is aligned with `row_labels[r]` and `column_labels[c]`.
/// `shares` is present for `Row` and `Column` normalization only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crosstab {
    pub row_dimension: Dimension,
    pub column_dimension: Dimension,
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub normalization: Normalization,
    pub counts: Vec<Vec<u32>>,
    pub shares: Option<Vec<Vec<Percentage>>>,
}

impl Crosstab {
    /// Builds the table.
    ///
    /// # Algorithm
    /// cell(r, c) = |respondents with a row where row=r AND col=c|;
    /// normalized cells divide by the sum of their row (or column) counts.
    ///
    /// # Edge Cases
    /// - Empty dataset: No labels, no cells
    /// - Combination never observed: 0
    /// - Row or column summing to 0: Every share 0
    pub fn build(
        dataset: &Dataset,
        row_dimension: Dimension,
        column_dimension: Dimension,
        normalization: Normalization,
    ) -> Self {
        let mut cells: HashMap<(&str, &str), BTreeSet<RespondentId>> = HashMap::new();
        let mut row_values: BTreeSet<&str> = BTreeSet::new();
        let mut column_values: BTreeSet<&str> = BTreeSet::new();

        for row in dataset.rows() {
            let row_side = row.values(row_dimension);
            let column_side = row.values(column_dimension);
            for r in &row_side {
                for c in &column_side {
                    row_values.insert(*r);
                    column_values.insert(*c);
                    cells.entry((*r, *c)).or_default().insert(row.respondent_id);
                }
            }
        }

        let mut row_labels: Vec<String> = row_values.into_iter().map(str::to_string).collect();
        let mut column_labels: Vec<String> = column_values.into_iter().map(str::to_string).collect();
        row_dimension.sort_labels(&mut row_labels);
        column_dimension.sort_labels(&mut column_labels);

        let counts: Vec<Vec<u32>> = row_labels
            .iter()
            .map(|r| {
                column_labels
                    .iter()
                    .map(|c| {
                        cells
                            .get(&(r.as_str(), c.as_str()))
                            .map_or(0, |ids| ids.len() as u32)
                    })
                    .collect()
            })
            .collect();

        let shares = match normalization {
            Normalization::None => None,
            Normalization::Row => Some(normalize_rows(&counts)),
            Normalization::Column => Some(normalize_columns(&counts, column_labels.len())),
        };

        Self {
            row_dimension,
            column_dimension,
            row_labels,
            column_labels,
            normalization,
            counts,
            shares,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.row_labels.is_empty() || self.column_labels.is_empty()
    }

    /// Raw count at (row label, column label); 0 when either label is absent.
    pub fn count(&self, row_label: &str, column_label: &str) -> u32 {
        self.position(row_label, column_label)
            .and_then(|(r, c)| self.counts.get(r)?.get(c).copied())
            .unwrap_or(0)
    }

    /// Normalized share at (row label, column label), when normalized.
    pub fn share(&self, row_label: &str, column_label: &str) -> Option<Percentage> {
        let (r, c) = self.position(row_label, column_label)?;
        self.shares.as_ref()?.get(r)?.get(c).copied()
    }

    fn position(&self, row_label: &str, column_label: &str) -> Option<(usize, usize)> {
        let r = self.row_labels.iter().position(|l| l == row_label)?;
        let c = self.column_labels.iter().position(|l| l == column_label)?;
        Some((r, c))
    }
}

fn normalize_rows(counts: &[Vec<u32>]) -> Vec<Vec<Percentage>> {
    counts
        .iter()
        .map(|row| {
            let total: u32 = row.iter().sum();
            row.iter().map(|&cell| Percentage::of(cell, total)).collect()
        })
        .collect()
}

fn normalize_columns(counts: &[Vec<u32>], column_count: usize) -> Vec<Vec<Percentage>> {
    let totals: Vec<u32> = (0..column_count)
        .map(|c| counts.iter().map(|row| row[c]).sum())
        .collect();
    counts
        .iter()
        .map(|row| {
            row.iter()
                .zip(&totals)
                .map(|(&cell, &total)| Percentage::of(cell, total))
                .collect()
        })
        .collect()
}
