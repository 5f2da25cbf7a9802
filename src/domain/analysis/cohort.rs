//! Pain-point-pair cohort split.

use serde::{Deserialize, Serialize};

use super::{Aggregator, CountOptions, GroupStat, Predicate};
use crate::domain::foundation::Percentage;
use crate::domain::survey::{Dataset, Dimension};

/// One side of a cohort split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortSide {
    pub respondent_count: u32,
    /// Share of the whole (filtered) population.
    pub percentage: Percentage,
    /// `count_distinct` over the compare dimension, relative to this side.
    pub distribution: Vec<GroupStat>,
}

/// Respondents reporting a pain-point pair versus everyone else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortComparison {
    pub pair: String,
    pub compare_dimension: Dimension,
    pub population: u32,
    pub with_pair: CohortSide,
    pub without_pair: CohortSide,
}

impl CohortComparison {
    /// Splits `dataset` on `pair` and profiles both sides over `compare_dimension`.
    ///
    /// # Edge Cases
    /// - Pair reported by nobody: `with_pair` is empty and 0%
    /// - Empty dataset: Both sides empty and 0%
    pub fn build(dataset: &Dataset, pair: &str, compare_dimension: Dimension) -> Self {
        let population = dataset.respondent_count();
        let has_pair = Aggregator::matching_respondents(
            dataset,
            &Predicate::equals(Dimension::PainPointPair, pair),
        );

        let with = dataset.filter_rows(|row| has_pair.contains(&row.respondent_id));
        let without = dataset.filter_rows(|row| !has_pair.contains(&row.respondent_id));

        Self {
            pair: pair.to_string(),
            compare_dimension,
            population,
            with_pair: Self::side(&with, population, compare_dimension),
            without_pair: Self::side(&without, population, compare_dimension),
        }
    }

    fn side(cohort: &Dataset, population: u32, compare_dimension: Dimension) -> CohortSide {
        let respondent_count = cohort.respondent_count();
        CohortSide {
            respondent_count,
            percentage: Percentage::of(respondent_count, population),
            distribution: Aggregator::count_distinct(
                cohort,
                compare_dimension,
                &CountOptions::default(),
            ),
        }
    }
}
