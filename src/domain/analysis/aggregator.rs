//! Aggregator - Distinct-respondent counting, shares and cohort splits.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::{CompareStat, CountOptions, Crosstab, GroupOrder, GroupStat, Normalization, Predicate};
use crate::domain::foundation::{Percentage, RespondentId};
use crate::domain::survey::{Dataset, Dimension};

/// Which groups `rate_by` reports, and in what order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupSelection {
    /// Every group present in the data, in the dimension's display order.
    AllSorted,
    /// Exactly these groups, in this order.
    Listed(Vec<String>),
}

impl GroupSelection {
    pub fn listed<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GroupSelection::Listed(groups.into_iter().map(Into::into).collect())
    }
}

/// Stateless aggregation functions over a [`Dataset`].
///
/// Every count is a count of distinct respondents, never of rows: a
/// respondent exploded over several multi-select rows counts once per group.
pub struct Aggregator;

impl Aggregator {
    /// Distinct respondents per value of `dimension`.
    ///
    /// # Algorithm
    /// percentage = respondents in group / respondents in the whole dataset
    ///
    /// # Edge Cases
    /// - Empty dataset: Returns an empty Vec
    /// - Respondents without an answer: Counted in the denominator only
    /// - Equal counts under `CountDescending`: Ordered by key ascending
    pub fn count_distinct(
        dataset: &Dataset,
        dimension: Dimension,
        options: &CountOptions,
    ) -> Vec<GroupStat> {
        let denominator = dataset.respondent_count();
        let groups = Self::respondents_by_value(dataset, dimension);

        let mut stats: Vec<GroupStat> = groups
            .into_iter()
            .map(|(key, ids)| GroupStat::new(key, ids.len() as u32, denominator))
            .collect();

        match options.order {
            GroupOrder::CountDescending => stats.sort_by(|a, b| {
                b.respondent_count
                    .cmp(&a.respondent_count)
                    .then_with(|| a.key.cmp(&b.key))
            }),
            // BTreeMap iteration is already lexical.
            GroupOrder::Key => {}
            GroupOrder::Categorical => {
                let mut keys: Vec<String> = stats.iter().map(|s| s.key.clone()).collect();
                dimension.sort_labels(&mut keys);
                let position: HashMap<&str, usize> = keys
                    .iter()
                    .enumerate()
                    .map(|(idx, key)| (key.as_str(), idx))
                    .collect();
                stats.sort_by_key(|s| position.get(s.key.as_str()).copied().unwrap_or(usize::MAX));
            }
        }

        if let Some(top_n) = options.top_n {
            stats.truncate(top_n);
        }
        stats
    }

    /// Distribution of `group_dimension` within each cohort of `compare_dimension`.
    ///
    /// # Edge Cases
    /// - Empty dataset: Returns an empty Vec
    /// - A respondent in several compare cohorts (multi-select) is counted in each
    pub fn compare(
        dataset: &Dataset,
        group_dimension: Dimension,
        compare_dimension: Dimension,
    ) -> Vec<CompareStat> {
        let mut cohorts: BTreeMap<&str, BTreeSet<RespondentId>> = BTreeMap::new();
        let mut cells: BTreeMap<(&str, &str), BTreeSet<RespondentId>> = BTreeMap::new();

        for row in dataset.rows() {
            let compare_values = row.values(compare_dimension);
            let group_values = row.values(group_dimension);
            for compare_value in &compare_values {
                cohorts
                    .entry(*compare_value)
                    .or_default()
                    .insert(row.respondent_id);
                for group_value in &group_values {
                    cells
                        .entry((*compare_value, *group_value))
                        .or_default()
                        .insert(row.respondent_id);
                }
            }
        }

        cells
            .into_iter()
            .map(|((compare_value, group_value), ids)| {
                let cohort_total = cohorts.get(compare_value).map_or(0, |c| c.len() as u32);
                let respondent_count = ids.len() as u32;
                CompareStat {
                    compare_value: compare_value.to_string(),
                    group_value: group_value.to_string(),
                    respondent_count,
                    cohort_total,
                    percentage: Percentage::of(respondent_count, cohort_total),
                }
            })
            .collect()
    }

    /// Two-way table of distinct respondents. See [`Crosstab::build`].
    pub fn crosstab(
        dataset: &Dataset,
        row_dimension: Dimension,
        column_dimension: Dimension,
        normalization: Normalization,
    ) -> Crosstab {
        Crosstab::build(dataset, row_dimension, column_dimension, normalization)
    }

    /// Share of each group's respondents matching `predicate`.
    ///
    /// # Algorithm
    /// For each group g: |respondents in g matching| / |respondents in g|
    ///
    /// # Edge Cases
    /// - Listed group absent from the data: count 0, 0%
    /// - Empty dataset with `AllSorted`: Returns an empty Vec
    pub fn rate_by(
        dataset: &Dataset,
        group_dimension: Dimension,
        selection: GroupSelection,
        predicate: &Predicate,
    ) -> Vec<GroupStat> {
        let groups = Self::respondents_by_value(dataset, group_dimension);
        let matching = Self::matching_respondents(dataset, predicate);

        let keys: Vec<String> = match selection {
            GroupSelection::AllSorted => {
                let mut keys: Vec<String> = groups.keys().map(|k| k.to_string()).collect();
                group_dimension.sort_labels(&mut keys);
                keys
            }
            GroupSelection::Listed(keys) => keys,
        };

        keys.into_iter()
            .map(|key| match groups.get(key.as_str()) {
                Some(members) => {
                    let hits = members.intersection(&matching).count() as u32;
                    GroupStat::new(key, hits, members.len() as u32)
                }
                None => GroupStat::new(key, 0, 0),
            })
            .collect()
    }

    /// Share of all respondents matching `predicate`; 0% on an empty dataset.
    pub fn share(dataset: &Dataset, predicate: &Predicate) -> Percentage {
        let matching = Self::matching_respondents(dataset, predicate);
        Percentage::of(matching.len() as u32, dataset.respondent_count())
    }

    /// Distinct respondents matching `predicate`.
    pub fn matching_respondents(dataset: &Dataset, predicate: &Predicate) -> BTreeSet<RespondentId> {
        let hits = dataset.respondents_where(|row| predicate.row_hits(row));
        if predicate.negated {
            dataset.respondent_ids().difference(&hits).copied().collect()
        } else {
            hits
        }
    }

    fn respondents_by_value(
        dataset: &Dataset,
        dimension: Dimension,
    ) -> BTreeMap<&str, BTreeSet<RespondentId>> {
        let mut groups: BTreeMap<&str, BTreeSet<RespondentId>> = BTreeMap::new();
        for row in dataset.rows() {
            for value in row.values(dimension) {
                groups.entry(value).or_default().insert(row.respondent_id);
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::taxonomy::{OrgSize, TeamGrowth};
    use crate::domain::survey::ResponseRow;

    fn three_respondents() -> Dataset {
        Dataset::new(vec![
            ResponseRow::builder(1).industry("Tech").fights_fires(true).build(),
            ResponseRow::builder(2).industry("Tech").fights_fires(false).build(),
            ResponseRow::builder(3).industry("Finance").fights_fires(true).build(),
        ])
        .unwrap()
    }

    fn stat(stats: &[GroupStat], key: &str) -> GroupStat {
        stats.iter().find(|s| s.key == key).cloned().unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────
    // count_distinct
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn count_distinct_reports_share_of_all_respondents() {
        let stats = Aggregator::count_distinct(
            &three_respondents(),
            Dimension::Industry,
            &CountOptions::default(),
        );

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].key, "Tech");
        assert_eq!(stats[0].respondent_count, 2);
        assert_eq!(stats[0].percentage.value(), 66.7);
        assert_eq!(stats[1].key, "Finance");
        assert_eq!(stats[1].percentage.value(), 33.3);
    }

    #[test]
    fn count_distinct_counts_exploded_respondent_once() {
        let dataset = Dataset::new(vec![
            ResponseRow::builder(1).industry("Tech").team_focus("Platform").build(),
            ResponseRow::builder(1).industry("Tech").team_focus("Analytics").build(),
            ResponseRow::builder(2).industry("Retail").team_focus("Platform").build(),
        ])
        .unwrap();

        let industries =
            Aggregator::count_distinct(&dataset, Dimension::Industry, &CountOptions::default());
        assert_eq!(stat(&industries, "Tech").respondent_count, 1);
        assert_eq!(stat(&industries, "Tech").percentage.value(), 50.0);

        let focus =
            Aggregator::count_distinct(&dataset, Dimension::TeamFocus, &CountOptions::default());
        assert_eq!(stat(&focus, "Platform").percentage.value(), 100.0);
        assert_eq!(stat(&focus, "Analytics").percentage.value(), 50.0);
    }

    #[test]
    fn count_distinct_breaks_count_ties_by_key() {
        let dataset = Dataset::new(vec![
            ResponseRow::builder(1).industry("Retail").build(),
            ResponseRow::builder(2).industry("Energy").build(),
        ])
        .unwrap();

        let stats =
            Aggregator::count_distinct(&dataset, Dimension::Industry, &CountOptions::default());
        let keys: Vec<&str> = stats.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["Energy", "Retail"]);
    }

    #[test]
    fn count_distinct_categorical_order_and_top_n() {
        let dataset = Dataset::new(vec![
            ResponseRow::builder(1).org_size(OrgSize::Over10000).build(),
            ResponseRow::builder(2).org_size(OrgSize::Over10000).build(),
            ResponseRow::builder(3).org_size(OrgSize::Under50).build(),
            ResponseRow::builder(4).org_size(OrgSize::From200To999).build(),
        ])
        .unwrap();

        let ordered = Aggregator::count_distinct(
            &dataset,
            Dimension::OrgSize,
            &CountOptions::ordered(GroupOrder::Categorical),
        );
        let keys: Vec<&str> = ordered.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["< 50 employees", "200–999", "10,000+"]);

        let top = Aggregator::count_distinct(&dataset, Dimension::OrgSize, &CountOptions::top(1));
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].key, "10,000+");
    }

    #[test]
    fn count_distinct_on_empty_dataset_is_empty() {
        let stats =
            Aggregator::count_distinct(&Dataset::empty(), Dimension::Role, &CountOptions::default());
        assert!(stats.is_empty());
    }

    // ─────────────────────────────────────────────────────────────────────
    // compare
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn compare_uses_cohort_denominator() {
        let dataset = Dataset::new(vec![
            ResponseRow::builder(1).industry("Tech").team_growth(TeamGrowth::Grow).build(),
            ResponseRow::builder(2).industry("Tech").team_growth(TeamGrowth::Shrink).build(),
            ResponseRow::builder(3).industry("Finance").team_growth(TeamGrowth::Grow).build(),
        ])
        .unwrap();

        let stats = Aggregator::compare(&dataset, Dimension::TeamGrowth, Dimension::Industry);

        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].compare_value, "Finance");
        assert_eq!(stats[0].percentage.value(), 100.0);
        let tech_grow = stats
            .iter()
            .find(|s| s.compare_value == "Tech" && s.group_value == "Grow")
            .unwrap();
        assert_eq!(tech_grow.cohort_total, 2);
        assert_eq!(tech_grow.percentage.value(), 50.0);
    }

    // ─────────────────────────────────────────────────────────────────────
    // rate_by / share
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn rate_by_reports_fire_fighting_per_industry() {
        let stats = Aggregator::rate_by(
            &three_respondents(),
            Dimension::Industry,
            GroupSelection::AllSorted,
            &Predicate::is_true(Dimension::FightsFires),
        );

        assert_eq!(stats[0].key, "Finance");
        assert_eq!(stats[0].percentage.value(), 100.0);
        assert_eq!(stats[1].key, "Tech");
        assert_eq!(stats[1].percentage.value(), 50.0);
    }

    #[test]
    fn rate_by_keeps_listed_order_and_zero_fills_missing_groups() {
        let stats = Aggregator::rate_by(
            &three_respondents(),
            Dimension::Industry,
            GroupSelection::listed(["Tech", "Healthcare"]),
            &Predicate::is_true(Dimension::FightsFires),
        );

        assert_eq!(stats[0].key, "Tech");
        assert_eq!(stats[1].key, "Healthcare");
        assert_eq!(stats[1].respondent_count, 0);
        assert_eq!(stats[1].percentage, Percentage::ZERO);
    }

    #[test]
    fn share_counts_respondents_not_rows() {
        let dataset = Dataset::new(vec![
            ResponseRow::builder(1).team_focus("Fighting fires").build(),
            ResponseRow::builder(1).team_focus("Platform").build(),
            ResponseRow::builder(2).team_focus("Platform").build(),
        ])
        .unwrap();

        let fires = Predicate::equals(Dimension::TeamFocus, "Fighting fires");
        assert_eq!(Aggregator::share(&dataset, &fires).value(), 50.0);
        assert_eq!(Aggregator::share(&dataset, &fires.not()).value(), 50.0);
    }

    #[test]
    fn share_of_empty_dataset_is_zero() {
        let predicate = Predicate::is_true(Dimension::FightsFires);
        assert_eq!(Aggregator::share(&Dataset::empty(), &predicate), Percentage::ZERO);
    }
}
