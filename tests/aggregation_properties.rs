//! Property tests for distinct-respondent aggregation over generated datasets.

use proptest::prelude::*;

use survey_game::domain::analysis::{
    Aggregator, CountOptions, GroupSelection, Normalization, Predicate,
};
use survey_game::domain::survey::taxonomy::PAIN_POINT_PAIRS;
use survey_game::domain::survey::{Dataset, Dimension, ResponseRow};

const INDUSTRIES: &[&str] = &["Finance", "Healthcare", "Tech"];
const REGIONS: &[&str] = &["Asia", "Europe", "North America"];

#[derive(Debug, Clone)]
struct Respondent {
    industry: usize,
    region: usize,
    fires: bool,
    pairs: Vec<usize>,
}

fn respondent() -> impl Strategy<Value = Respondent> {
    (
        0..INDUSTRIES.len(),
        0..REGIONS.len(),
        any::<bool>(),
        prop::collection::vec(0..PAIN_POINT_PAIRS.len(), 0..4),
    )
        .prop_map(|(industry, region, fires, pairs)| Respondent {
            industry,
            region,
            fires,
            pairs,
        })
}

/// One row per reported pair, or a single row when none is reported.
fn explode(respondents: &[Respondent], copies: usize) -> Dataset {
    let mut rows = Vec::new();
    for (id, r) in respondents.iter().enumerate() {
        let base = ResponseRow::builder(id as u32 + 1)
            .industry(INDUSTRIES[r.industry])
            .region(REGIONS[r.region])
            .fights_fires(r.fires);
        for _ in 0..copies {
            if r.pairs.is_empty() {
                rows.push(base.clone().build());
            }
            for pair in &r.pairs {
                rows.push(base.clone().pain_point_pair(PAIN_POINT_PAIRS[*pair]).build());
            }
        }
    }
    Dataset::new(rows).unwrap()
}

proptest! {
    #[test]
    fn single_select_percentages_sum_to_hundred(
        respondents in prop::collection::vec(respondent(), 1..40),
    ) {
        let dataset = explode(&respondents, 1);
        let stats = Aggregator::count_distinct(&dataset, Dimension::Industry, &CountOptions::default());

        let tenths: u32 = stats.iter().map(|s| u32::from(s.percentage.tenths())).sum();
        prop_assert!((999..=1001).contains(&tenths), "sum was {tenths}");
        let counted: u32 = stats.iter().map(|s| s.respondent_count).sum();
        prop_assert_eq!(counted, respondents.len() as u32);
    }

    #[test]
    fn multi_select_groups_never_exceed_population(
        respondents in prop::collection::vec(respondent(), 1..40),
    ) {
        let dataset = explode(&respondents, 1);
        let stats = Aggregator::count_distinct(&dataset, Dimension::PainPointPair, &CountOptions::default());

        for stat in &stats {
            prop_assert!(stat.respondent_count <= dataset.respondent_count());
            prop_assert!(stat.percentage.value() <= 100.0);
        }
    }

    #[test]
    fn duplicated_rows_do_not_change_counts(
        respondents in prop::collection::vec(respondent(), 0..30),
    ) {
        let once = explode(&respondents, 1);
        let thrice = explode(&respondents, 3);

        for dimension in [Dimension::Industry, Dimension::PainPointPair] {
            prop_assert_eq!(
                Aggregator::count_distinct(&once, dimension, &CountOptions::default()),
                Aggregator::count_distinct(&thrice, dimension, &CountOptions::default())
            );
        }
        let fires = Predicate::is_true(Dimension::FightsFires);
        prop_assert_eq!(
            Aggregator::rate_by(&once, Dimension::Region, GroupSelection::AllSorted, &fires),
            Aggregator::rate_by(&thrice, Dimension::Region, GroupSelection::AllSorted, &fires)
        );
    }

    #[test]
    fn column_normalized_crosstab_columns_sum_to_hundred(
        respondents in prop::collection::vec(respondent(), 0..40),
    ) {
        let dataset = explode(&respondents, 1);
        let table = Aggregator::crosstab(&dataset, Dimension::Industry, Dimension::Region, Normalization::Column);
        let shares = table.shares.clone().unwrap();

        for c in 0..table.column_labels.len() {
            let tenths: u32 = shares.iter().map(|row| u32::from(row[c].tenths())).sum();
            prop_assert!(tenths == 0 || (999..=1001).contains(&tenths), "column {c} sums to {tenths}");
        }
    }

    #[test]
    fn negated_share_complements_share(
        respondents in prop::collection::vec(respondent(), 1..40),
    ) {
        let dataset = explode(&respondents, 1);
        let fires = Predicate::is_true(Dimension::FightsFires);

        let yes = Aggregator::matching_respondents(&dataset, &fires).len();
        let no = Aggregator::matching_respondents(&dataset, &fires.clone().not()).len();
        prop_assert_eq!(yes + no, respondents.len());
    }
}
