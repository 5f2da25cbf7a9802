//! Integration tests for CSV ingestion through the explorer.
//!
//! These tests verify the end-to-end flow:
//! 1. CsvDatasetSource reads an exploded export written to a temp file
//! 2. SurveyCatalog validates the rows and builds the question bank
//! 3. Explorer handlers aggregate by distinct respondent

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use survey_game::adapters::CsvDatasetSource;
use survey_game::application::{
    GetDistributionHandler, GetDistributionQuery, GetHeadlineMetricsHandler,
    GetHeadlineMetricsQuery, SurveyCatalog,
};
use survey_game::domain::analysis::{Aggregator, GroupSelection, Predicate};
use survey_game::domain::foundation::{DomainError, ErrorCode};
use survey_game::domain::survey::Dimension;
use survey_game::ports::{DatasetSource, SourceError};

// =============================================================================
// Test Infrastructure
// =============================================================================

const HEADER: &str = ",id,role_clean,org_size,industry,region,ai_usage_frequency,ai_adoption,\
management_vs_non,bottleneck_clean,modeling_clean,architecture_trend,education_topic,\
orchestration_clean,team_growth_2026,Category,fights_fires,team_focus,modeling_pain_points,\
ai_helps_with,pain_point_pair";

const PAIR_A: &str = "Hard to maintain + Move fast pressure";
const PAIR_B: &str = "Hard to maintain + Lack of ownership";

struct Record<'a> {
    id: &'a str,
    org_size: &'a str,
    industry: &'a str,
    fires: &'a str,
    team_focus: &'a str,
    pairs: &'a str,
}

fn line(index: usize, r: &Record<'_>) -> String {
    format!(
        "{index},{},Data Engineer,{},{},Europe,Daily,Experimenting,Non-Management,\
Legacy / tech debt,Ad-hoc,Lakehouse,Data modeling,Airflow,Grow,Cloud warehouse,{},{},,,{}",
        r.id, r.org_size, r.industry, r.fires, r.team_focus, r.pairs
    )
}

/// Three respondents; respondent 1 is exploded over two rows.
fn three_respondents() -> Vec<Record<'static>> {
    vec![
        Record { id: "1.0", org_size: "200-999", industry: "Tech", fires: "True", team_focus: "Platform", pairs: PAIR_A },
        Record { id: "1.0", org_size: "200-999", industry: "Tech", fires: "True", team_focus: "Analytics", pairs: PAIR_B },
        Record { id: "2", org_size: "200-999", industry: "Tech", fires: "False", team_focus: "", pairs: "" },
        Record { id: "3", org_size: "< 50 employees", industry: "Finance", fires: "1", team_focus: "Platform", pairs: "" },
    ]
}

fn write_csv(records: &[Record<'_>], extra: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for (index, record) in records.iter().enumerate() {
        writeln!(file, "{}", line(index, record)).unwrap();
    }
    for raw in extra {
        writeln!(file, "{raw}").unwrap();
    }
    file
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn csv_to_explorer_counts_distinct_respondents() {
    let file = write_csv(&three_respondents(), &[]);
    let source = CsvDatasetSource::new(file.path());
    assert_eq!(source.load().unwrap().len(), 4);

    let catalog = SurveyCatalog::load(&source, 42).unwrap();
    let handler = GetDistributionHandler::new(catalog.dataset());
    let view = handler.handle(GetDistributionQuery::new("industry")).unwrap();

    assert_eq!(view.respondents, 3);
    assert_eq!(view.data[0].key, "Tech");
    assert_eq!(view.data[0].respondent_count, 2);
    assert_eq!(view.data[0].percentage.value(), 66.7);
    assert_eq!(view.data[1].key, "Finance");
    assert_eq!(view.data[1].percentage.value(), 33.3);
}

#[test]
fn fire_fighting_rate_by_industry() {
    let file = write_csv(&three_respondents(), &[]);
    let catalog = SurveyCatalog::load(&CsvDatasetSource::new(file.path()), 42).unwrap();

    let rates = Aggregator::rate_by(
        &catalog.dataset(),
        Dimension::Industry,
        GroupSelection::AllSorted,
        &Predicate::is_true(Dimension::FightsFires),
    );

    assert_eq!(rates.len(), 2);
    assert_eq!((rates[0].key.as_str(), rates[0].percentage.value()), ("Finance", 100.0));
    assert_eq!((rates[1].key.as_str(), rates[1].percentage.value()), ("Tech", 50.0));
}

#[test]
fn labels_are_normalized_and_multi_select_kept_per_row() {
    let file = write_csv(&three_respondents(), &[]);
    let catalog = SurveyCatalog::load(&CsvDatasetSource::new(file.path()), 42).unwrap();
    let handler = GetDistributionHandler::new(catalog.dataset());

    let sizes = handler.handle(GetDistributionQuery::new("org_size")).unwrap();
    assert_eq!(sizes.data[0].key, "200–999");
    assert_eq!(sizes.data[0].respondent_count, 2);

    let architecture = handler.handle(GetDistributionQuery::new("architecture_clean")).unwrap();
    assert_eq!(architecture.data.len(), 1);
    assert_eq!(architecture.data[0].key, "Lakehouse");
    assert_eq!(architecture.data[0].respondent_count, 3);

    let education = handler.handle(GetDistributionQuery::new("education_clean")).unwrap();
    assert_eq!(education.data[0].key, "Data modeling");
    assert_eq!(education.data[0].respondent_count, 3);

    let focus = handler.handle(GetDistributionQuery::new("team_focus")).unwrap();
    let platform = focus.data.iter().find(|s| s.key == "Platform").unwrap();
    assert_eq!(platform.respondent_count, 2);

    let pairs = handler.handle(GetDistributionQuery::new("pain_point_pair")).unwrap();
    assert_eq!(pairs.data.len(), 2);
    assert!(pairs.data.iter().all(|s| s.respondent_count == 1));
}

#[test]
fn headline_metrics_from_csv() {
    let file = write_csv(&three_respondents(), &[]);
    let catalog = SurveyCatalog::load(&CsvDatasetSource::new(file.path()), 42).unwrap();

    let headline = GetHeadlineMetricsHandler::new(catalog.dataset())
        .handle(GetHeadlineMetricsQuery::default());

    assert_eq!(headline.data.respondents, 3);
    assert_eq!(headline.data.fighting_fires.value(), 66.7);
    assert_eq!(headline.data.daily_ai_users.value(), 100.0);
    assert_eq!(headline.data.legacy_debt_bottleneck.value(), 100.0);
}

#[test]
fn invalid_record_skipped_unless_strict() {
    let bad = "9,4,Analyst,huge,Retail,Europe,,,,,,,,,,,,,,,";
    let file = write_csv(&three_respondents(), &[bad]);

    let lenient = SurveyCatalog::load(&CsvDatasetSource::new(file.path()), 42).unwrap();
    assert_eq!(lenient.dataset().respondent_count(), 3);

    let err = SurveyCatalog::load(&CsvDatasetSource::new(file.path()).strict(), 42).unwrap_err();
    match &err {
        SourceError::InvalidValue { line, field, value } => {
            assert_eq!(*line, 6);
            assert_eq!(*field, "org_size");
            assert_eq!(value, "huge");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let domain: DomainError = err.into();
    assert_eq!(domain.code, ErrorCode::DatasetUnavailable);
    assert_eq!(domain.details.get("line"), Some(&"6".to_string()));
}

#[test]
fn conflicting_single_select_answers_are_rejected() {
    let mut records = three_respondents();
    records[1].industry = "Retail";
    let file = write_csv(&records, &[]);

    let err = SurveyCatalog::load(&CsvDatasetSource::new(file.path()), 42).unwrap_err();
    let domain: DomainError = err.into();
    assert_eq!(domain.code, ErrorCode::InconsistentRespondent);
}

#[test]
fn catalog_shares_one_dataset_across_handlers() {
    let file = write_csv(&three_respondents(), &[]);
    let catalog = SurveyCatalog::load(&CsvDatasetSource::new(file.path()), 42).unwrap();

    let dataset = catalog.dataset();
    let _handler = GetDistributionHandler::new(Arc::clone(&dataset));
    assert!(Arc::strong_count(&dataset) >= 3);
}
