//! CSV Dataset Source Adapter
//!
//! Reads the exploded survey export: one row per (respondent, multi-select
//! value), with a leading unnamed index column that is ignored.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::foundation::RespondentId;
use crate::domain::survey::taxonomy::{
    normalize_architecture, normalize_education_topic, AiUsageFrequency, ManagementLevel, OrgSize,
    TeamGrowth,
};
use crate::domain::survey::{ResponseRow, ResponseRowBuilder};
use crate::ports::{DatasetSource, SourceError};

/// Separator between pain-point pairs in the `pain_point_pair` column.
const PAIR_SEPARATOR: char = '|';

/// One CSV record as written by the export. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    id: String,
    #[serde(default)]
    role_clean: String,
    #[serde(default)]
    org_size: String,
    #[serde(default)]
    industry: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    ai_usage_frequency: String,
    #[serde(default)]
    ai_adoption: String,
    #[serde(default)]
    management_vs_non: String,
    #[serde(default)]
    bottleneck_clean: String,
    #[serde(default)]
    modeling_clean: String,
    #[serde(default)]
    architecture_trend: String,
    #[serde(default)]
    education_topic: String,
    /// Pre-cleaned columns written by earlier exports; used when the raw
    /// answer column is absent.
    #[serde(default)]
    architecture_clean: String,
    #[serde(default)]
    education_clean: String,
    #[serde(default)]
    orchestration_clean: String,
    #[serde(default)]
    team_growth_2026: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(default)]
    fights_fires: String,
    #[serde(default)]
    team_focus: String,
    #[serde(default)]
    modeling_pain_points: String,
    #[serde(default)]
    ai_helps_with: String,
    #[serde(default)]
    pain_point_pair: String,
}

/// Loads survey rows from a CSV file.
///
/// By default a record that cannot be parsed is skipped with a warning;
/// [`CsvDatasetSource::strict`] turns the first bad record into an error.
#[derive(Debug, Clone)]
pub struct CsvDatasetSource {
    path: PathBuf,
    strict: bool,
}

impl CsvDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            strict: false,
        }
    }

    /// Fail on the first unparseable record instead of skipping it.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses rows from any reader holding the CSV export.
    pub fn read_rows<R: Read>(&self, input: R) -> Result<Vec<ResponseRow>, SourceError> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
        let headers = reader
            .headers()
            .map_err(|e| parse_error(0, &e))?
            .clone();

        let mut rows = Vec::new();
        let mut skipped = 0usize;

        for result in reader.records() {
            let outcome = result
                .map_err(|e| parse_error(e.position().map_or(0, |p| p.line()), &e))
                .and_then(|record| parse_record(&record, &headers));

            match outcome {
                Ok(row) => rows.push(row),
                Err(err) if !self.strict => {
                    skipped += 1;
                    warn!(error = %err, "Skipping survey record");
                }
                Err(err) => return Err(err),
            }
        }

        info!(rows = rows.len(), skipped, "Survey CSV parsed");
        Ok(rows)
    }
}

impl DatasetSource for CsvDatasetSource {
    fn load(&self) -> Result<Vec<ResponseRow>, SourceError> {
        let file = File::open(&self.path)?;
        self.read_rows(file)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}

fn parse_error(line: u64, err: &csv::Error) -> SourceError {
    SourceError::Parse {
        line,
        reason: err.to_string(),
    }
}

fn parse_record(record: &StringRecord, headers: &StringRecord) -> Result<ResponseRow, SourceError> {
    let line = record.position().map_or(0, |p| p.line());
    let raw: RawRecord = record
        .deserialize(Some(headers))
        .map_err(|e| parse_error(line, &e))?;

    let respondent_id: RespondentId = raw.id.parse().map_err(|_| invalid(line, "id", &raw.id))?;
    let mut builder = ResponseRowBuilder::new(respondent_id)
        .role(raw.role_clean.trim())
        .industry(raw.industry.trim())
        .region(raw.region.trim())
        .ai_adoption(raw.ai_adoption.trim())
        .bottleneck(raw.bottleneck_clean.trim())
        .modeling_approach(raw.modeling_clean.trim())
        .orchestration(raw.orchestration_clean.trim())
        .storage_category(raw.category.trim())
        .fights_fires(parse_bool(line, &raw.fights_fires)?);

    if let Some(size) = closed(line, "org_size", &raw.org_size, OrgSize::from_label)? {
        builder = builder.org_size(size);
    }
    if let Some(frequency) = closed(
        line,
        "ai_usage_frequency",
        &raw.ai_usage_frequency,
        AiUsageFrequency::from_label,
    )? {
        builder = builder.ai_usage_frequency(frequency);
    }
    if let Some(level) = closed(
        line,
        "management_vs_non",
        &raw.management_vs_non,
        ManagementLevel::from_label,
    )? {
        builder = builder.management(level);
    }
    if let Some(growth) = closed(line, "team_growth_2026", &raw.team_growth_2026, TeamGrowth::from_label)? {
        builder = builder.team_growth(growth);
    }
    // Unanswered or free-text answers land in `Other`.
    let architecture = present(&raw.architecture_trend).or_else(|| present(&raw.architecture_clean));
    builder = builder.architecture(normalize_architecture(architecture.unwrap_or_default()));
    let topic = present(&raw.education_topic).or_else(|| present(&raw.education_clean));
    builder = builder.education_topic(normalize_education_topic(topic.unwrap_or_default()));
    if let Some(focus) = present(&raw.team_focus) {
        builder = builder.team_focus(focus);
    }
    if let Some(pain_point) = present(&raw.modeling_pain_points) {
        builder = builder.modeling_pain_point(pain_point);
    }
    if let Some(helps_with) = present(&raw.ai_helps_with) {
        builder = builder.ai_helps_with(helps_with);
    }
    for pair in raw.pain_point_pair.split(PAIR_SEPARATOR).filter_map(present) {
        builder = builder.pain_point_pair(pair);
    }

    Ok(builder.build())
}

/// Trimmed value, or `None` for a blank cell.
fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        None
    } else {
        Some(trimmed)
    }
}

fn closed<T>(
    line: u64,
    field: &'static str,
    value: &str,
    from_label: fn(&str) -> Option<T>,
) -> Result<Option<T>, SourceError> {
    match present(value) {
        None => Ok(None),
        Some(label) => from_label(label).map(Some).ok_or_else(|| invalid(line, field, label)),
    }
}

/// Blank means false, matching an unanswered fire-fighting flag.
fn parse_bool(line: u64, value: &str) -> Result<bool, SourceError> {
    match present(value) {
        None => Ok(false),
        Some("True" | "true" | "TRUE" | "1" | "1.0") => Ok(true),
        Some("False" | "false" | "FALSE" | "0" | "0.0") => Ok(false),
        Some(other) => Err(invalid(line, "fights_fires", other)),
    }
}

fn invalid(line: u64, field: &'static str, value: &str) -> SourceError {
    SourceError::InvalidValue {
        line,
        field,
        value: value.to_string(),
    }
}
