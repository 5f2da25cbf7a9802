//! One exploded row of the survey table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::taxonomy::{AiUsageFrequency, ArchitectureTrend, ManagementLevel, OrgSize, TeamGrowth};
use super::Dimension;
use crate::domain::foundation::RespondentId;

/// A (respondent, multi-select expansion) record.
///
/// # Invariants
///
/// - Single-select fields are identical on every row of a respondent
///   (checked by `Dataset::new`).
/// - Multi-select fields hold at most one value per row; a respondent with
///   three pain points contributes three rows.
/// - Empty strings and `None` mean "no answer" and belong to no group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRow {
    pub respondent_id: RespondentId,
    pub role: String,
    pub org_size: Option<OrgSize>,
    pub industry: String,
    pub region: String,
    pub ai_usage_frequency: Option<AiUsageFrequency>,
    pub ai_adoption: String,
    pub management: Option<ManagementLevel>,
    pub bottleneck: String,
    pub modeling_approach: String,
    pub architecture: Option<ArchitectureTrend>,
    pub education_topic: String,
    pub orchestration: String,
    pub team_growth: Option<TeamGrowth>,
    pub storage_category: String,
    pub fights_fires: bool,
    pub team_focus: Option<String>,
    pub modeling_pain_point: Option<String>,
    pub ai_helps_with: Option<String>,
    pub pain_point_pairs: BTreeSet<String>,
}

impl ResponseRow {
    /// Creates a builder with every answer unset.
    pub fn builder(respondent_id: u32) -> ResponseRowBuilder {
        ResponseRowBuilder::new(RespondentId::new(respondent_id))
    }

    /// The row's values for `dimension`; empty when unanswered.
    ///
    /// Only `PainPointPair` can yield more than one value.
    pub fn values(&self, dimension: Dimension) -> Vec<&str> {
        fn text(value: &str) -> Vec<&str> {
            if value.trim().is_empty() {
                Vec::new()
            } else {
                vec![value]
            }
        }

        match dimension {
            Dimension::Role => text(&self.role),
            Dimension::OrgSize => self.org_size.iter().map(|v| v.label()).collect(),
            Dimension::Industry => text(&self.industry),
            Dimension::Region => text(&self.region),
            Dimension::AiUsageFrequency => {
                self.ai_usage_frequency.iter().map(|v| v.label()).collect()
            }
            Dimension::AiAdoption => text(&self.ai_adoption),
            Dimension::Management => self.management.iter().map(|v| v.label()).collect(),
            Dimension::Bottleneck => text(&self.bottleneck),
            Dimension::ModelingApproach => text(&self.modeling_approach),
            Dimension::Architecture => self.architecture.iter().map(|v| v.label()).collect(),
            Dimension::EducationTopic => text(&self.education_topic),
            Dimension::Orchestration => text(&self.orchestration),
            Dimension::TeamGrowth => self.team_growth.iter().map(|v| v.label()).collect(),
            Dimension::StorageCategory => text(&self.storage_category),
            Dimension::FightsFires => vec![if self.fights_fires { "true" } else { "false" }],
            Dimension::TeamFocus => self.team_focus.as_deref().map(text).unwrap_or_default(),
            Dimension::ModelingPainPoint => self
                .modeling_pain_point
                .as_deref()
                .map(text)
                .unwrap_or_default(),
            Dimension::AiHelpsWith => self.ai_helps_with.as_deref().map(text).unwrap_or_default(),
            Dimension::PainPointPair => self
                .pain_point_pairs
                .iter()
                .map(String::as_str)
                .filter(|pair| !pair.trim().is_empty())
                .collect(),
        }
    }

    /// True when any of the row's values for `dimension` is in `accepted`.
    pub fn has_any(&self, dimension: Dimension, accepted: &[String]) -> bool {
        self.values(dimension)
            .iter()
            .any(|value| accepted.iter().any(|a| a.as_str() == *value))
    }

    /// First single-select dimension on which two rows disagree.
    pub fn single_select_mismatch(&self, other: &ResponseRow) -> Option<Dimension> {
        Dimension::ALL
            .iter()
            .copied()
            .filter(|d| !d.is_multi_select())
            .find(|d| self.values(*d) != other.values(*d))
    }
}

/// Builder for `ResponseRow`, mostly used by adapters and tests.
#[derive(Debug, Clone)]
pub struct ResponseRowBuilder {
    row: ResponseRow,
}

impl ResponseRowBuilder {
    pub fn new(respondent_id: RespondentId) -> Self {
        Self {
            row: ResponseRow {
                respondent_id,
                role: String::new(),
                org_size: None,
                industry: String::new(),
                region: String::new(),
                ai_usage_frequency: None,
                ai_adoption: String::new(),
                management: None,
                bottleneck: String::new(),
                modeling_approach: String::new(),
                architecture: None,
                education_topic: String::new(),
                orchestration: String::new(),
                team_growth: None,
                storage_category: String::new(),
                fights_fires: false,
                team_focus: None,
                modeling_pain_point: None,
                ai_helps_with: None,
                pain_point_pairs: BTreeSet::new(),
            },
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.row.role = role.into();
        self
    }

    pub fn org_size(mut self, org_size: OrgSize) -> Self {
        self.row.org_size = Some(org_size);
        self
    }

    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.row.industry = industry.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.row.region = region.into();
        self
    }

    pub fn ai_usage_frequency(mut self, frequency: AiUsageFrequency) -> Self {
        self.row.ai_usage_frequency = Some(frequency);
        self
    }

    pub fn ai_adoption(mut self, adoption: impl Into<String>) -> Self {
        self.row.ai_adoption = adoption.into();
        self
    }

    pub fn management(mut self, level: ManagementLevel) -> Self {
        self.row.management = Some(level);
        self
    }

    pub fn bottleneck(mut self, bottleneck: impl Into<String>) -> Self {
        self.row.bottleneck = bottleneck.into();
        self
    }

    pub fn modeling_approach(mut self, approach: impl Into<String>) -> Self {
        self.row.modeling_approach = approach.into();
        self
    }

    pub fn architecture(mut self, trend: ArchitectureTrend) -> Self {
        self.row.architecture = Some(trend);
        self
    }

    pub fn education_topic(mut self, topic: impl Into<String>) -> Self {
        self.row.education_topic = topic.into();
        self
    }

    pub fn orchestration(mut self, orchestration: impl Into<String>) -> Self {
        self.row.orchestration = orchestration.into();
        self
    }

    pub fn team_growth(mut self, growth: TeamGrowth) -> Self {
        self.row.team_growth = Some(growth);
        self
    }

    pub fn storage_category(mut self, category: impl Into<String>) -> Self {
        self.row.storage_category = category.into();
        self
    }

    pub fn fights_fires(mut self, fights_fires: bool) -> Self {
        self.row.fights_fires = fights_fires;
        self
    }

    pub fn team_focus(mut self, focus: impl Into<String>) -> Self {
        self.row.team_focus = Some(focus.into());
        self
    }

    pub fn modeling_pain_point(mut self, pain_point: impl Into<String>) -> Self {
        self.row.modeling_pain_point = Some(pain_point.into());
        self
    }

    pub fn ai_helps_with(mut self, helps_with: impl Into<String>) -> Self {
        self.row.ai_helps_with = Some(helps_with.into());
        self
    }

    pub fn pain_point_pair(mut self, pair: impl Into<String>) -> Self {
        self.row.pain_point_pairs.insert(pair.into());
        self
    }

    pub fn build(self) -> ResponseRow {
        self.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanswered_text_has_no_values() {
        let row = ResponseRow::builder(1).role("  ").build();
        assert!(row.values(Dimension::Role).is_empty());
        assert!(row.values(Dimension::OrgSize).is_empty());
        assert!(row.values(Dimension::TeamFocus).is_empty());
    }

    #[test]
    fn closed_answers_use_survey_labels() {
        let row = ResponseRow::builder(1)
            .org_size(OrgSize::From200To999)
            .team_growth(TeamGrowth::NotSure)
            .build();
        assert_eq!(row.values(Dimension::OrgSize), vec!["200–999"]);
        assert_eq!(row.values(Dimension::TeamGrowth), vec!["Not sure"]);
    }

    #[test]
    fn fights_fires_is_always_answered() {
        let row = ResponseRow::builder(1).build();
        assert_eq!(row.values(Dimension::FightsFires), vec!["false"]);
        let row = ResponseRow::builder(1).fights_fires(true).build();
        assert_eq!(row.values(Dimension::FightsFires), vec!["true"]);
    }

    #[test]
    fn pain_point_pairs_yield_every_pair() {
        let row = ResponseRow::builder(1)
            .pain_point_pair("Hard to maintain + Tools inadequate")
            .pain_point_pair("Hard to maintain + Lack of ownership")
            .build();
        assert_eq!(row.values(Dimension::PainPointPair).len(), 2);
    }

    #[test]
    fn has_any_matches_accepted_values() {
        let row = ResponseRow::builder(1)
            .ai_usage_frequency(AiUsageFrequency::Daily)
            .build();
        let accepted = vec!["Multiple times per day".to_string(), "Daily".to_string()];
        assert!(row.has_any(Dimension::AiUsageFrequency, &accepted));
        assert!(!row.has_any(Dimension::AiUsageFrequency, &["Never".to_string()]));
    }

    #[test]
    fn mismatch_ignores_multi_select_columns() {
        let a = ResponseRow::builder(1).industry("Tech").team_focus("Fires").build();
        let b = ResponseRow::builder(1).industry("Tech").team_focus("Platform").build();
        assert_eq!(a.single_select_mismatch(&b), None);

        let c = ResponseRow::builder(1).industry("Finance").build();
        assert_eq!(a.single_select_mismatch(&c), Some(Dimension::Industry));
    }
}
