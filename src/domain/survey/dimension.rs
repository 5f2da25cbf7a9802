//! Groupable columns of the survey table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::taxonomy::{AiUsageFrequency, OrgSize, TeamGrowth};
use crate::domain::analysis::AnalysisError;

/// A categorical column the aggregator can group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Role,
    OrgSize,
    Industry,
    Region,
    AiUsageFrequency,
    AiAdoption,
    Management,
    Bottleneck,
    ModelingApproach,
    Architecture,
    EducationTopic,
    Orchestration,
    TeamGrowth,
    StorageCategory,
    FightsFires,
    TeamFocus,
    ModelingPainPoint,
    AiHelpsWith,
    PainPointPair,
}

impl Dimension {
    pub const ALL: &'static [Dimension] = &[
        Dimension::Role,
        Dimension::OrgSize,
        Dimension::Industry,
        Dimension::Region,
        Dimension::AiUsageFrequency,
        Dimension::AiAdoption,
        Dimension::Management,
        Dimension::Bottleneck,
        Dimension::ModelingApproach,
        Dimension::Architecture,
        Dimension::EducationTopic,
        Dimension::Orchestration,
        Dimension::TeamGrowth,
        Dimension::StorageCategory,
        Dimension::FightsFires,
        Dimension::TeamFocus,
        Dimension::ModelingPainPoint,
        Dimension::AiHelpsWith,
        Dimension::PainPointPair,
    ];

    /// Column name as exposed to the explorer.
    pub fn column_name(&self) -> &'static str {
        match self {
            Dimension::Role => "role_clean",
            Dimension::OrgSize => "org_size",
            Dimension::Industry => "industry",
            Dimension::Region => "region",
            Dimension::AiUsageFrequency => "ai_usage_frequency",
            Dimension::AiAdoption => "ai_adoption",
            Dimension::Management => "management_vs_non",
            Dimension::Bottleneck => "bottleneck_clean",
            Dimension::ModelingApproach => "modeling_clean",
            Dimension::Architecture => "architecture_clean",
            Dimension::EducationTopic => "education_clean",
            Dimension::Orchestration => "orchestration_clean",
            Dimension::TeamGrowth => "team_growth_2026",
            Dimension::StorageCategory => "Category",
            Dimension::FightsFires => "fights_fires",
            Dimension::TeamFocus => "team_focus",
            Dimension::ModelingPainPoint => "modeling_pain_points",
            Dimension::AiHelpsWith => "ai_helps_with",
            Dimension::PainPointPair => "pain_point_pair",
        }
    }

    /// True when one respondent may hold several values of this dimension.
    pub fn is_multi_select(&self) -> bool {
        matches!(
            self,
            Dimension::TeamFocus
                | Dimension::ModelingPainPoint
                | Dimension::AiHelpsWith
                | Dimension::PainPointPair
        )
    }

    /// Natural ordering of the answers, for dimensions that have one.
    pub fn categorical_order(&self) -> Option<&'static [&'static str]> {
        match self {
            Dimension::OrgSize => Some(OrgSize::labels()),
            Dimension::AiUsageFrequency => Some(AiUsageFrequency::labels()),
            Dimension::TeamGrowth => Some(TeamGrowth::labels()),
            _ => None,
        }
    }

    /// Sorts labels by categorical order, or lexically when there is none.
    ///
    /// Labels outside the categorical order go last, lexically.
    pub fn sort_labels(&self, labels: &mut [String]) {
        match self.categorical_order() {
            Some(order) => labels.sort_by(|a, b| {
                let rank = |label: &str| order.iter().position(|o| *o == label).unwrap_or(order.len());
                rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
            }),
            None => labels.sort(),
        }
    }

    /// Resolves an explorer column name (or the snake_case variant name).
    pub fn parse(name: &str) -> Result<Self, AnalysisError> {
        let trimmed = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.column_name() == trimmed || d.variant_name() == trimmed)
            .ok_or_else(|| AnalysisError::UnknownDimension(trimmed.to_string()))
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Dimension::Role => "role",
            Dimension::OrgSize => "org_size",
            Dimension::Industry => "industry",
            Dimension::Region => "region",
            Dimension::AiUsageFrequency => "ai_usage_frequency",
            Dimension::AiAdoption => "ai_adoption",
            Dimension::Management => "management",
            Dimension::Bottleneck => "bottleneck",
            Dimension::ModelingApproach => "modeling_approach",
            Dimension::Architecture => "architecture",
            Dimension::EducationTopic => "education_topic",
            Dimension::Orchestration => "orchestration",
            Dimension::TeamGrowth => "team_growth",
            Dimension::StorageCategory => "storage_category",
            Dimension::FightsFires => "fights_fires",
            Dimension::TeamFocus => "team_focus",
            Dimension::ModelingPainPoint => "modeling_pain_point",
            Dimension::AiHelpsWith => "ai_helps_with",
            Dimension::PainPointPair => "pain_point_pair",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

impl FromStr for Dimension {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
