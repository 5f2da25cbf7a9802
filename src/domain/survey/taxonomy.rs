//! Closed answer sets of the survey and the normalization of free text into them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Folds a label for lookup: trimmed, lowercase, ASCII hyphens as en dashes.
fn fold_label(label: &str) -> String {
    label.trim().replace('-', "–").to_lowercase()
}

/// Declares an enum whose variants carry the survey's display label.
///
/// Variant declaration order is the categorical order used for charts.
macro_rules! labeled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// All values in categorical order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Looks a value up by label, ignoring case and hyphen style.
            pub fn from_label(label: &str) -> Option<Self> {
                let folded = fold_label(label);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| fold_label(value.label()) == folded)
            }

            /// Labels in categorical order.
            pub fn labels() -> &'static [&'static str] {
                &[$($label),+]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        }
    };
}

labeled_enum!(
    /// Organisation headcount bucket.
    OrgSize {
        Under50 => "< 50 employees",
        From50To199 => "50–199",
        From200To999 => "200–999",
        From1000To10000 => "1,000–10,000",
        Over10000 => "10,000+",
    }
);

impl OrgSize {
    /// Compact label used on reveal charts.
    pub fn short_label(&self) -> &'static str {
        match self {
            OrgSize::Under50 => "< 50 emp",
            OrgSize::From50To199 => "50–199",
            OrgSize::From200To999 => "200–999",
            OrgSize::From1000To10000 => "1K–10K",
            OrgSize::Over10000 => "10,000+",
        }
    }
}

labeled_enum!(
    /// How often the respondent uses AI tools.
    AiUsageFrequency {
        MultipleTimesPerDay => "Multiple times per day",
        Daily => "Daily",
        Weekly => "Weekly",
        Rarely => "Rarely",
        Never => "Never",
    }
);

impl AiUsageFrequency {
    pub fn is_daily_or_more(&self) -> bool {
        matches!(self, AiUsageFrequency::MultipleTimesPerDay | AiUsageFrequency::Daily)
    }

    /// Compact label used on reveal charts.
    pub fn short_label(&self) -> &'static str {
        match self {
            AiUsageFrequency::MultipleTimesPerDay => "Multiple times/day",
            other => other.label(),
        }
    }
}

labeled_enum!(
    /// Whether the respondent holds a management role.
    ManagementLevel {
        Management => "Management",
        NonManagement => "Non-Management",
    }
);

labeled_enum!(
    /// Architecture trend the respondent's organisation is following.
    ArchitectureTrend {
        CentralizedWarehouse => "Centralized warehouse",
        Lakehouse => "Lakehouse",
        DataMesh => "Data mesh / federated",
        EventDriven => "Event-driven",
        Other => "Other",
    }
);

labeled_enum!(
    /// Expected change in team size for 2026.
    TeamGrowth {
        Grow => "Grow",
        StayTheSame => "Stay the same",
        Shrink => "Shrink",
        NotSure => "Not sure",
    }
);

static ARCHITECTURE_ANSWERS: Lazy<HashMap<String, ArchitectureTrend>> = Lazy::new(|| {
    [
        ("Centralized warehouse", ArchitectureTrend::CentralizedWarehouse),
        ("Lakehouse", ArchitectureTrend::Lakehouse),
        ("Data mesh / federated ownership", ArchitectureTrend::DataMesh),
        ("Data mesh / federated", ArchitectureTrend::DataMesh),
        ("Event-driven architecture", ArchitectureTrend::EventDriven),
        ("Event-driven", ArchitectureTrend::EventDriven),
    ]
    .into_iter()
    .map(|(answer, trend)| (fold_label(answer), trend))
    .collect()
});

/// Maps a raw architecture answer to the fixed taxonomy; free text is `Other`.
pub fn normalize_architecture(raw: &str) -> ArchitectureTrend {
    ARCHITECTURE_ANSWERS
        .get(&fold_label(raw))
        .copied()
        .unwrap_or(ArchitectureTrend::Other)
}

/// Training topics kept as-is; every other answer is bucketed into `Other`.
pub const MAIN_EDUCATION_TOPICS: &[&str] = &[
    "AI/LLM integration",
    "Data modeling",
    "Semantics / ontologies / knowledge graphs",
    "Architecture patterns",
    "Streaming / event-driven systems",
    "Career growth / leadership",
    "Reliability engineering",
];

pub const OTHER_LABEL: &str = "Other";

/// Buckets a raw education-topic answer into the main topics or `Other`.
pub fn normalize_education_topic(raw: &str) -> String {
    let trimmed = raw.trim();
    MAIN_EDUCATION_TOPICS
        .iter()
        .find(|topic| **topic == trimmed)
        .map(|topic| topic.to_string())
        .unwrap_or_else(|| OTHER_LABEL.to_string())
}

// Answer labels referenced by headline metrics and the question bank.
pub const BOTTLENECK_LEGACY: &str = "Legacy / tech debt";
pub const BOTTLENECK_LEADERSHIP: &str = "Lack of leadership";
pub const BOTTLENECK_TALENT: &str = "Talent / hiring";
pub const BOTTLENECK_DATA_QUALITY: &str = "Data quality";
pub const BOTTLENECK_REQUIREMENTS: &str = "Poor requirements";
pub const MODELING_AD_HOC: &str = "Ad-hoc";
pub const MODELING_GOING_WELL: &str = "None / modeling is going well";
pub const NO_ORCHESTRATION: &str = "No orchestration / ad-hoc";
pub const AI_ADOPTION_INTERNAL_PLATFORMS: &str = "Building internal AI platforms";
pub const INDUSTRY_HEALTHCARE: &str = "Healthcare";
pub const INDUSTRY_MANUFACTURING: &str = "Manufacturing / Industrial";

/// The pain-point pairs offered for cohort analysis.
pub const PAIN_POINT_PAIRS: &[&str] = &[
    "Lack of ownership + Move fast pressure",
    "Hard to maintain + Move fast pressure",
    "Hard to maintain + Lack of ownership",
    "Move fast pressure + Tools inadequate",
    "Lack of ownership + Tools inadequate",
    "Hard to maintain + Tools inadequate",
];
