//! Headline metrics shown above the explorer charts.

use serde::{Deserialize, Serialize};

use super::{Aggregator, Predicate};
use crate::domain::foundation::Percentage;
use crate::domain::survey::taxonomy::{AiUsageFrequency, TeamGrowth, BOTTLENECK_LEGACY};
use crate::domain::survey::{Dataset, Dimension};

/// Four population-wide shares plus the population size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineMetrics {
    pub respondents: u32,
    pub daily_ai_users: Percentage,
    pub legacy_debt_bottleneck: Percentage,
    pub expect_team_growth: Percentage,
    pub fighting_fires: Percentage,
}

impl HeadlineMetrics {
    /// Computes every metric over `dataset`; all zero when it is empty.
    pub fn compute(dataset: &Dataset) -> Self {
        let daily = AiUsageFrequency::ALL
            .iter()
            .filter(|f| f.is_daily_or_more())
            .map(|f| f.label());

        Self {
            respondents: dataset.respondent_count(),
            daily_ai_users: Aggregator::share(
                dataset,
                &Predicate::one_of(Dimension::AiUsageFrequency, daily),
            ),
            legacy_debt_bottleneck: Aggregator::share(
                dataset,
                &Predicate::equals(Dimension::Bottleneck, BOTTLENECK_LEGACY),
            ),
            expect_team_growth: Aggregator::share(
                dataset,
                &Predicate::equals(Dimension::TeamGrowth, TeamGrowth::Grow.label()),
            ),
            fighting_fires: Aggregator::share(dataset, &Predicate::is_true(Dimension::FightsFires)),
        }
    }
}
