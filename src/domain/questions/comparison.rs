//! Higher/Lower comparison questions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{ChartData, ChartPoint};

/// "X% of `anchor` ... is `compare` higher or lower?"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonQuestion {
    pub category: String,
    /// Predicate phrase, e.g. "teams report fighting fires".
    pub context: String,
    pub anchor: ChartPoint,
    pub compare: ChartPoint,
    pub chart: Arc<ChartData>,
}

impl ComparisonQuestion {
    /// "Higher" is the right call when the compare value is not below the
    /// anchor, so ties resolve to higher.
    pub fn higher_is_correct(&self) -> bool {
        self.compare.value >= self.anchor.value
    }

    pub fn is_correct(&self, says_higher: bool) -> bool {
        says_higher == self.higher_is_correct()
    }
}

/// One chart's worth of groups that comparison questions are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonFamily {
    pub category: String,
    pub context: String,
    pub chart: Arc<ChartData>,
}

impl ComparisonFamily {
    pub fn new(category: impl Into<String>, context: impl Into<String>, chart: ChartData) -> Self {
        Self {
            category: category.into(),
            context: context.into(),
            chart: Arc::new(chart),
        }
    }

    /// Every ordered (anchor, compare) pair of distinct bars, anchor-major.
    ///
    /// A family of k bars yields k·(k−1) questions; one bar yields none.
    pub fn questions(&self) -> Vec<ComparisonQuestion> {
        let points: Vec<ChartPoint> = self.chart.points().collect();
        let mut questions = Vec::with_capacity(points.len() * points.len().saturating_sub(1));

        for (i, anchor) in points.iter().enumerate() {
            for (j, compare) in points.iter().enumerate() {
                if i == j {
                    continue;
                }
                questions.push(ComparisonQuestion {
                    category: self.category.clone(),
                    context: self.context.clone(),
                    anchor: anchor.clone(),
                    compare: compare.clone(),
                    chart: Arc::clone(&self.chart),
                });
            }
        }
        questions
    }
}
