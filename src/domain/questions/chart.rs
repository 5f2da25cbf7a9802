//! Reveal chart payloads.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::GroupStat;
use crate::domain::foundation::Percentage;

/// A labelled value on a reveal chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: Percentage,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: Percentage) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Horizontal bar chart shown when an answer is revealed.
///
/// `labels` and `values` are parallel; `highlight` names the bar to
/// emphasise, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<Percentage>,
    pub highlight: Option<String>,
}

impl ChartData {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            labels: Vec::new(),
            values: Vec::new(),
            highlight: None,
        }
    }

    /// One bar per stat, in the stats' order.
    pub fn from_stats(title: impl Into<String>, stats: &[GroupStat]) -> Self {
        stats
            .iter()
            .fold(Self::new(title), |chart, stat| chart.with_bar(stat.key.clone(), stat.percentage))
    }

    pub fn with_bar(mut self, label: impl Into<String>, value: Percentage) -> Self {
        self.labels.push(label.into());
        self.values.push(value);
        self
    }

    pub fn with_highlight(mut self, label: impl Into<String>) -> Self {
        self.highlight = Some(label.into());
        self
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = ChartPoint> + '_ {
        self.labels
            .iter()
            .zip(&self.values)
            .map(|(label, value)| ChartPoint::new(label.clone(), *value))
    }

    /// Value of the bar labelled `label`.
    pub fn value_of(&self, label: &str) -> Option<Percentage> {
        self.labels
            .iter()
            .position(|l| l == label)
            .and_then(|idx| self.values.get(idx).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_stats_keeps_order_and_values() {
        let stats = vec![GroupStat::new("Tech", 1, 2), GroupStat::new("Finance", 2, 2)];
        let chart = ChartData::from_stats("Fire-fighting rate by Industry", &stats).with_highlight("Tech");

        assert_eq!(chart.labels, vec!["Tech", "Finance"]);
        assert_eq!(chart.value_of("Finance"), Some(Percentage::HUNDRED));
        assert_eq!(chart.highlight.as_deref(), Some("Tech"));
        assert_eq!(chart.points().count(), 2);
    }

    #[test]
    fn serializes_values_as_numbers() {
        let chart = ChartData::new("t").with_bar("a", Percentage::of(2, 3));
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["values"][0], serde_json::json!(66.7));
        assert!(json["highlight"].is_null());
    }

    #[test]
    fn value_of_tolerates_mismatched_lengths() {
        let chart: ChartData = serde_json::from_value(serde_json::json!({
            "title": "t",
            "labels": ["a", "b"],
            "values": [12.5],
            "highlight": null
        }))
        .unwrap();

        assert_eq!(chart.value_of("a"), Some(Percentage::from_tenths(125)));
        assert_eq!(chart.value_of("b"), None);
    }
}
