//! Explorer-style row filter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Dimension, ResponseRow};

/// Allow-lists over the single-select sidebar dimensions.
///
/// A `None` list accepts every value; an empty list accepts nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFilter {
    pub roles: Option<BTreeSet<String>>,
    pub org_sizes: Option<BTreeSet<String>>,
    pub industries: Option<BTreeSet<String>>,
    pub regions: Option<BTreeSet<String>>,
    pub ai_usage_frequencies: Option<BTreeSet<String>>,
    pub management_levels: Option<BTreeSet<String>>,
}

impl ResponseFilter {
    /// A filter that keeps every row.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_roles<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_org_sizes<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.org_sizes = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_industries<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.industries = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_regions<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_ai_usage_frequencies<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ai_usage_frequencies = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_management_levels<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.management_levels = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// True when no allow-list is set.
    pub fn is_unrestricted(&self) -> bool {
        self.clauses().iter().all(|(_, allowed)| allowed.is_none())
    }

    pub fn accepts(&self, row: &ResponseRow) -> bool {
        self.clauses().into_iter().all(|(dimension, allowed)| match allowed {
            None => true,
            Some(allowed) => row
                .values(dimension)
                .iter()
                .any(|value| allowed.contains(*value)),
        })
    }

    fn clauses(&self) -> [(Dimension, Option<&BTreeSet<String>>); 6] {
        [
            (Dimension::Role, self.roles.as_ref()),
            (Dimension::OrgSize, self.org_sizes.as_ref()),
            (Dimension::Industry, self.industries.as_ref()),
            (Dimension::Region, self.regions.as_ref()),
            (Dimension::AiUsageFrequency, self.ai_usage_frequencies.as_ref()),
            (Dimension::Management, self.management_levels.as_ref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::taxonomy::{ManagementLevel, OrgSize};

    fn row() -> ResponseRow {
        ResponseRow::builder(1)
            .role("Data Engineer")
            .industry("Tech")
            .org_size(OrgSize::Over10000)
            .management(ManagementLevel::NonManagement)
            .build()
    }

    #[test]
    fn unrestricted_filter_accepts_everything() {
        let filter = ResponseFilter::all();
        assert!(filter.is_unrestricted());
        assert!(filter.accepts(&row()));
    }

    #[test]
    fn allow_list_must_contain_the_value() {
        assert!(ResponseFilter::all().with_industries(["Tech", "Finance"]).accepts(&row()));
        assert!(!ResponseFilter::all().with_industries(["Finance"]).accepts(&row()));
    }

    #[test]
    fn empty_allow_list_rejects_everything() {
        let filter = ResponseFilter::all().with_roles(Vec::<String>::new());
        assert!(!filter.is_unrestricted());
        assert!(!filter.accepts(&row()));
    }

    #[test]
    fn clauses_combine_with_and() {
        let filter = ResponseFilter::all()
            .with_org_sizes(["10,000+"])
            .with_management_levels(["Management"]);
        assert!(!filter.accepts(&row()));
    }

    #[test]
    fn unanswered_rows_fail_a_set_clause() {
        let unanswered = ResponseRow::builder(2).build();
        assert!(!ResponseFilter::all().with_regions(["EMEA"]).accepts(&unanswered));
    }
}
