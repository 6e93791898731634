use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeSet;

/// Inclusive bounds on `total_2023`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TotalRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl TotalRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self {
            min: Decimal::MIN,
            max: Decimal::MAX,
        }
    }

    /// A range with `min > max` can never match anything.
    pub fn is_malformed(&self) -> bool {
        self.min > self.max
    }

    pub fn contains(&self, value: Decimal) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for TotalRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// The user's current selection. An empty set means "no filter on this column".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FilterSpec {
    pub ministries: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub total_range: TotalRange,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ministry(mut self, ministry: impl Into<String>) -> Self {
        self.ministries.insert(ministry.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    #[must_use]
    pub fn with_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.total_range = TotalRange::new(min, max);
        self
    }

    pub fn matches_ministry(&self, ministry: &str) -> bool {
        self.ministries.is_empty() || self.ministries.contains(ministry)
    }

    /// Null categories only pass when no category is selected.
    pub fn matches_category(&self, category: Option<&str>) -> bool {
        if self.categories.is_empty() {
            return true;
        }
        category.is_some_and(|c| self.categories.contains(c))
    }
}
