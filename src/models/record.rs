use rust_decimal::Decimal;
use serde::Serialize;

/// One ministry/category line of the FY2023-24 budget. Amounts are in crore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetRecord {
    pub ministry: String,
    pub budget_category: Option<String>,
    pub total_2023: Decimal,
    pub revenue_2023: Decimal,
    pub capital_2023: Decimal,
}

impl BudgetRecord {
    pub fn new(
        ministry: impl Into<String>,
        budget_category: Option<String>,
        total_2023: Decimal,
        revenue_2023: Decimal,
        capital_2023: Decimal,
    ) -> Self {
        Self {
            ministry: ministry.into(),
            budget_category,
            total_2023,
            revenue_2023,
            capital_2023,
        }
    }

    /// Category label for display; missing categories read as "Uncategorized".
    pub fn category_label(&self) -> &str {
        self.budget_category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    /// Difference between the stated total and revenue + capital.
    pub fn reconciliation_gap(&self) -> Decimal {
        (self.total_2023 - self.revenue_2023.saturating_add(self.capital_2023)).abs()
    }

    pub fn is_reconciled(&self, tolerance: Decimal) -> bool {
        self.reconciliation_gap() <= tolerance
    }
}

pub const UNCATEGORIZED: &str = "Uncategorized";

/// The loaded budget table. Never mutated once built; filtering produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<BudgetRecord>,
}

impl Dataset {
    pub fn new(records: Vec<BudgetRecord>) -> Self {
        Self { records }
    }

    #[cfg(test)]
    pub fn records(&self) -> &[BudgetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BudgetRecord> {
        self.records.iter()
    }

    /// Distinct ministries in first-seen order.
    pub fn ministries(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.ministry.as_str()) {
                seen.push(&record.ministry);
            }
        }
        seen
    }

    /// Distinct non-null categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for category in self.records.iter().filter_map(|r| r.budget_category.as_deref()) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Smallest and largest `total_2023`, or `None` for an empty dataset.
    pub fn total_bounds(&self) -> Option<(Decimal, Decimal)> {
        let mut totals = self.records.iter().map(|r| r.total_2023);
        let first = totals.next()?;
        Some(totals.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }

    /// Rows whose total drifts from revenue + capital by more than `tolerance`.
    pub fn unreconciled(&self, tolerance: Decimal) -> Vec<&BudgetRecord> {
        self.records
            .iter()
            .filter(|r| !r.is_reconciled(tolerance))
            .collect()
    }
}

impl From<Vec<BudgetRecord>> for Dataset {
    fn from(records: Vec<BudgetRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<BudgetRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = BudgetRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a BudgetRecord;
    type IntoIter = std::slice::Iter<'a, BudgetRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
