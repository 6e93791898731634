use crate::models::{BudgetRecord, Dataset, FilterSpec};

/// Keep the records that satisfy every clause of `spec`, in their original order.
///
/// Empty ministry/category selections match everything. A range with
/// `min > max` yields an empty view rather than an error.
pub fn apply(dataset: &Dataset, spec: &FilterSpec) -> Dataset {
    if spec.total_range.is_malformed() {
        log::debug!(
            "Total range {}..{} is inverted; filtered view is empty",
            spec.total_range.min,
            spec.total_range.max
        );
        return Dataset::default();
    }

    let view: Dataset = dataset
        .iter()
        .filter(|r| matches(r, spec))
        .cloned()
        .collect();
    log::debug!("Filter kept {}/{} records", view.len(), dataset.len());
    view
}

pub fn matches(record: &BudgetRecord, spec: &FilterSpec) -> bool {
    spec.matches_ministry(&record.ministry)
        && spec.matches_category(record.budget_category.as_deref())
        && spec.total_range.contains(record.total_2023)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
