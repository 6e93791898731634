use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::{AggregateRow, BudgetRecord, Dataset, Field, GroupDimension, GroupKey, Share};

fn key_for(record: &BudgetRecord, dimension: GroupDimension) -> GroupKey {
    match dimension {
        GroupDimension::Ministry => GroupKey::Ministry {
            ministry: record.ministry.clone(),
        },
        GroupDimension::Category => GroupKey::Category {
            category: record.budget_category.clone(),
        },
        GroupDimension::MinistryThenCategory => GroupKey::MinistryCategory {
            ministry: record.ministry.clone(),
            category: record.budget_category.clone(),
        },
    }
}

/// Sum total, revenue and capital per group.
///
/// Groups come out in the order their first record appears, but callers that
/// need an order should sort explicitly.
pub fn group_by(view: &Dataset, dimension: GroupDimension) -> Vec<AggregateRow> {
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut rows: Vec<AggregateRow> = Vec::new();

    for record in view {
        let key = key_for(record, dimension);
        let slot = match index.get(&key) {
            Some(&i) => i,
            None => {
                rows.push(AggregateRow::new(key.clone()));
                index.insert(key, rows.len() - 1);
                rows.len() - 1
            }
        };
        let row = &mut rows[slot];
        row.total = row.total.saturating_add(record.total_2023);
        row.revenue = row.revenue.saturating_add(record.revenue_2023);
        row.capital = row.capital.saturating_add(record.capital_2023);
    }

    log::debug!(
        "Grouped {} records into {} {dimension} groups",
        view.len(),
        rows.len()
    );
    rows
}

/// All rows ordered by `by`, largest first. Ties keep their input order.
pub fn ranking(rows: &[AggregateRow], by: Field) -> Vec<AggregateRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| b.value(by).cmp(&a.value(by)));
    sorted
}

/// The `n` largest rows by `by`. Asking for more rows than exist returns them all.
pub fn top_n(rows: &[AggregateRow], n: usize, by: Field) -> Vec<AggregateRow> {
    let mut sorted = ranking(rows, by);
    sorted.truncate(n);
    sorted
}

/// The `n` smallest rows by `by`, smallest first. Ties keep their input order.
pub fn bottom_n(rows: &[AggregateRow], n: usize, by: Field) -> Vec<AggregateRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| a.value(by).cmp(&b.value(by)));
    sorted.truncate(n);
    sorted
}

/// Each row's share of the summed `field` across `rows`.
pub fn percentage_of_total(rows: &[AggregateRow], field: Field) -> Vec<Share> {
    let whole = saturating_sum(rows.iter().map(|r| r.value(field)));
    percentage_of(rows, field, whole)
}

/// Each row's share of an externally supplied `whole`. A zero whole gives 0% everywhere.
pub fn percentage_of(rows: &[AggregateRow], field: Field, whole: Decimal) -> Vec<Share> {
    rows.iter()
        .map(|r| Share {
            group_key: r.group_key.clone(),
            percentage: percent(r.value(field), whole),
        })
        .collect()
}

/// Add up amounts, pinning at `Decimal::MAX` instead of overflowing.
pub(crate) fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

fn percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(whole))
        .or_else(|| {
            part.checked_div(whole)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        })
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
