use rust_decimal::Decimal;
use serde::Serialize;

use super::aggregate::saturating_sum;
use crate::error::{PipelineError, Result};
use crate::format::format_amount;
use crate::models::{AggregateRow, Dataset, Field};

/// The highest and lowest groups by some field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extremes {
    pub highest: AggregateRow,
    pub lowest: AggregateRow,
}

/// Find the highest and lowest rows by `by`; the first row wins a tie.
pub fn extremes(rows: &[AggregateRow], by: Field) -> Result<Extremes> {
    let first = rows.first().ok_or(PipelineError::EmptyInput)?;
    let mut highest = first;
    let mut lowest = first;
    for row in &rows[1..] {
        if row.value(by) > highest.value(by) {
            highest = row;
        }
        if row.value(by) < lowest.value(by) {
            lowest = row;
        }
    }
    Ok(Extremes {
        highest: highest.clone(),
        lowest: lowest.clone(),
    })
}

/// Conclusion blocks for the highest and lowest budget groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlineText {
    pub highest: String,
    pub lowest: String,
}

impl std::fmt::Display for HeadlineText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.highest)?;
        write!(f, "{}", self.lowest)
    }
}

/// Describe the highest and lowest groups by total budget.
pub fn derive_headline(rows: &[AggregateRow]) -> Result<HeadlineText> {
    let ext = extremes(rows, Field::Total)?;
    Ok(HeadlineText {
        highest: describe("Highest Budget", &ext.highest),
        lowest: describe("Lowest Budget", &ext.lowest),
    })
}

fn describe(label: &str, row: &AggregateRow) -> String {
    format!(
        "{label}: {}\n  Total Budget:   {}\n  Capital Budget: {}\n  Revenue Budget: {}",
        row.group_key,
        format_amount(row.total),
        format_amount(row.capital),
        format_amount(row.revenue),
    )
}

/// Headline numbers for a view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub records: usize,
    pub ministries: usize,
    pub total: Decimal,
    pub revenue: Decimal,
    pub capital: Decimal,
}

pub fn totals(view: &Dataset) -> Totals {
    Totals {
        records: view.len(),
        ministries: view.ministries().len(),
        total: saturating_sum(view.iter().map(|r| r.total_2023)),
        revenue: saturating_sum(view.iter().map(|r| r.revenue_2023)),
        capital: saturating_sum(view.iter().map(|r| r.capital_2023)),
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
