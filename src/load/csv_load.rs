use rust_decimal::Decimal;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use super::columns::{self, ColumnMap};
use crate::error::{PipelineError, Result};
use crate::models::{BudgetRecord, Dataset};

/// Rows whose total is off from revenue + capital by more than this (in crore)
/// are reported at load time.
pub(crate) fn reconcile_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Largest amount (in crore) a single cell may hold. Ten billion rows at this
/// ceiling still sum below `Decimal::MAX`.
pub(crate) fn max_amount() -> Decimal {
    Decimal::from(1_000_000_000_000_000_000_i64)
}

pub(crate) struct CsvLoader;

impl CsvLoader {
    /// Read the budget CSV at `path`. Any bad row rejects the whole file.
    pub(crate) fn load(path: &Path) -> Result<Dataset> {
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;
        log::info!(
            "Loaded {} budget records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub(crate) fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if headers.is_empty() {
            return Ok(Dataset::default());
        }
        let map = ColumnMap::from_headers(&headers.iter().collect::<Vec<_>>())?;

        let mut records = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let row = result?;
            let fields: Vec<&str> = row.iter().collect();
            records.push(parse_record(i + 1, &fields, &map)?);
        }

        let dataset = Dataset::new(records);
        for record in dataset.unreconciled(reconcile_tolerance()) {
            log::warn!(
                "{} / {}: total {} differs from revenue + capital by {}",
                record.ministry,
                record.category_label(),
                record.total_2023,
                record.reconciliation_gap()
            );
        }
        Ok(dataset)
    }
}

fn parse_record(row: usize, fields: &[&str], map: &ColumnMap) -> Result<BudgetRecord> {
    let ministry = field(row, fields, map.ministry, columns::MINISTRY)?;
    if ministry.is_empty() {
        return Err(PipelineError::schema(row, columns::MINISTRY, "ministry is empty"));
    }

    let category = field(row, fields, map.category, columns::CATEGORY)?;
    let budget_category = (!category.is_empty()).then(|| category.to_string());

    Ok(BudgetRecord::new(
        ministry,
        budget_category,
        amount(row, fields, map.total, columns::TOTAL)?,
        amount(row, fields, map.revenue, columns::REVENUE)?,
        amount(row, fields, map.capital, columns::CAPITAL)?,
    ))
}

fn field<'a>(row: usize, fields: &[&'a str], index: usize, column: &str) -> Result<&'a str> {
    fields
        .get(index)
        .map(|s| s.trim())
        .ok_or_else(|| PipelineError::schema(row, column, "value is missing"))
}

fn amount(row: usize, fields: &[&str], index: usize, column: &str) -> Result<Decimal> {
    let raw = field(row, fields, index, column)?;
    let value = parse_decimal(raw).map_err(|msg| PipelineError::schema(row, column, msg))?;
    if value < Decimal::ZERO {
        return Err(PipelineError::schema(
            row,
            column,
            format!("amount {value} is negative"),
        ));
    }
    if value > max_amount() {
        return Err(PipelineError::schema(
            row,
            column,
            format!("amount {value} exceeds the {} crore ceiling", max_amount()),
        ));
    }
    Ok(value)
}

/// Parse an amount cell, tolerating currency symbols, thousands separators and quotes.
fn parse_decimal(s: &str) -> std::result::Result<Decimal, String> {
    let cleaned = s
        .replace(['₹', '$', ',', '"'], "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return Err("amount is empty".to_string());
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| format!("'{s}' is not a number"))
}

#[cfg(test)]
#[path = "csv_load_tests.rs"]
mod tests;
