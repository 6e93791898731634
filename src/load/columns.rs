use crate::error::{PipelineError, Result};

pub(crate) const MINISTRY: &str = "Ministry";
pub(crate) const CATEGORY: &str = "Budget_Category";
pub(crate) const TOTAL: &str = "Budget_2023_Total";
pub(crate) const REVENUE: &str = "Budget_2023_Revenue";
pub(crate) const CAPITAL: &str = "Budget_2023_Capital";

/// Positions of the five budget columns within a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    pub(crate) ministry: usize,
    pub(crate) category: usize,
    pub(crate) total: usize,
    pub(crate) revenue: usize,
    pub(crate) capital: usize,
}

impl ColumnMap {
    /// Locate every required column. Order is free, matching is case-insensitive,
    /// and unknown columns are ignored.
    pub(crate) fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let h: Vec<String> = headers.iter().map(|s| normalize(s.as_ref())).collect();

        Ok(Self {
            ministry: require(&h, MINISTRY)?,
            category: require(&h, CATEGORY)?,
            total: require(&h, TOTAL)?,
            revenue: require(&h, REVENUE)?,
            capital: require(&h, CAPITAL)?,
        })
    }
}

fn normalize(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

fn require(headers: &[String], name: &str) -> Result<usize> {
    col_index(headers, &name.to_lowercase())
        .ok_or_else(|| PipelineError::MissingColumn(name.to_string()))
}

fn col_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod tests;
