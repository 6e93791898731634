use rust_decimal::Decimal;
use std::path::Path;

use crate::error::Result;
use crate::load::CsvLoader;
use crate::models::{Dataset, FilterSpec};
use crate::pipeline;
use crate::report::{Dashboard, Insights};

/// The dataset loaded for this run. Every query recomputes from it.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: Dataset,
}

impl Session {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(CsvLoader::load(path)?))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn ministries(&self) -> Vec<&str> {
        self.dataset.ministries()
    }

    pub fn categories(&self) -> Vec<&str> {
        self.dataset.categories()
    }

    pub fn total_bounds(&self) -> Option<(Decimal, Decimal)> {
        self.dataset.total_bounds()
    }

    /// No ministry or category selected, range spanning the whole dataset.
    pub fn default_filter(&self) -> FilterSpec {
        match self.total_bounds() {
            Some((min, max)) => FilterSpec::new().with_range(min, max),
            None => FilterSpec::new(),
        }
    }

    pub fn filter(&self, spec: &FilterSpec) -> Dataset {
        pipeline::filter::apply(&self.dataset, spec)
    }

    pub fn dashboard(&self, spec: &FilterSpec, top: usize) -> Dashboard {
        Dashboard::build(&self.dataset, spec, top)
    }

    pub fn insights(&self, spec: &FilterSpec, n: usize) -> Insights {
        Insights::build(&self.dataset, spec, n)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
