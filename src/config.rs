use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub(crate) const DATA_ENV: &str = "BUDGET_INSIGHTS_DATA";
pub(crate) const TOP_ENV: &str = "BUDGET_INSIGHTS_TOP";
pub(crate) const DEFAULT_TOP: usize = 10;
const DATA_FILE: &str = "budget_2023.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    data_path: Option<PathBuf>,
    pub(crate) top_n: usize,
}

impl Config {
    /// `--data` wins over `BUDGET_INSIGHTS_DATA`, which wins over the platform data dir.
    pub(crate) fn resolve(data_flag: Option<&str>) -> Result<Self> {
        Self::from_parts(
            data_flag,
            std::env::var(DATA_ENV).ok(),
            std::env::var(TOP_ENV).ok(),
            default_data_path(),
        )
    }

    fn from_parts(
        data_flag: Option<&str>,
        data_env: Option<String>,
        top_env: Option<String>,
        default_path: Option<PathBuf>,
    ) -> Result<Self> {
        let data_path = data_flag
            .map(|p| PathBuf::from(shellexpand(p)))
            .or_else(|| {
                data_env
                    .filter(|p| !p.trim().is_empty())
                    .map(|p| PathBuf::from(shellexpand(&p)))
            })
            .or(default_path);

        let top_n = match top_env.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<usize>()
                .with_context(|| format!("{TOP_ENV} must be a whole number, got '{raw}'"))?,
            _ => DEFAULT_TOP,
        };

        if let Some(path) = &data_path {
            log::debug!("Using budget data at {}", path.display());
        }
        Ok(Self { data_path, top_n })
    }

    #[cfg(test)]
    pub(crate) fn for_path(path: &Path) -> Self {
        Self {
            data_path: Some(path.to_path_buf()),
            top_n: DEFAULT_TOP,
        }
    }

    pub(crate) fn data_path(&self) -> Result<&Path> {
        self.data_path.as_deref().ok_or_else(|| {
            anyhow::anyhow!("No budget dataset configured. Pass --data <file.csv> or set {DATA_ENV}")
        })
    }
}

fn default_data_path() -> Option<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("in", "budget-insights", "BudgetInsights")?;
    Some(proj_dirs.data_dir().join(DATA_FILE))
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
