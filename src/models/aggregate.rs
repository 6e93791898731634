use rust_decimal::Decimal;
use serde::Serialize;

use super::record::UNCATEGORIZED;

/// Which column(s) a grouping is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GroupDimension {
    Ministry,
    Category,
    MinistryThenCategory,
}

impl GroupDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ministry => "ministry",
            Self::Category => "category",
            Self::MinistryThenCategory => "ministry-category",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ministry" | "m" => Some(Self::Ministry),
            "category" | "budget_category" | "c" => Some(Self::Category),
            "ministry-category" | "ministry/category" | "mc" => Some(Self::MinistryThenCategory),
            _ => None,
        }
    }

    pub fn all() -> &'static [GroupDimension] {
        &[Self::Ministry, Self::Category, Self::MinistryThenCategory]
    }
}

impl std::fmt::Display for GroupDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the three budget amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Total,
    Revenue,
    Capital,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Revenue => "revenue",
            Self::Capital => "capital",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "total" | "budget_2023_total" => Some(Self::Total),
            "revenue" | "budget_2023_revenue" => Some(Self::Revenue),
            "capital" | "budget_2023_capital" => Some(Self::Capital),
            _ => None,
        }
    }

    pub fn all() -> &'static [Field] {
        &[Self::Total, Self::Revenue, Self::Capital]
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupKey {
    Ministry {
        ministry: String,
    },
    Category {
        category: Option<String>,
    },
    MinistryCategory {
        ministry: String,
        category: Option<String>,
    },
}

impl GroupKey {
    pub fn ministry(&self) -> Option<&str> {
        match self {
            Self::Ministry { ministry } | Self::MinistryCategory { ministry, .. } => Some(ministry),
            Self::Category { .. } => None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Category { category } | Self::MinistryCategory { category, .. } => {
                Some(category.as_deref().unwrap_or(UNCATEGORIZED))
            }
            Self::Ministry { .. } => None,
        }
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ministry { ministry } => write!(f, "{ministry}"),
            Self::Category { category } => {
                write!(f, "{}", category.as_deref().unwrap_or(UNCATEGORIZED))
            }
            Self::MinistryCategory { ministry, category } => write!(
                f,
                "{ministry} / {}",
                category.as_deref().unwrap_or(UNCATEGORIZED)
            ),
        }
    }
}

/// Summed amounts for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateRow {
    pub group_key: GroupKey,
    pub total: Decimal,
    pub revenue: Decimal,
    pub capital: Decimal,
}

impl AggregateRow {
    pub fn new(group_key: GroupKey) -> Self {
        Self {
            group_key,
            total: Decimal::ZERO,
            revenue: Decimal::ZERO,
            capital: Decimal::ZERO,
        }
    }

    pub fn value(&self, field: Field) -> Decimal {
        match field {
            Field::Total => self.total,
            Field::Revenue => self.revenue,
            Field::Capital => self.capital,
        }
    }
}

/// A row's share of some whole, in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Share {
    pub group_key: GroupKey,
    pub percentage: Decimal,
}
