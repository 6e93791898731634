//! Chart-ready series for the dashboard and insights views.
//!
//! Every series is derived from one filtered view; nothing here renders.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{AggregateRow, Dataset, Field, FilterSpec, GroupDimension, Share};
use crate::pipeline::{self, Totals};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScatterPoint {
    pub ministry: String,
    pub category: Option<String>,
    pub revenue: Decimal,
    pub capital: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinePoint {
    pub ministry: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub selected_ministries: usize,
    pub selected_categories: usize,
    pub records: usize,
    /// Ministry → category hierarchy sized by total.
    pub sunburst: Vec<AggregateRow>,
    pub top_revenue: Vec<AggregateRow>,
    pub top_capital: Vec<AggregateRow>,
    pub revenue_vs_capital: Vec<ScatterPoint>,
    pub category_distribution: Vec<AggregateRow>,
    /// Stacked revenue/capital bars per ministry.
    pub ministry_breakdown: Vec<AggregateRow>,
    pub top_total: Vec<AggregateRow>,
    pub demand_ranking: Vec<AggregateRow>,
    /// `top_total` as a share of the whole view's total.
    pub top_share: Vec<Share>,
    pub total_line: Vec<LinePoint>,
}

impl Dashboard {
    pub fn build(dataset: &Dataset, spec: &FilterSpec, top: usize) -> Self {
        let view = pipeline::filter::apply(dataset, spec);
        let by_ministry = pipeline::group_by(&view, GroupDimension::Ministry);
        let top_total = pipeline::top_n(&by_ministry, top, Field::Total);
        let view_total = pipeline::saturating_sum(view.iter().map(|r| r.total_2023));

        Self {
            selected_ministries: selection_size(spec.ministries.len(), dataset.ministries().len()),
            selected_categories: selection_size(spec.categories.len(), dataset.categories().len()),
            records: view.len(),
            sunburst: pipeline::group_by(&view, GroupDimension::MinistryThenCategory),
            top_revenue: pipeline::top_n(&by_ministry, top, Field::Revenue),
            top_capital: pipeline::top_n(&by_ministry, top, Field::Capital),
            revenue_vs_capital: view
                .iter()
                .map(|r| ScatterPoint {
                    ministry: r.ministry.clone(),
                    category: r.budget_category.clone(),
                    revenue: r.revenue_2023,
                    capital: r.capital_2023,
                })
                .collect(),
            category_distribution: pipeline::group_by(&view, GroupDimension::Category),
            demand_ranking: pipeline::ranking(&by_ministry, Field::Total),
            top_share: pipeline::percentage_of(&top_total, Field::Total, view_total),
            total_line: view
                .iter()
                .map(|r| LinePoint {
                    ministry: r.ministry.clone(),
                    total: r.total_2023,
                })
                .collect(),
            ministry_breakdown: by_ministry,
            top_total,
        }
    }
}

/// An empty selection stands for every available value.
fn selection_size(selected: usize, available: usize) -> usize {
    if selected == 0 {
        available
    } else {
        selected
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub totals: Totals,
    pub top: Vec<AggregateRow>,
    pub bottom: Vec<AggregateRow>,
    pub breakdown: Vec<AggregateRow>,
}

impl Insights {
    pub fn build(dataset: &Dataset, spec: &FilterSpec, n: usize) -> Self {
        let view = pipeline::filter::apply(dataset, spec);
        let by_ministry = pipeline::group_by(&view, GroupDimension::Ministry);
        Self {
            totals: pipeline::totals(&view),
            top: pipeline::top_n(&by_ministry, n, Field::Total),
            bottom: pipeline::bottom_n(&by_ministry, n, Field::Total),
            breakdown: by_ministry,
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
