use anyhow::{Context, Result};
use rust_decimal::Decimal;

use super::args::{
    flag_value, has_flag, parse_count, parse_dimension, parse_field, parse_filter, positionals,
};
use crate::config::Config;
use crate::error::PipelineError;
use crate::format::{format_amount, format_percent, truncate};
use crate::load::reconcile_tolerance;
use crate::models::{AggregateRow, Field, GroupDimension};
use crate::pipeline;
use crate::session::Session;

const NAME_WIDTH: usize = 40;

pub(crate) fn as_cli(args: &[String], config: &Config) -> Result<()> {
    match args[0].as_str() {
        "dashboard" | "d" => cli_dashboard(&args[1..], config),
        "insights" | "i" => cli_insights(&args[1..], config),
        "rows" => cli_rows(&args[1..], config),
        "group" | "g" => cli_group(&args[1..], config),
        "top" => cli_rank(&args[1..], config, false),
        "bottom" => cli_rank(&args[1..], config, true),
        "ministries" => cli_list(config, |s| {
            s.ministries().iter().map(|m| m.to_string()).collect()
        }),
        "categories" => cli_list(config, |s| {
            s.categories().iter().map(|c| c.to_string()).collect()
        }),
        "check" => cli_check(&args[1..], config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budget-insights {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("Budget Insights — Union Budget FY2023-24 analytics");
    println!();
    println!("Usage: budget-insights [--data <file.csv>] <command> [options]");
    println!();
    println!("Commands:");
    println!("  dashboard [filters] [--top N] [--json]   All chart series for the filtered view");
    println!("  insights [filters] [--top N] [--json]    Totals, top/bottom ministries, conclusion");
    println!("  rows [filters]                           Print the filtered records");
    println!("  group <ministry|category|ministry-category> [filters] [--by FIELD] [--json]");
    println!("  top | bottom [filters] [--n N] [--by FIELD] [--group DIM]");
    println!("  ministries | categories                  List distinct values");
    println!("  check [--tolerance X]                    Rows where total != revenue + capital");
    println!("  --help, -h                               Show this help");
    println!("  --version, -V                            Show version");
    println!();
    println!("Filters:");
    println!("  --ministry <name>    (repeatable; none = all ministries)");
    println!("  --category <name>    (repeatable; none = all categories)");
    println!("  --min <amount>  --max <amount>   inclusive total-budget range, in crore");
    println!();
    println!("FIELD: total | revenue | capital");
    println!("Data file: --data, ${}, or the platform data directory", crate::config::DATA_ENV);
}

fn open_session(config: &Config) -> Result<Session> {
    let path = config.data_path()?;
    Session::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

// ── dashboard ─────────────────────────────────────────────────

fn cli_dashboard(args: &[String], config: &Config) -> Result<()> {
    let session = open_session(config)?;
    let spec = parse_filter(args)?;
    let top = parse_count(args, "--top", config.top_n)?;
    let dashboard = session.dashboard(&spec, top);
    let headline = pipeline::derive_headline(&dashboard.ministry_breakdown);

    if has_flag(args, "--json") {
        let doc = serde_json::json!({
            "dashboard": dashboard,
            "headline": headline.as_ref().ok(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return headline_error(headline.err());
    }

    println!(
        "Budget Dashboard — {} records (Selected Ministries: {}, Categories: {})",
        dashboard.records, dashboard.selected_ministries, dashboard.selected_categories
    );
    if let Some((min, max)) = session.total_bounds() {
        if !(spec.total_range.contains(min) && spec.total_range.contains(max)) {
            let full = session.default_filter().total_range;
            println!(
                "Total budget range {} – {} (dataset spans {} – {})",
                format_amount(spec.total_range.min.max(min)),
                format_amount(spec.total_range.max.min(max)),
                format_amount(full.min),
                format_amount(full.max)
            );
        }
    }
    println!("{}", "─".repeat(72));

    println!();
    println!("Total Budget of Ministries:");
    let mut ministries: Vec<&str> = Vec::new();
    for row in &dashboard.sunburst {
        let ministry = row.group_key.ministry().unwrap_or_default();
        if !ministries.contains(&ministry) {
            ministries.push(ministry);
        }
    }
    for ministry in ministries {
        let children: Vec<&AggregateRow> = dashboard
            .sunburst
            .iter()
            .filter(|r| r.group_key.ministry() == Some(ministry))
            .collect();
        let sum = pipeline::saturating_sum(children.iter().map(|r| r.total));
        println!(
            "  {:<w$} {:>18}",
            truncate(ministry, NAME_WIDTH),
            format_amount(sum),
            w = NAME_WIDTH
        );
        for row in children {
            println!(
                "    {:<w$} {:>18}",
                truncate(row.group_key.category().unwrap_or_default(), NAME_WIDTH - 2),
                format_amount(row.total),
                w = NAME_WIDTH - 2
            );
        }
    }

    print_section(
        &format!("Top {top} Ministries by Revenue"),
        &dashboard.top_revenue,
        Field::Revenue,
    );
    print_section(
        &format!("Top {top} Ministries by Capital"),
        &dashboard.top_capital,
        Field::Capital,
    );

    println!();
    println!("Budget Category Distribution:");
    let shares = pipeline::percentage_of_total(&dashboard.category_distribution, Field::Total);
    for (row, share) in dashboard.category_distribution.iter().zip(&shares) {
        println!(
            "  {:<w$} {:>18} {:>8}",
            truncate(&row.group_key.to_string(), NAME_WIDTH),
            format_amount(row.total),
            format_percent(share.percentage),
            w = NAME_WIDTH
        );
    }

    println!();
    println!("Revenue and Capital Budget by Ministry:");
    print_breakdown(&dashboard.ministry_breakdown);

    println!();
    println!("Top {} Ministries by Total Budget:", dashboard.top_total.len());
    for (row, share) in dashboard.top_total.iter().zip(&dashboard.top_share) {
        println!(
            "  {:<w$} {:>18} {:>8}",
            truncate(&row.group_key.to_string(), NAME_WIDTH),
            format_amount(row.total),
            format_percent(share.percentage),
            w = NAME_WIDTH
        );
    }

    print_section(
        &format!("Top Demanding Ministries ({})", dashboard.demand_ranking.len()),
        &dashboard.demand_ranking,
        Field::Total,
    );

    println!();
    println!("Conclusion:");
    print_headline(headline)
}

// ── insights ──────────────────────────────────────────────────

fn cli_insights(args: &[String], config: &Config) -> Result<()> {
    let session = open_session(config)?;
    let spec = parse_filter(args)?;
    let n = parse_count(args, "--top", 5)?;
    let insights = session.insights(&spec, n);
    let headline = pipeline::derive_headline(&insights.breakdown);

    if has_flag(args, "--json") {
        let doc = serde_json::json!({
            "insights": insights,
            "headline": headline.as_ref().ok(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return headline_error(headline.err());
    }

    let t = &insights.totals;
    println!("Summary Statistics");
    println!("{}", "─".repeat(40));
    println!("  Ministries Selected: {}", t.ministries);
    println!("  Records:             {}", t.records);
    println!("  Total Budget:        {} Cr", format_amount(t.total));
    println!("  Revenue Budget:      {} Cr", format_amount(t.revenue));
    println!("  Capital Budget:      {} Cr", format_amount(t.capital));

    print_section(&format!("Top {n} Ministries by Total Budget"), &insights.top, Field::Total);
    print_section(&format!("Least {n} Ministries by Total Budget"), &insights.bottom, Field::Total);

    println!();
    println!("Revenue and Capital Budget Breakdown:");
    print_breakdown(&insights.breakdown);

    println!();
    println!("Conclusion:");
    print_headline(headline)
}

// ── rows / group / rank ───────────────────────────────────────

fn cli_rows(args: &[String], config: &Config) -> Result<()> {
    let session = open_session(config)?;
    let view = session.filter(&parse_filter(args)?);
    if view.is_empty() {
        println!("No records match the current filters");
        return Ok(());
    }

    println!(
        "{:<32} {:<16} {:>16} {:>16} {:>16}",
        "Ministry", "Category", "Total", "Revenue", "Capital"
    );
    println!("{}", "─".repeat(100));
    for r in &view {
        println!(
            "{:<32} {:<16} {:>16} {:>16} {:>16}",
            truncate(&r.ministry, 32),
            truncate(r.category_label(), 16),
            format_amount(r.total_2023),
            format_amount(r.revenue_2023),
            format_amount(r.capital_2023),
        );
    }
    println!("{} of {} records", view.len(), session.dataset().len());
    Ok(())
}

fn cli_group(args: &[String], config: &Config) -> Result<()> {
    let dim_arg = positionals(args)
        .first()
        .copied()
        .context("Usage: budget-insights group <ministry|category|ministry-category>")?;
    let dimension = parse_dimension(dim_arg)?;
    let by = parse_field(args)?;
    let session = open_session(config)?;
    let view = session.filter(&parse_filter(args)?);
    let rows = pipeline::ranking(&pipeline::group_by(&view, dimension), by);
    let shares = pipeline::percentage_of_total(&rows, by);

    if has_flag(args, "--json") {
        let doc = serde_json::json!({ "dimension": dimension, "by": by, "rows": rows, "shares": shares });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Budget by {dimension} (sorted by {by})");
    println!("{}", "─".repeat(72));
    for (row, share) in rows.iter().zip(&shares) {
        println!(
            "  {:<w$} {:>18} {:>8}",
            truncate(&row.group_key.to_string(), NAME_WIDTH),
            format_amount(row.value(by)),
            format_percent(share.percentage),
            w = NAME_WIDTH
        );
    }

    match pipeline::extremes(&rows, by) {
        Ok(ext) => {
            println!();
            println!("  Highest {by}: {} ({})", ext.highest.group_key, format_amount(ext.highest.value(by)));
            println!("  Lowest {by}:  {} ({})", ext.lowest.group_key, format_amount(ext.lowest.value(by)));
            Ok(())
        }
        Err(PipelineError::EmptyInput) => {
            println!("  No records match the current filters");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn cli_rank(args: &[String], config: &Config, bottom: bool) -> Result<()> {
    let n = parse_count(args, "--n", config.top_n)?;
    let by = parse_field(args)?;
    let dimension = match flag_value(args, "--group")? {
        Some(raw) => parse_dimension(raw)?,
        None => GroupDimension::Ministry,
    };
    let session = open_session(config)?;
    let view = session.filter(&parse_filter(args)?);
    let rows = pipeline::group_by(&view, dimension);
    let ranked = if bottom {
        pipeline::bottom_n(&rows, n, by)
    } else {
        pipeline::top_n(&rows, n, by)
    };

    let title = if bottom { "Bottom" } else { "Top" };
    print_section(&format!("{title} {n} by {by} ({dimension})"), &ranked, by);
    Ok(())
}

// ── lists / check ─────────────────────────────────────────────

fn cli_list(config: &Config, values: impl Fn(&Session) -> Vec<String>) -> Result<()> {
    let session = open_session(config)?;
    for v in values(&session) {
        println!("{v}");
    }
    Ok(())
}

fn cli_check(args: &[String], config: &Config) -> Result<()> {
    let tolerance = match flag_value(args, "--tolerance")? {
        Some(raw) => raw
            .trim()
            .parse::<Decimal>()
            .with_context(|| format!("--tolerance expects an amount, got '{raw}'"))?,
        None => reconcile_tolerance(),
    };
    let session = open_session(config)?;
    let bad = session.dataset().unreconciled(tolerance);
    if bad.is_empty() {
        println!(
            "All {} records reconcile (total = revenue + capital within {tolerance})",
            session.dataset().len()
        );
        return Ok(());
    }

    for r in &bad {
        println!(
            "  {:<32} {:<16} total {} vs revenue + capital {}",
            truncate(&r.ministry, 32),
            truncate(r.category_label(), 16),
            format_amount(r.total_2023),
            format_amount(r.revenue_2023.saturating_add(r.capital_2023)),
        );
    }
    anyhow::bail!("{} of {} records do not reconcile", bad.len(), session.dataset().len());
}

// ── output helpers ────────────────────────────────────────────

fn print_section(title: &str, rows: &[AggregateRow], field: Field) {
    println!();
    println!("{title}:");
    if rows.is_empty() {
        println!("  (no data)");
        return;
    }
    for row in rows {
        println!(
            "  {:<w$} {:>18}",
            truncate(&row.group_key.to_string(), NAME_WIDTH),
            format_amount(row.value(field)),
            w = NAME_WIDTH
        );
    }
}

fn print_breakdown(rows: &[AggregateRow]) {
    if rows.is_empty() {
        println!("  (no data)");
        return;
    }
    println!("  {:<w$} {:>18} {:>18}", "", "Revenue", "Capital", w = NAME_WIDTH);
    for row in rows {
        println!(
            "  {:<w$} {:>18} {:>18}",
            truncate(&row.group_key.to_string(), NAME_WIDTH),
            format_amount(row.revenue),
            format_amount(row.capital),
            w = NAME_WIDTH
        );
    }
}

fn print_headline(headline: crate::error::Result<pipeline::HeadlineText>) -> Result<()> {
    match headline {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(PipelineError::EmptyInput) => {
            println!("  No data for the current filters");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn headline_error(err: Option<PipelineError>) -> Result<()> {
    match err {
        None | Some(PipelineError::EmptyInput) => Ok(()),
        Some(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
