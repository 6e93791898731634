use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Field, FilterSpec, GroupDimension, TotalRange};

/// Flags that consume the following argument as their value.
const VALUE_FLAGS: &[&str] = &[
    "--data",
    "--ministry",
    "--category",
    "--min",
    "--max",
    "--top",
    "--n",
    "--by",
    "--group",
    "--tolerance",
];

/// Every value given for a (possibly repeated) flag.
pub(crate) fn flag_values<'a>(args: &'a [String], name: &str) -> Result<Vec<&'a str>> {
    let mut values = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == name {
            let value = iter
                .next()
                .with_context(|| format!("{name} needs a value"))?;
            values.push(value.as_str());
        }
    }
    Ok(values)
}

/// The last value given for a flag, if any.
pub(crate) fn flag_value<'a>(args: &'a [String], name: &str) -> Result<Option<&'a str>> {
    Ok(flag_values(args, name)?.pop())
}

pub(crate) fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

/// Arguments that are neither flags nor flag values.
pub(crate) fn positionals(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            iter.next();
        } else if !arg.starts_with("--") {
            out.push(arg.as_str());
        }
    }
    out
}

/// Remove a global `name <value>` pair from anywhere in `args`.
pub(crate) fn take_flag(args: &[String], name: &str) -> Result<(Option<String>, Vec<String>)> {
    let mut value = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == name {
            let v = iter
                .next()
                .with_context(|| format!("{name} needs a value"))?;
            value = Some(v.clone());
        } else {
            rest.push(arg.clone());
        }
    }
    Ok((value, rest))
}

/// Build a FilterSpec from `--ministry`, `--category`, `--min` and `--max`.
pub(crate) fn parse_filter(args: &[String]) -> Result<FilterSpec> {
    let mut spec = FilterSpec::new();
    for m in flag_values(args, "--ministry")? {
        spec = spec.with_ministry(m.trim());
    }
    for c in flag_values(args, "--category")? {
        spec = spec.with_category(c.trim());
    }

    let unbounded = TotalRange::unbounded();
    let min = match flag_value(args, "--min")? {
        Some(raw) => parse_amount(raw, "--min")?,
        None => unbounded.min,
    };
    let max = match flag_value(args, "--max")? {
        Some(raw) => parse_amount(raw, "--max")?,
        None => unbounded.max,
    };
    if min > max {
        log::warn!("--min {min} is above --max {max}; nothing will match");
    }
    Ok(spec.with_range(min, max))
}

fn parse_amount(raw: &str, flag: &str) -> Result<Decimal> {
    let cleaned = raw.replace(['₹', ','], "");
    Decimal::from_str(cleaned.trim())
        .with_context(|| format!("{flag} expects an amount in crore, got '{raw}'"))
}

pub(crate) fn parse_count(args: &[String], name: &str, default: usize) -> Result<usize> {
    match flag_value(args, name)? {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("{name} expects a whole number, got '{raw}'")),
        None => Ok(default),
    }
}

pub(crate) fn parse_field(args: &[String]) -> Result<Field> {
    match flag_value(args, "--by")? {
        Some(raw) => Field::parse(raw).with_context(|| {
            let options: Vec<&str> = Field::all().iter().map(Field::as_str).collect();
            format!("Unknown field '{raw}' (expected one of: {})", options.join(", "))
        }),
        None => Ok(Field::Total),
    }
}

pub(crate) fn parse_dimension(raw: &str) -> Result<GroupDimension> {
    GroupDimension::parse(raw).with_context(|| {
        let options: Vec<&str> = GroupDimension::all()
            .iter()
            .map(GroupDimension::as_str)
            .collect();
        format!("Unknown grouping '{raw}' (expected one of: {})", options.join(", "))
    })
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
