#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn make_record(ministry: &str, category: Option<&str>, total: Decimal) -> BudgetRecord {
    BudgetRecord::new(
        ministry,
        category.map(String::from),
        total,
        total * dec!(0.6),
        total * dec!(0.4),
    )
}

// ── BudgetRecord ──────────────────────────────────────────────

#[test]
fn test_category_label() {
    assert_eq!(make_record("M1", Some("Cat1"), dec!(10)).category_label(), "Cat1");
    assert_eq!(make_record("M1", None, dec!(10)).category_label(), "Uncategorized");
}

#[test]
fn test_reconciled_record() {
    let r = make_record("M1", Some("Cat1"), dec!(100));
    assert_eq!(r.reconciliation_gap(), Decimal::ZERO);
    assert!(r.is_reconciled(Decimal::ZERO));
}

#[test]
fn test_unreconciled_record() {
    let r = BudgetRecord::new("M1", None, dec!(100), dec!(50), dec!(40));
    assert_eq!(r.reconciliation_gap(), dec!(10));
    assert!(!r.is_reconciled(dec!(1)));
    assert!(r.is_reconciled(dec!(10)));
}

// ── Dataset ───────────────────────────────────────────────────

#[test]
fn test_dataset_distinct_ministries_first_seen() {
    let ds = Dataset::new(vec![
        make_record("Defence", Some("A"), dec!(1)),
        make_record("Railways", Some("B"), dec!(2)),
        make_record("Defence", Some("B"), dec!(3)),
    ]);
    assert_eq!(ds.ministries(), vec!["Defence", "Railways"]);
}

#[test]
fn test_dataset_categories_skip_null() {
    let ds = Dataset::new(vec![
        make_record("M1", None, dec!(1)),
        make_record("M1", Some("B"), dec!(2)),
        make_record("M2", Some("A"), dec!(3)),
        make_record("M3", Some("B"), dec!(4)),
    ]);
    assert_eq!(ds.categories(), vec!["B", "A"]);
}

#[test]
fn test_dataset_total_bounds() {
    let ds = Dataset::new(vec![
        make_record("M1", None, dec!(50)),
        make_record("M2", None, dec!(5)),
        make_record("M3", None, dec!(500)),
    ]);
    assert_eq!(ds.total_bounds(), Some((dec!(5), dec!(500))));
    assert_eq!(Dataset::default().total_bounds(), None);
}

#[test]
fn test_dataset_unreconciled() {
    let ds = Dataset::new(vec![
        make_record("M1", None, dec!(50)),
        BudgetRecord::new("M2", None, dec!(100), dec!(1), dec!(1)),
    ]);
    let bad = ds.unreconciled(dec!(0.01));
    assert_eq!(bad.len(), 1);
    assert_eq!(bad[0].ministry, "M2");
}

// ── FilterSpec ────────────────────────────────────────────────

#[test]
fn test_filter_spec_default_matches_everything() {
    let spec = FilterSpec::default();
    assert!(spec.matches_ministry("anything"));
    assert!(spec.matches_category(Some("anything")));
    assert!(spec.matches_category(None));
    assert!(spec.total_range.contains(dec!(0)));
    assert!(spec.total_range.contains(dec!(99999999)));
}

#[test]
fn test_filter_spec_builder() {
    let spec = FilterSpec::new()
        .with_ministry("M1")
        .with_category("Cat1")
        .with_range(dec!(10), dec!(20));
    assert!(spec.matches_ministry("M1"));
    assert!(!spec.matches_ministry("M2"));
    assert!(spec.matches_category(Some("Cat1")));
    assert!(!spec.matches_category(Some("Cat2")));
    assert!(!spec.matches_category(None));
    assert_eq!(spec.total_range, TotalRange::new(dec!(10), dec!(20)));
}

#[test]
fn test_filter_spec_value_equality() {
    let a = FilterSpec::new().with_ministry("M1").with_ministry("M2");
    let b = FilterSpec::new().with_ministry("M2").with_ministry("M1");
    assert_eq!(a, b);
}

#[test]
fn test_total_range_inclusive() {
    let range = TotalRange::new(dec!(10), dec!(20));
    assert!(range.contains(dec!(10)));
    assert!(range.contains(dec!(20)));
    assert!(!range.contains(dec!(9.99)));
    assert!(!range.contains(dec!(20.01)));
}

#[test]
fn test_total_range_malformed() {
    assert!(TotalRange::new(dec!(2), dec!(1)).is_malformed());
    assert!(!TotalRange::new(dec!(1), dec!(1)).is_malformed());
}

// ── GroupDimension / Field ────────────────────────────────────

#[test]
fn test_group_dimension_roundtrip() {
    for d in GroupDimension::all() {
        assert_eq!(GroupDimension::parse(d.as_str()), Some(*d), "Roundtrip failed for {d}");
    }
    assert_eq!(GroupDimension::parse("MINISTRY"), Some(GroupDimension::Ministry));
    assert_eq!(GroupDimension::parse("region"), None);
}

#[test]
fn test_field_roundtrip() {
    for f in Field::all() {
        assert_eq!(Field::parse(f.as_str()), Some(*f), "Roundtrip failed for {f}");
    }
    assert_eq!(Field::parse("Budget_2023_Capital"), Some(Field::Capital));
    assert_eq!(Field::parse("net"), None);
}

// ── GroupKey / AggregateRow ───────────────────────────────────

#[test]
fn test_group_key_display() {
    let m = GroupKey::Ministry { ministry: "Defence".into() };
    let c = GroupKey::Category { category: None };
    let mc = GroupKey::MinistryCategory {
        ministry: "Defence".into(),
        category: Some("Capital".into()),
    };
    assert_eq!(m.to_string(), "Defence");
    assert_eq!(c.to_string(), "Uncategorized");
    assert_eq!(mc.to_string(), "Defence / Capital");
    assert_eq!(mc.ministry(), Some("Defence"));
    assert_eq!(mc.category(), Some("Capital"));
    assert_eq!(m.category(), None);
    assert_eq!(c.ministry(), None);
}

#[test]
fn test_aggregate_row_value() {
    let row = AggregateRow {
        group_key: GroupKey::Ministry { ministry: "M1".into() },
        total: dec!(150),
        revenue: dec!(80),
        capital: dec!(70),
    };
    assert_eq!(row.value(Field::Total), dec!(150));
    assert_eq!(row.value(Field::Revenue), dec!(80));
    assert_eq!(row.value(Field::Capital), dec!(70));
}
