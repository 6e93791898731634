#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn rec(ministry: &str, category: Option<&str>, total: Decimal, revenue: Decimal, capital: Decimal) -> BudgetRecord {
    BudgetRecord::new(ministry, category.map(String::from), total, revenue, capital)
}

fn scenario() -> Dataset {
    Dataset::new(vec![
        rec("M1", Some("Cat1"), dec!(100), dec!(60), dec!(40)),
        rec("M1", Some("Cat2"), dec!(50), dec!(20), dec!(30)),
        rec("M2", Some("Cat1"), dec!(200), dec!(150), dec!(50)),
    ])
}

fn ministry_row(name: &str, total: Decimal) -> AggregateRow {
    AggregateRow {
        group_key: GroupKey::Ministry {
            ministry: name.into(),
        },
        total,
        revenue: total,
        capital: Decimal::ZERO,
    }
}

fn names(rows: &[AggregateRow]) -> Vec<String> {
    rows.iter().map(|r| r.group_key.to_string()).collect()
}

fn find<'a>(rows: &'a [AggregateRow], key: &str) -> &'a AggregateRow {
    rows.iter().find(|r| r.group_key.to_string() == key).unwrap()
}

// ── group_by ──────────────────────────────────────────────────

#[test]
fn test_group_by_ministry_scenario_a() {
    let rows = group_by(&scenario(), GroupDimension::Ministry);
    assert_eq!(rows.len(), 2);

    let m1 = find(&rows, "M1");
    assert_eq!((m1.total, m1.revenue, m1.capital), (dec!(150), dec!(80), dec!(70)));
    let m2 = find(&rows, "M2");
    assert_eq!((m2.total, m2.revenue, m2.capital), (dec!(200), dec!(150), dec!(50)));
}

#[test]
fn test_group_by_category() {
    let rows = group_by(&scenario(), GroupDimension::Category);
    assert_eq!(rows.len(), 2);
    assert_eq!(find(&rows, "Cat1").total, dec!(300));
    assert_eq!(find(&rows, "Cat2").total, dec!(50));
}

#[test]
fn test_group_by_ministry_then_category() {
    let mut records = scenario().records().to_vec();
    records.push(rec("M1", Some("Cat1"), dec!(5), dec!(5), dec!(0)));
    let rows = group_by(&Dataset::new(records), GroupDimension::MinistryThenCategory);
    assert_eq!(rows.len(), 3);
    assert_eq!(find(&rows, "M1 / Cat1").total, dec!(105));
    assert_eq!(find(&rows, "M1 / Cat2").total, dec!(50));
    assert_eq!(find(&rows, "M2 / Cat1").total, dec!(200));
}

#[test]
fn test_group_by_null_category_is_uncategorized() {
    let ds = Dataset::new(vec![
        rec("M1", None, dec!(10), dec!(10), dec!(0)),
        rec("M2", None, dec!(20), dec!(5), dec!(15)),
        rec("M2", Some("Cat1"), dec!(1), dec!(1), dec!(0)),
    ]);
    let rows = group_by(&ds, GroupDimension::Category);
    let none = rows
        .iter()
        .find(|r| r.group_key == GroupKey::Category { category: None })
        .unwrap();
    assert_eq!(none.total, dec!(30));
    assert_eq!(none.group_key.to_string(), "Uncategorized");
}

#[test]
fn test_group_by_empty_view() {
    for d in GroupDimension::all() {
        assert!(group_by(&Dataset::default(), *d).is_empty());
    }
}

#[test]
fn test_group_by_conserves_sums() {
    let ds = scenario();
    let expected: Decimal = ds.iter().map(|r| r.total_2023).sum();
    for d in GroupDimension::all() {
        let got: Decimal = group_by(&ds, *d).iter().map(|r| r.total).sum();
        assert_eq!(got, expected, "Sum not conserved for {d}");
    }
}

// ── top_n / bottom_n / ranking ────────────────────────────────

#[test]
fn test_top_n_descending() {
    let rows = vec![
        ministry_row("A", dec!(10)),
        ministry_row("B", dec!(30)),
        ministry_row("C", dec!(20)),
    ];
    assert_eq!(names(&top_n(&rows, 2, Field::Total)), vec!["B", "C"]);
}

#[test]
fn test_top_n_ties_keep_input_order() {
    let rows = vec![
        ministry_row("A", dec!(10)),
        ministry_row("B", dec!(30)),
        ministry_row("C", dec!(30)),
        ministry_row("D", dec!(30)),
    ];
    assert_eq!(names(&top_n(&rows, 2, Field::Total)), vec!["B", "C"]);
}

#[test]
fn test_top_n_exceeding_len_returns_all() {
    let rows = vec![ministry_row("A", dec!(1)), ministry_row("B", dec!(2))];
    assert_eq!(top_n(&rows, 10, Field::Total).len(), 2);
}

#[test]
fn test_top_n_zero() {
    let rows = vec![ministry_row("A", dec!(1))];
    assert!(top_n(&rows, 0, Field::Total).is_empty());
}

#[test]
fn test_top_n_empty_scenario_c() {
    assert!(top_n(&[], 5, Field::Total).is_empty());
    assert!(bottom_n(&[], 5, Field::Total).is_empty());
}

#[test]
fn test_top_n_by_other_field() {
    let rows = group_by(&scenario(), GroupDimension::Ministry);
    assert_eq!(names(&top_n(&rows, 1, Field::Capital)), vec!["M1"]);
    assert_eq!(names(&top_n(&rows, 1, Field::Revenue)), vec!["M2"]);
}

#[test]
fn test_bottom_n_ascending() {
    let rows = vec![
        ministry_row("A", dec!(10)),
        ministry_row("B", dec!(30)),
        ministry_row("C", dec!(20)),
    ];
    assert_eq!(names(&bottom_n(&rows, 2, Field::Total)), vec!["A", "C"]);
}

#[test]
fn test_bottom_n_ties_keep_input_order() {
    let rows = vec![
        ministry_row("A", dec!(5)),
        ministry_row("B", dec!(5)),
        ministry_row("C", dec!(1)),
    ];
    assert_eq!(names(&bottom_n(&rows, 3, Field::Total)), vec!["C", "A", "B"]);
}

#[test]
fn test_top_and_bottom_disjoint() {
    let rows: Vec<AggregateRow> = (1..=6)
        .map(|i| ministry_row(&format!("M{i}"), Decimal::from(i * 10)))
        .collect();
    let top = top_n(&rows, 3, Field::Total);
    let bottom = bottom_n(&rows, 3, Field::Total);
    assert!(top.iter().all(|t| !bottom.contains(t)));
}

#[test]
fn test_ranking_is_full_descending() {
    let rows = group_by(&scenario(), GroupDimension::MinistryThenCategory);
    let ranked = ranking(&rows, Field::Total);
    assert_eq!(names(&ranked), vec!["M2 / Cat1", "M1 / Cat1", "M1 / Cat2"]);
}

// ── percentages ───────────────────────────────────────────────

#[test]
fn test_percentage_of_total() {
    let rows = vec![
        ministry_row("A", dec!(25)),
        ministry_row("B", dec!(75)),
    ];
    let shares = percentage_of_total(&rows, Field::Total);
    assert_eq!(shares[0].percentage, dec!(25));
    assert_eq!(shares[1].percentage, dec!(75));
    assert_eq!(shares[0].group_key, rows[0].group_key);
}

#[test]
fn test_percentage_of_total_zero_sum() {
    let rows = vec![
        ministry_row("A", Decimal::ZERO),
        ministry_row("B", Decimal::ZERO),
    ];
    let shares = percentage_of_total(&rows, Field::Total);
    assert!(shares.iter().all(|s| s.percentage.is_zero()));
}

#[test]
fn test_percentage_of_total_empty() {
    assert!(percentage_of_total(&[], Field::Revenue).is_empty());
}

#[test]
fn test_percentage_of_total_thirds_sum_to_100() {
    let rows = vec![
        ministry_row("A", dec!(1)),
        ministry_row("B", dec!(1)),
        ministry_row("C", dec!(1)),
    ];
    let sum: Decimal = percentage_of_total(&rows, Field::Total)
        .iter()
        .map(|s| s.percentage)
        .sum();
    assert!((sum - dec!(100)).abs() < dec!(0.000001));
}

#[test]
fn test_percentage_of_external_whole() {
    let rows = vec![ministry_row("A", dec!(50))];
    let shares = percentage_of(&rows, Field::Total, dec!(200));
    assert_eq!(shares[0].percentage, dec!(25));
    let shares = percentage_of(&rows, Field::Total, Decimal::ZERO);
    assert_eq!(shares[0].percentage, Decimal::ZERO);
}

#[test]
fn test_percentage_of_huge_values_does_not_panic() {
    let rows = vec![ministry_row("A", Decimal::MAX)];
    let shares = percentage_of(&rows, Field::Total, Decimal::MAX);
    assert_eq!(shares[0].percentage, dec!(100));
}

#[test]
fn test_group_by_huge_values_saturates() {
    let half = Decimal::MAX / dec!(2) + dec!(1);
    let ds = Dataset::new(vec![
        rec("M1", Some("Cat1"), half, half, half),
        rec("M1", Some("Cat2"), half, half, half),
        rec("M2", Some("Cat1"), dec!(10), dec!(6), dec!(4)),
    ]);
    let rows = group_by(&ds, GroupDimension::Ministry);
    assert_eq!(find(&rows, "M1").total, Decimal::MAX);
    assert_eq!(find(&rows, "M1").capital, Decimal::MAX);
    assert_eq!(find(&rows, "M2").total, dec!(10));

    let shares = percentage_of_total(&rows, Field::Total);
    assert_eq!(shares.len(), 2);
    assert!(shares.iter().all(|s| s.percentage <= dec!(100)));
}

#[test]
fn test_saturating_sum() {
    assert_eq!(saturating_sum([dec!(1.5), dec!(2.5)]), dec!(4));
    assert_eq!(saturating_sum(Vec::new()), Decimal::ZERO);
    assert_eq!(saturating_sum([Decimal::MAX, dec!(1)]), Decimal::MAX);
}
