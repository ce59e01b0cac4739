use std::collections::HashSet;

use chrono::{Duration, TimeZone, Utc};

use engine::{Dashboard, ExpenseStore, Money, ValidationError};

fn store_with(entries: &[(&str, &str)]) -> ExpenseStore {
    let mut store = ExpenseStore::new();
    for (description, amount) in entries {
        store.add(description, amount).unwrap();
    }
    store
}

#[test]
fn coffee_and_rent_scenario() {
    let store = store_with(&[("Coffee", "3.50"), ("Rent", "1200")]);

    assert_eq!(store.len(), 2);
    assert_eq!(store.total(), Money::new(120_350));
    assert_eq!(store.total().to_string(), "$1203.50");

    let recent = store.recent(1);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].description, "Rent");
}

#[test]
fn empty_description_is_rejected() {
    let mut store = ExpenseStore::new();
    assert_eq!(
        store.add("", "5").unwrap_err(),
        ValidationError::MissingDescription
    );
    assert_eq!(store.len(), 0);
}

#[test]
fn unparseable_amount_is_rejected() {
    let mut store = ExpenseStore::new();
    let err = store.add("Snack", "abc").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidAmount(_)));
    assert_eq!(store.len(), 0);
}

#[test]
fn empty_amount_is_rejected() {
    let mut store = ExpenseStore::new();
    assert_eq!(
        store.add("Snack", "").unwrap_err(),
        ValidationError::MissingAmount
    );
    assert!(store.is_empty());
}

#[test]
fn rejected_add_keeps_previous_records() {
    let mut store = store_with(&[("Coffee", "3.50")]);
    let _ = store.add("", "1");
    let _ = store.add("Snack", "1.2.3");

    assert_eq!(store.len(), 1);
    assert_eq!(store.total(), Money::new(350));
}

#[test]
fn valid_add_grows_by_one_and_lands_first() {
    let mut store = ExpenseStore::new();
    let inputs = [
        ("Groceries", "54.20"),
        ("Movie", "12"),
        ("Refund", "-3"),
        ("Free sample", "0"),
        ("Train", "7,5"),
    ];

    for (i, (description, amount)) in inputs.iter().enumerate() {
        let id = store.add(description, amount).unwrap().id;
        assert_eq!(store.len(), i + 1);
        assert_eq!(store.recent(1)[0].id, id);
        assert_eq!(store.recent(1)[0].description, *description);
    }
}

#[test]
fn total_matches_sum_and_is_stable() {
    let store = store_with(&[("a", "0.10"), ("b", "0.20"), ("c", "-0.05"), ("d", "100")]);
    let expected: i64 = store.iter().map(|expense| expense.amount.cents()).sum();

    assert_eq!(store.total().cents(), expected);
    assert_eq!(store.total(), Money::new(10_025));
    assert_eq!(store.total(), store.total());
}

#[test]
fn recent_is_bounded_and_newest_first() {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let mut store = ExpenseStore::new();
    for i in 0..5 {
        store
            .add_at(&format!("item {i}"), "1", base + Duration::minutes(i))
            .unwrap();
    }

    for n in 0..8 {
        let recent = store.recent(n);
        assert!(recent.len() <= n);
        assert!(recent.windows(2).all(|pair| pair[0].date >= pair[1].date));
    }
    assert_eq!(store.recent(2)[0].description, "item 4");
    assert_eq!(store.recent(2)[1].description, "item 3");
}

#[test]
fn total_stays_exact_at_the_cents_limit() {
    let max = "92233720368547758.07";
    let mut store = ExpenseStore::new();
    store.add("Refund", &format!("-{max}")).unwrap();
    store.add("Car", max).unwrap();
    store.add("House", max).unwrap();

    let exact: i128 = store.iter().map(|expense| i128::from(expense.amount.cents())).sum();
    assert_eq!(i128::from(store.total().cents()), exact);
    assert_eq!(store.total(), Money::new(i64::MAX));
}

#[test]
fn add_overflowing_total_is_rejected() {
    let mut store = store_with(&[("House", "92233720368547758.07")]);

    let err = store.add("Coffee", "0.01").unwrap_err();
    assert_eq!(err, ValidationError::InvalidAmount("total too large".to_string()));
    assert_eq!(store.len(), 1);
    assert_eq!(store.total(), Money::new(i64::MAX));

    store.add("Refund", "-0.01").unwrap();
    assert_eq!(store.total(), Money::new(i64::MAX - 1));
}

#[test]
fn ids_are_unique() {
    let mut store = ExpenseStore::new();
    for i in 0..200 {
        store.add(&format!("expense {i}"), "1").unwrap();
    }
    let ids: HashSet<_> = store.iter().map(|expense| expense.id).collect();
    assert_eq!(ids.len(), store.len());
}

#[test]
fn dashboard_reflects_latest_add() {
    let mut store = store_with(&[("Coffee", "3.50")]);
    assert_eq!(Dashboard::new(&store).total(), Money::new(350));

    store.add("Rent", "1200").unwrap();
    let dashboard = Dashboard::new(&store);
    assert_eq!(dashboard.total(), Money::new(120_350));
    assert_eq!(dashboard.recent_activity()[0].description, "Rent");
    assert_eq!(dashboard.expenses().len(), 2);
    assert_eq!(dashboard.tips_preview().len(), 3);
}
