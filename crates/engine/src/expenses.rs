//! The module contains the `Expense` record and the `ExpenseStore` holding them.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Money, ResultEngine, ValidationError};

/// One logged expenditure.
///
/// Records are created only through [`ExpenseStore::add`] and are never
/// modified afterwards: the store only hands out shared references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    /// Time-ordered UUID (v7), unique within the store.
    pub id: Uuid,
    pub description: String,
    pub amount: Money,
    pub date: DateTime<Utc>,
}

impl Expense {
    fn new(description: String, amount: Money, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            description,
            amount,
            date,
        }
    }
}

/// Append-only log of expenses, newest first.
///
/// There is no update or delete: the only transition is a successful
/// [`add`](Self::add), which prepends one record.
///
/// Every running total in insertion order fits in an `i64` of cents: an add
/// that would break this is rejected, so [`total`](Self::total) is exact.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the two raw form fields and records a new expense dated now.
    ///
    /// On error the store is left untouched.
    pub fn add(&mut self, description: &str, raw_amount: &str) -> ResultEngine<&Expense> {
        self.add_at(description, raw_amount, Utc::now())
    }

    /// Same as [`add`](Self::add) with an explicit creation timestamp.
    pub fn add_at(
        &mut self,
        description: &str,
        raw_amount: &str,
        date: DateTime<Utc>,
    ) -> ResultEngine<&Expense> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        let amount: Money = raw_amount.parse()?;
        self.total()
            .checked_add(amount)
            .ok_or_else(|| ValidationError::InvalidAmount("total too large".to_string()))?;

        self.expenses
            .insert(0, Expense::new(description.to_string(), amount, date));
        Ok(&self.expenses[0])
    }

    /// Sum of all amounts, zero when empty.
    pub fn total(&self) -> Money {
        // Oldest first: every partial sum is one that `add_at` already checked.
        self.expenses.iter().rev().map(|expense| expense.amount).sum()
    }

    /// The newest `n` records (fewer if the store is smaller).
    pub fn recent(&self, n: usize) -> &[Expense] {
        &self.expenses[..n.min(self.expenses.len())]
    }

    /// Every record, newest first.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_description() {
        let mut store = ExpenseStore::new();
        let expense = store.add("  Lunch ", "12").unwrap();
        assert_eq!(expense.description, "Lunch");
        assert_eq!(expense.amount, Money::new(1200));
    }

    #[test]
    fn add_keeps_explicit_date() {
        let mut store = ExpenseStore::new();
        let date = DateTime::parse_from_rfc3339("2024-03-05T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let expense = store.add_at("Bus", "2.40", date).unwrap();
        assert_eq!(expense.date, date);
    }

    #[test]
    fn whitespace_description_is_rejected() {
        let mut store = ExpenseStore::new();
        assert_eq!(
            store.add("   ", "5").unwrap_err(),
            ValidationError::MissingDescription
        );
        assert!(store.is_empty());
    }

    #[test]
    fn recent_never_exceeds_len() {
        let mut store = ExpenseStore::new();
        store.add("Tea", "1").unwrap();
        assert_eq!(store.recent(0).len(), 0);
        assert_eq!(store.recent(10).len(), 1);
    }
}
