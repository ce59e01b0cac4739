//! Read-only values derived from an [`ExpenseStore`].
//!
//! Nothing is cached: every accessor walks the store again, which keeps the
//! dashboard trivially consistent with the latest `add`.

use crate::{Expense, ExpenseStore, Money, tips::SAVING_TIPS};

pub const DEFAULT_RECENT_LIMIT: usize = 3;
pub const DEFAULT_TIPS_LIMIT: usize = 3;

/// Dashboard view over a borrowed store.
#[derive(Debug, Clone, Copy)]
pub struct Dashboard<'a> {
    store: &'a ExpenseStore,
    recent_limit: usize,
    tips_limit: usize,
}

impl<'a> Dashboard<'a> {
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self {
            store,
            recent_limit: DEFAULT_RECENT_LIMIT,
            tips_limit: DEFAULT_TIPS_LIMIT,
        }
    }

    /// Number of records shown in the recent activity panel.
    pub fn recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Number of tips shown, clamped to the available tips.
    pub fn tips_limit(mut self, limit: usize) -> Self {
        self.tips_limit = limit.min(SAVING_TIPS.len());
        self
    }

    pub fn total(&self) -> Money {
        self.store.total()
    }

    pub fn recent_activity(&self) -> &'a [Expense] {
        self.store.recent(self.recent_limit)
    }

    pub fn tips_preview(&self) -> &'static [&'static str] {
        &SAVING_TIPS[..self.tips_limit]
    }

    pub fn expenses(&self) -> &'a [Expense] {
        self.store.expenses()
    }
}
