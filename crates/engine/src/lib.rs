//! Expense bookkeeping for Fittakka.
//!
//! The [`ExpenseStore`] is an owned, append-only list of [`Expense`] records
//! fed by form submissions. The [`Dashboard`] borrows it to derive what the
//! UI shows: total, recent activity and a preview of [`SAVING_TIPS`].

pub use dashboard::{DEFAULT_RECENT_LIMIT, DEFAULT_TIPS_LIMIT, Dashboard};
pub use error::ValidationError;
pub use expenses::{Expense, ExpenseStore};
pub use money::Money;
pub use tips::SAVING_TIPS;

mod dashboard;
mod error;
mod expenses;
mod money;
mod tips;

type ResultEngine<T> = Result<T, ValidationError>;
