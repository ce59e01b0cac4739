//! The module contains the error the engine can throw.
//!
//! The only failure the store knows is a rejected form submission:
//!
//! - [`MissingDescription`] thrown when the description is empty.
//! - [`MissingAmount`] thrown when the amount field is empty.
//! - [`InvalidAmount`] thrown when the amount does not parse as money.
//!
//!  [`MissingDescription`]: ValidationError::MissingDescription
//!  [`MissingAmount`]: ValidationError::MissingAmount
//!  [`InvalidAmount`]: ValidationError::InvalidAmount
use thiserror::Error;

/// Reasons an expense submission is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description is required")]
    MissingDescription,
    #[error("Amount is required")]
    MissingAmount,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
