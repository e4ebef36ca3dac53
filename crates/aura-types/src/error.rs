//! Common error types

use thiserror::Error;

/// Errors raised while parsing domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// Invalid tier name
    #[error("invalid tier: {0}")]
    InvalidTier(String),

    /// Invalid billing cycle name
    #[error("invalid billing cycle: {0}")]
    InvalidBillingCycle(String),

    /// Invalid dollar amount
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}
