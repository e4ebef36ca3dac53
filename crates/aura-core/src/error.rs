//! Core errors

use thiserror::Error;

use aura_types::{PlanId, TypesError};

/// Message shown whenever checkout fails
pub const PAYMENT_FAILED_MESSAGE: &str = "Payment failed. Please try again.";

/// Errors from store actions and page controllers
#[derive(Error, Debug)]
pub enum CoreError {
    /// A plan with this ID is already in the catalog
    #[error("duplicate plan id: {0}")]
    DuplicatePlanId(PlanId),

    /// Action needs a logged-in user
    #[error("no active session")]
    NoActiveSession,

    /// Checkout needs a user and a selected plan
    #[error("no plan selected")]
    NoPlanSelected,

    /// Required form field left empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Plan editor contents could not be turned into a plan
    #[error("invalid plan: {0}")]
    InvalidPlan(String),

    /// AI features are switched off
    #[error("AI features are disabled")]
    AiDisabled,

    /// Simulated card charge declined
    #[error("payment declined: {0}")]
    PaymentDeclined(String),

    /// Email dispatch failed
    #[error("mail error: {0}")]
    Mail(#[from] MailError),
}

impl CoreError {
    /// Check if the error came from the checkout processing step
    pub fn is_processing_failure(&self) -> bool {
        matches!(self, Self::PaymentDeclined(_) | Self::Mail(_))
    }

    /// Check if the error is a form validation problem the user can fix
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::InvalidPlan(_) | Self::DuplicatePlanId(_)
        )
    }
}

impl From<TypesError> for CoreError {
    fn from(err: TypesError) -> Self {
        Self::InvalidPlan(err.to_string())
    }
}

/// Email dispatch errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    /// Recipient address is empty or malformed
    #[error("invalid recipient: {0}")]
    InvalidRecipient(String),

    /// Delivery failed
    #[error("delivery failed: {0}")]
    Delivery(String),
}
