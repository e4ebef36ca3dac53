//! Advisor errors
//!
//! These never reach callers of [`crate::PlanAdvisor::recommend`]; they are
//! logged and turned into a fallback recommendation.

use thiserror::Error;

/// Recommendation errors
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// No API credential configured
    #[error("API credential is not configured")]
    MissingCredential,

    /// HTTP transport failed
    #[error("transport error: {0}")]
    Transport(String),

    /// Provider answered with a non-success status
    #[error("provider error: {status}")]
    Provider {
        /// HTTP status code
        status: u16,
    },

    /// Provider answered without any text
    #[error("provider returned no response text")]
    EmptyResponse,

    /// Response text could not be decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl AdvisorError {
    /// Check if the failure happened on the wire
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Provider { .. })
    }
}

impl From<reqwest::Error> for AdvisorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
