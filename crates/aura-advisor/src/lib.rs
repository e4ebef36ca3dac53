//! Aura Advisor - plan recommendation collaborator
//!
//! Maps free-text requirements, an optional budget, desired features and
//! recent usage to a single plan from the catalog. The live path asks a
//! Gemini model for a structured answer; every failure (missing credential,
//! transport, decoding) collapses into a fixed fallback so callers always get
//! a usable [`Recommendation`].
//!
//! # Example
//!
//! ```rust,ignore
//! use aura_advisor::{AdvisorConfig, GeminiAdvisor, PlanAdvisor, RecommendationRequest};
//!
//! let advisor = GeminiAdvisor::new(AdvisorConfig::from_env())?;
//!
//! let request = RecommendationRequest::new("4K movies for the whole family", plans)
//!     .with_budget(25.0)
//!     .with_usage_history(history);
//!
//! let recommendation = advisor.recommend(&request).await;
//! println!("{}: {}", recommendation.recommended_plan_id, recommendation.reasoning);
//! ```

pub mod config;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod provider;
pub mod usage;

pub use config::AdvisorConfig;
pub use error::AdvisorError;
pub use gemini::GeminiAdvisor;
pub use provider::{
    FallbackReason, PlanAdvisor, Recommendation, RecommendationRequest, RecommendationSource,
    FALLBACK_PLAN_ID,
};
pub use usage::{UsageAnalysis, UsageLevel};
