//! Recommendation provider abstraction

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use aura_types::{Plan, PlanId, UsageMetric};

/// Plan returned whenever a live recommendation is unavailable
pub const FALLBACK_PLAN_ID: &str = "plan_pro";

const MISSING_CREDENTIAL_REASONING: &str =
    "API Key is missing. Defaulting to Pro plan as a balanced option.";

const FAILURE_REASONING: &str =
    "We encountered an error analyzing your request, but the Pro plan is our most popular choice.";

/// Plan recommendation provider
///
/// Implementations must always produce a recommendation; failures are
/// reported through [`RecommendationSource::Fallback`] instead of an error.
#[async_trait]
pub trait PlanAdvisor: Send + Sync {
    /// Recommend a plan for the given requirements
    async fn recommend(&self, request: &RecommendationRequest) -> Recommendation;
}

/// What the user asked for
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// Free-text needs
    pub description: String,
    /// Maximum monthly budget in dollars
    pub budget: Option<f64>,
    /// Desired features, free text
    pub features: Option<String>,
    /// Recent usage, oldest first
    pub usage_history: Option<Vec<UsageMetric>>,
    /// Catalog to choose from
    pub available_plans: Vec<Plan>,
}

impl RecommendationRequest {
    /// Create a request for a description and catalog
    pub fn new(description: impl Into<String>, available_plans: Vec<Plan>) -> Self {
        Self {
            description: description.into(),
            available_plans,
            ..Self::default()
        }
    }

    /// Set the budget
    #[must_use]
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Set desired features
    #[must_use]
    pub fn with_features(mut self, features: impl Into<String>) -> Self {
        self.features = Some(features.into());
        self
    }

    /// Attach usage history
    #[must_use]
    pub fn with_usage_history(mut self, history: Vec<UsageMetric>) -> Self {
        self.usage_history = Some(history);
        self
    }
}

/// Why a fallback was used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No credential configured
    MissingCredential,
    /// The live call failed or returned something unusable
    ProviderFailure,
}

/// Where a recommendation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
    /// Answer from the model
    Live,
    /// Fixed default
    Fallback(FallbackReason),
}

impl RecommendationSource {
    /// Metric label for this source
    pub const fn as_label(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Fallback(FallbackReason::MissingCredential) => "fallback_missing_credential",
            Self::Fallback(FallbackReason::ProviderFailure) => "fallback_provider_failure",
        }
    }
}

/// Recommended plan plus justification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// Chosen plan
    pub recommended_plan_id: PlanId,
    /// Human-readable justification
    pub reasoning: String,
    /// Live answer or fallback
    pub source: RecommendationSource,
}

impl Recommendation {
    /// Live recommendation
    pub fn live(recommended_plan_id: PlanId, reasoning: impl Into<String>) -> Self {
        Self {
            recommended_plan_id,
            reasoning: reasoning.into(),
            source: RecommendationSource::Live,
        }
    }

    /// The fixed fallback for a reason
    pub fn fallback(reason: FallbackReason) -> Self {
        let reasoning = match reason {
            FallbackReason::MissingCredential => MISSING_CREDENTIAL_REASONING,
            FallbackReason::ProviderFailure => FAILURE_REASONING,
        };
        Self {
            recommended_plan_id: PlanId::new(FALLBACK_PLAN_ID),
            reasoning: reasoning.to_string(),
            source: RecommendationSource::Fallback(reason),
        }
    }

    /// Whether this is a fallback answer
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, RecommendationSource::Fallback(_))
    }
}
