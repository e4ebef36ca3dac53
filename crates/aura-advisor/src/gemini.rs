//! Gemini-backed plan advisor

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use aura_types::PlanId;

use crate::config::AdvisorConfig;
use crate::error::AdvisorError;
use crate::prompt::{build_prompt, response_schema};
use crate::provider::{FallbackReason, PlanAdvisor, Recommendation, RecommendationRequest};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Plan advisor calling the Generative Language `generateContent` endpoint
#[derive(Clone)]
pub struct GeminiAdvisor {
    client: Client,
    config: AdvisorConfig,
}

impl GeminiAdvisor {
    /// Create a new advisor
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AdvisorError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Configuration in use
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Ask the model for a recommendation, surfacing every failure
    #[instrument(skip(self, request), fields(model = %self.config.model))]
    pub async fn request_live(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendation, AdvisorError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AdvisorError::MissingCredential)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: build_prompt(request),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        debug!(plans = request.available_plans.len(), "Requesting plan recommendation");

        let response = self
            .client
            .post(self.config.generate_url())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Recommendation API error");
            return Err(AdvisorError::Provider {
                status: status.as_u16(),
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        let text = payload.text().ok_or(AdvisorError::EmptyResponse)?;

        let answer: RecommendationAnswer =
            serde_json::from_str(&text).map_err(|e| AdvisorError::Decode(e.to_string()))?;
        if answer.recommended_plan_id.trim().is_empty() {
            return Err(AdvisorError::Decode("empty recommendedPlanId".to_string()));
        }

        Ok(Recommendation::live(
            PlanId::new(answer.recommended_plan_id),
            answer.reasoning,
        ))
    }
}

#[async_trait]
impl PlanAdvisor for GeminiAdvisor {
    async fn recommend(&self, request: &RecommendationRequest) -> Recommendation {
        let recommendation = if self.config.has_credential() {
            match self.request_live(request).await {
                Ok(recommendation) => recommendation,
                Err(e) => {
                    error!(error = %e, "Recommendation failed, using fallback");
                    Recommendation::fallback(FallbackReason::ProviderFailure)
                }
            }
        } else {
            warn!("No advisor credential configured, using fallback");
            Recommendation::fallback(FallbackReason::MissingCredential)
        };

        metrics::counter!("aura_recommendations_total", "source" => recommendation.source.as_label())
            .increment(1);

        recommendation
    }
}

impl std::fmt::Debug for GeminiAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiAdvisor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// Generative Language API wire types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any
    fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationAnswer {
    recommended_plan_id: String,
    reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_joins_parts() {
        let payload: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(payload.text().as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let payload: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.text().is_none());
    }

    #[tokio::test]
    async fn test_missing_credential_falls_back() {
        let advisor = GeminiAdvisor::new(AdvisorConfig::default()).unwrap();
        let rec = advisor
            .recommend(&RecommendationRequest::new("anything", vec![]))
            .await;
        assert_eq!(
            rec,
            Recommendation::fallback(FallbackReason::MissingCredential)
        );
    }

    #[tokio::test]
    async fn test_request_live_requires_credential() {
        let advisor = GeminiAdvisor::new(AdvisorConfig::default()).unwrap();
        let err = advisor
            .request_live(&RecommendationRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AdvisorError::MissingCredential));
    }
}
