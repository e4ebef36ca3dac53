//! Mock Generative Language endpoint
//!
//! Provides a wiremock server answering `generateContent` calls.

#![allow(dead_code)]

use aura_types::{Plan, PlanId, PlanTier};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

/// Wiremock server standing in for the model API
pub struct GeminiMockServer {
    pub server: MockServer,
}

impl GeminiMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Answer with the given model text as the only candidate part
    pub async fn respond_with_text(&self, text: &str) {
        let body = json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] }
            }]
        });
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer with a bare status code
    pub async fn respond_with_status(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream unavailable"))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Bodies of every request received so far
    pub async fn received_bodies(&self) -> Vec<serde_json::Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|r| serde_json::from_slice(&r.body).ok())
            .collect()
    }
}

pub fn sample_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: PlanId::new("plan_basic"),
            name: "Starter Stream".to_string(),
            tier: PlanTier::Basic,
            price_monthly_cents: 999,
            price_yearly_cents: 9900,
            features: vec!["1 User".to_string(), "SD Quality".to_string()],
            recommended_for: "Casual mobile viewers.".to_string(),
        },
        Plan {
            id: PlanId::new("plan_ent"),
            name: "Ultra Stream".to_string(),
            tier: PlanTier::Enterprise,
            price_monthly_cents: 2999,
            price_yearly_cents: 29900,
            features: vec!["Unlimited Users".to_string(), "4K Ultra HD".to_string()],
            recommended_for: "Home theater owners.".to_string(),
        },
    ]
}
