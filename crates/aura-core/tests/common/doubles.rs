//! Test doubles for the store's collaborators

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use aura_advisor::{PlanAdvisor, Recommendation, RecommendationRequest};
use aura_core::{AppStore, DeliveryAck, EmailRequest, MailError, Mailer};
use aura_types::PlanId;

/// Mailer whose every delivery fails
#[derive(Debug, Default)]
pub struct FailingMailer {
    attempts: AtomicUsize,
}

impl FailingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _request: EmailRequest) -> Result<DeliveryAck, MailError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(MailError::Delivery("smtp relay unavailable".to_string()))
    }
}

/// Advisor that always answers with the same live recommendation and
/// remembers the last request
#[derive(Debug)]
pub struct ScriptedAdvisor {
    plan_id: PlanId,
    calls: AtomicUsize,
    last_request: std::sync::Mutex<Option<RecommendationRequest>>,
}

impl ScriptedAdvisor {
    pub fn recommending(plan_id: &str) -> Self {
        Self {
            plan_id: PlanId::new(plan_id),
            calls: AtomicUsize::new(0),
            last_request: std::sync::Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<RecommendationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlanAdvisor for ScriptedAdvisor {
    async fn recommend(&self, request: &RecommendationRequest) -> Recommendation {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        Recommendation::live(self.plan_id.clone(), "Scripted answer")
    }
}

/// Store with "Demo User" logged in and a catalog plan selected
pub fn logged_in_with(plan_id: &str) -> AppStore {
    let mut store = AppStore::new();
    let plan = store
        .catalog()
        .get(&PlanId::new(plan_id))
        .cloned()
        .expect("seed plan");
    store.select_plan(plan);
    store.login("Demo User");
    store
}
