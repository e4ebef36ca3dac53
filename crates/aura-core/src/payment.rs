//! Simulated card payments

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use aura_types::{BillingCycle, PlanId};

use crate::error::CoreError;

/// Default simulated processing delay
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// A charge for one billing period of a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRequest {
    /// Plan being purchased
    pub plan_id: PlanId,
    /// Amount to charge
    pub amount_cents: i64,
    /// Billing period the charge covers
    pub cycle: BillingCycle,
    /// Last four digits of the card, for the receipt
    pub card_last4: String,
}

/// Successful charge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Receipt identifier (`ch_...`)
    pub id: String,
    /// Amount charged
    pub amount_cents: i64,
    /// When the charge was approved
    pub charged_at: DateTime<Utc>,
}

/// Payment processing trait
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Charge the card, returning a receipt or [`CoreError::PaymentDeclined`]
    async fn charge(&self, request: &ChargeRequest) -> Result<PaymentReceipt, CoreError>;
}

/// In-process processor that waits, then approves (or declines every charge)
#[derive(Debug, Clone)]
pub struct SimulatedProcessor {
    delay: Duration,
    decline: bool,
}

impl Default for SimulatedProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedProcessor {
    /// Approving processor with the default 1.5s delay
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_PROCESSING_DELAY,
            decline: false,
        }
    }

    /// Override the simulated delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Decline every charge
    pub fn declining(mut self) -> Self {
        self.decline = true;
        self
    }
}

#[async_trait]
impl PaymentProcessor for SimulatedProcessor {
    #[instrument(skip(self, request), fields(plan_id = %request.plan_id, amount = request.amount_cents))]
    async fn charge(&self, request: &ChargeRequest) -> Result<PaymentReceipt, CoreError> {
        tokio::time::sleep(self.delay).await;

        if self.decline {
            warn!(card_last4 = %request.card_last4, "Charge declined");
            return Err(CoreError::PaymentDeclined("card declined".to_string()));
        }

        let receipt = PaymentReceipt {
            id: format!("ch_{}", Uuid::new_v4().simple()),
            amount_cents: request.amount_cents,
            charged_at: Utc::now(),
        };
        info!(receipt_id = %receipt.id, cycle = %request.cycle, "Charge approved");
        Ok(receipt)
    }
}
