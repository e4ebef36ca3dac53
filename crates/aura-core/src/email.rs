//! Lifecycle email dispatch
//!
//! [`Mailer`] is the delivery seam. [`MockMailer`] logs each message, waits
//! out a simulated network delay and keeps a copy in an in-memory outbox.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use aura_types::format_amount;

use crate::error::MailError;

/// Default simulated delivery delay
pub const DEFAULT_MAIL_DELAY: Duration = Duration::from_secs(1);

/// Outgoing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRequest {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

impl EmailRequest {
    /// Create a message
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Canned lifecycle messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailTemplate {
    /// Sent after a successful checkout
    Welcome { plan_name: String },
    /// Reminder ahead of the next charge
    RenewalNotice { date: String, amount_cents: i64 },
    /// Sent when a charge could not be collected
    PaymentFailure,
}

impl EmailTemplate {
    /// Short name used as a log field and metric label
    pub fn name(&self) -> &'static str {
        match self {
            Self::Welcome { .. } => "welcome",
            Self::RenewalNotice { .. } => "renewal_notice",
            Self::PaymentFailure => "payment_failure",
        }
    }

    /// Subject line for the template
    pub fn subject(&self) -> &'static str {
        match self {
            Self::Welcome { .. } => "Welcome to AuraStream! 🚀",
            Self::RenewalNotice { .. } => "Upcoming Renewal Notification",
            Self::PaymentFailure => "Action Required: Payment Failed ⚠️",
        }
    }

    /// Rendered body text
    pub fn body(&self) -> String {
        match self {
            Self::Welcome { plan_name } => format!(
                "Hi there,\n\nThank you for subscribing to the {plan_name}. Your account is now \
                 active and you can start streaming immediately.\n\nEnjoy!\nThe AuraStream Team"
            ),
            Self::RenewalNotice { date, amount_cents } => format!(
                "Hello,\n\nThis is a reminder that your subscription will renew on {date} for \
                 ${}.\n\nNo action is needed if you wish to continue.",
                format_amount(*amount_cents)
            ),
            Self::PaymentFailure => "Hello,\n\nWe could not process your latest payment. Please \
                 update your payment method in the dashboard to avoid service interruption.\
                 \n\nRegards,\nAuraStream Billing"
                .to_string(),
        }
    }

    /// Render the template for a recipient
    pub fn render(&self, to: impl Into<String>) -> EmailRequest {
        EmailRequest::new(to, self.subject(), self.body())
    }
}

/// Delivery acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryAck {
    /// Whether the message was accepted
    pub delivered: bool,
    /// When delivery finished
    pub sent_at: DateTime<Utc>,
}

/// Email delivery trait
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a message
    async fn send(&self, request: EmailRequest) -> Result<DeliveryAck, MailError>;

    /// Render and deliver a lifecycle template
    async fn send_template(
        &self,
        to: &str,
        template: &EmailTemplate,
    ) -> Result<DeliveryAck, MailError> {
        let ack = self.send(template.render(to)).await?;
        metrics::counter!("aura_emails_sent_total", "template" => template.name()).increment(1);
        Ok(ack)
    }
}

/// Simulated mailer that logs instead of delivering
#[derive(Debug, Clone)]
pub struct MockMailer {
    delay: Duration,
    outbox: Arc<Mutex<Vec<EmailRequest>>>,
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMailer {
    /// Mailer with the default one second delay
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_MAIL_DELAY,
            outbox: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Override the simulated delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Messages delivered so far, oldest first
    pub fn sent(&self) -> Vec<EmailRequest> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

#[async_trait]
impl Mailer for MockMailer {
    #[instrument(skip(self, request), fields(to = %request.to))]
    async fn send(&self, request: EmailRequest) -> Result<DeliveryAck, MailError> {
        if request.to.trim().is_empty() {
            return Err(MailError::InvalidRecipient(request.to));
        }

        info!(subject = %request.subject, body = %request.body, "Sending email");
        tokio::time::sleep(self.delay).await;

        self.outbox
            .lock()
            .map_err(|e| MailError::Delivery(e.to_string()))?
            .push(request);

        Ok(DeliveryAck {
            delivered: true,
            sent_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_mentions_plan() {
        let email = EmailTemplate::Welcome {
            plan_name: "Pro Stream".to_string(),
        }
        .render("demo.user@example.com");

        assert_eq!(email.subject, "Welcome to AuraStream! 🚀");
        assert!(email.body.contains("subscribing to the Pro Stream."));
        assert!(email.body.ends_with("The AuraStream Team"));
    }

    #[test]
    fn test_renewal_formats_amount() {
        let template = EmailTemplate::RenewalNotice {
            date: "Sat Nov 01 2025".to_string(),
            amount_cents: 19900,
        };
        assert!(template
            .body()
            .contains("will renew on Sat Nov 01 2025 for $199.00."));
        assert_eq!(template.name(), "renewal_notice");
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_mailer_waits_then_records() {
        let mailer = MockMailer::new();
        let start = tokio::time::Instant::now();

        let ack = mailer
            .send_template("a@example.com", &EmailTemplate::PaymentFailure)
            .await
            .unwrap();

        assert!(ack.delivered);
        assert!(start.elapsed() >= DEFAULT_MAIL_DELAY);
        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Action Required: Payment Failed ⚠️");
    }

    #[tokio::test]
    async fn test_mock_mailer_rejects_blank_recipient() {
        let mailer = MockMailer::new().with_delay(Duration::ZERO);
        let err = mailer
            .send(EmailRequest::new("  ", "s", "b"))
            .await
            .unwrap_err();
        assert!(matches!(err, MailError::InvalidRecipient(_)));
        assert!(mailer.sent().is_empty());
    }
}
