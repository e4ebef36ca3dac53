//! User types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{BillingCycle, PlanId, SubscriptionStatus};

/// Domain every demo identity is issued under
pub const EMAIL_DOMAIN: &str = "example.com";

/// Unique user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Create a new random user ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Demo user session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID
    pub id: UserId,
    /// Display name as typed at login
    pub name: String,
    /// Email derived from the display name
    pub email: String,
    /// Plan the user subscribed to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_plan_id: Option<PlanId>,
    /// Billing cycle recorded at subscription time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<BillingCycle>,
    /// Subscription status
    pub subscription_status: SubscriptionStatus,
    /// When the user logged in
    pub member_since: DateTime<Utc>,
}

impl User {
    /// Create an inactive user for the given display name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: UserId::new(),
            email: derive_email(&name),
            name,
            current_plan_id: None,
            billing_cycle: None,
            subscription_status: SubscriptionStatus::Inactive,
            member_since: Utc::now(),
        }
    }

    /// Whether the user holds an active subscription
    pub fn is_subscribed(&self) -> bool {
        self.subscription_status == SubscriptionStatus::Active
    }
}

/// Derive the demo email address for a display name.
///
/// The name is lower-cased and only the first space becomes a dot, so
/// `"Mary Ann Smith"` maps to `"mary.ann smith@example.com"`.
pub fn derive_email(name: &str) -> String {
    let local = name.to_lowercase().replacen(' ', ".", 1);
    format!("{local}@{EMAIL_DOMAIN}")
}
