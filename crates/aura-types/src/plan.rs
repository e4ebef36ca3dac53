//! Plan and tier types

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{BillingCycle, TypesError};

/// Plan identifier, unique within a catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(pub String);

impl PlanId {
    /// Create a plan ID from an existing string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate an ID for a newly created plan from the current time
    pub fn generate() -> Self {
        Self(format!("plan_{}", Utc::now().timestamp_millis()))
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlanId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for PlanId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PlanId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Coarse display grouping for plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlanTier {
    /// Entry tier
    #[default]
    Basic,
    /// Mid tier
    Pro,
    /// Top tier
    Enterprise,
}

impl PlanTier {
    /// All tiers in display order
    pub const ALL: [Self; 3] = [Self::Basic, Self::Pro, Self::Enterprise];
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "Basic"),
            Self::Pro => write!(f, "Pro"),
            Self::Enterprise => write!(f, "Enterprise"),
        }
    }
}

impl std::str::FromStr for PlanTier {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "pro" | "professional" => Ok(Self::Pro),
            "enterprise" => Ok(Self::Enterprise),
            _ => Err(TypesError::InvalidTier(s.to_string())),
        }
    }
}

/// Subscription plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Plan ID
    pub id: PlanId,
    /// Display name
    pub name: String,
    /// Tier label
    pub tier: PlanTier,
    /// Monthly price in cents
    pub price_monthly_cents: i64,
    /// Yearly price in cents
    pub price_yearly_cents: i64,
    /// Feature bullet points, in display order
    pub features: Vec<String>,
    /// Who the plan is aimed at
    pub recommended_for: String,
}

impl Plan {
    /// Amount actually charged for one billing period
    pub fn charge_cents(&self, cycle: BillingCycle) -> i64 {
        match cycle {
            BillingCycle::Monthly => self.price_monthly_cents,
            BillingCycle::Yearly => self.price_yearly_cents,
        }
    }

    /// Per-month price shown on plan cards.
    ///
    /// Yearly plans show the annual price spread over twelve months, rounded
    /// to the nearest cent.
    pub fn display_price_cents(&self, cycle: BillingCycle) -> i64 {
        match cycle {
            BillingCycle::Monthly => self.price_monthly_cents,
            BillingCycle::Yearly => self.price_yearly_cents.saturating_add(6).div_euclid(12),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(monthly: i64, yearly: i64) -> Plan {
        Plan {
            id: PlanId::new("plan_test"),
            name: "Test".to_string(),
            tier: PlanTier::Pro,
            price_monthly_cents: monthly,
            price_yearly_cents: yearly,
            features: vec![],
            recommended_for: String::new(),
        }
    }

    #[test]
    fn test_display_price_yearly_rounds_to_cent() {
        assert_eq!(plan(999, 9900).display_price_cents(BillingCycle::Yearly), 825);
        assert_eq!(plan(1999, 19900).display_price_cents(BillingCycle::Yearly), 1658);
        assert_eq!(plan(2999, 29900).display_price_cents(BillingCycle::Yearly), 2492);
    }

    #[test]
    fn test_display_price_saturates_on_extreme_yearly() {
        let p = plan(0, i64::MAX);
        assert_eq!(p.display_price_cents(BillingCycle::Yearly), i64::MAX / 12);
    }

    #[test]
    fn test_charge_uses_full_yearly_amount() {
        let p = plan(1999, 19900);
        assert_eq!(p.charge_cents(BillingCycle::Monthly), 1999);
        assert_eq!(p.charge_cents(BillingCycle::Yearly), 19900);
        assert_eq!(p.display_price_cents(BillingCycle::Monthly), 1999);
    }

    #[test]
    fn test_generated_id_shape() {
        let id = PlanId::generate();
        let millis = id.as_str().strip_prefix("plan_").unwrap();
        assert!(millis.parse::<i64>().is_ok());
    }

    #[test]
    fn test_tier_parse_and_display() {
        for tier in PlanTier::ALL {
            assert_eq!(tier.to_string().parse::<PlanTier>(), Ok(tier));
        }
        assert!("gold".parse::<PlanTier>().is_err());
    }
}
