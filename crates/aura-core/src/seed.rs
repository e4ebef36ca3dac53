//! Seed catalog and demo usage history

use aura_types::{Plan, PlanId, PlanTier, UsageMetric};

/// Product name used in copy and email templates
pub const APP_NAME: &str = "AuraStream";

/// Display name used for the one-click demo login
pub const DEMO_USER_NAME: &str = "Demo User";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The three plans every store starts with
pub fn seed_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: PlanId::new("plan_basic"),
            name: "Starter Stream".to_string(),
            tier: PlanTier::Basic,
            price_monthly_cents: 999,
            price_yearly_cents: 9_900,
            features: strings(&["1 User", "SD Quality", "Ad-supported", "Limited Support"]),
            recommended_for: "Individuals who watch casually on mobile devices.".to_string(),
        },
        Plan {
            id: PlanId::new("plan_pro"),
            name: "Pro Stream".to_string(),
            tier: PlanTier::Pro,
            price_monthly_cents: 1_999,
            price_yearly_cents: 19_900,
            features: strings(&[
                "3 Users",
                "HD Quality",
                "Ad-free",
                "Priority Email Support",
                "Offline Downloads",
            ]),
            recommended_for: "Small families or couples who want high definition content."
                .to_string(),
        },
        Plan {
            id: PlanId::new("plan_ent"),
            name: "Ultra Stream".to_string(),
            tier: PlanTier::Enterprise,
            price_monthly_cents: 2_999,
            price_yearly_cents: 29_900,
            features: strings(&[
                "Unlimited Users",
                "4K Ultra HD",
                "Dolby Atmos",
                "24/7 Phone Support",
                "Early Access",
            ]),
            recommended_for: "Large households, tech enthusiasts, and home theater owners."
                .to_string(),
        },
    ]
}

/// Seven days of mock bandwidth usage shown on the dashboard
pub fn demo_usage() -> Vec<UsageMetric> {
    vec![
        UsageMetric::new("2023-10-01", 12.0, 1200),
        UsageMetric::new("2023-10-02", 18.0, 1500),
        UsageMetric::new("2023-10-03", 15.0, 1300),
        UsageMetric::new("2023-10-04", 25.0, 2100),
        UsageMetric::new("2023-10-05", 22.0, 1900),
        UsageMetric::new("2023-10-06", 30.0, 2500),
        UsageMetric::new("2023-10-07", 28.0, 2300),
    ]
}
