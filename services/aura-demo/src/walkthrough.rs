//! Scripted tour of the product, driving the page controllers the way a
//! visitor clicking through the site would.

use tracing::{info, warn};

use aura_advisor::PlanAdvisor;
use aura_core::pages::{
    CheckoutPage, DashboardPage, DashboardTab, LandingPage, NavBar, PricingPage, SessionControl,
};
use aura_core::{AppStore, Mailer, PaymentProcessor, Route};
use aura_types::{BillingCycle, PlanTier};

/// Collaborators used by the tour
pub struct Walkthrough<'a> {
    /// Recommendation collaborator
    pub advisor: &'a dyn PlanAdvisor,
    /// Processor for the successful checkout
    pub processor: &'a dyn PaymentProcessor,
    /// Used for a first, failing attempt when set
    pub declining_processor: Option<&'a dyn PaymentProcessor>,
    /// Lifecycle email delivery
    pub mailer: &'a dyn Mailer,
}

impl Walkthrough<'_> {
    /// Run the tour against a store and return the final route
    pub async fn run(&self, store: &mut AppStore) -> anyhow::Result<Route> {
        let mut route = LandingPage.start_trial().resolve(store);
        info!(route = %route, "Visitor clicked Start Free Trial");

        // Pricing: compare cycles, ask the advisor, pick its answer
        let mut pricing = PricingPage::new();
        pricing.toggle_billing_cycle(store);
        for card in pricing.cards(store) {
            info!(
                plan = %card.plan.name,
                price = %card.price_label(),
                note = %card.billing_note().unwrap_or_default(),
                "Plan card"
            );
        }
        pricing.toggle_billing_cycle(store);

        pricing.open_advisor(store)?;
        pricing.set_query("We binge 4K movies on weekends, two people, sometimes offline");
        pricing.set_budget("25");
        if let Some(recommendation) = pricing.analyze(store, self.advisor).await? {
            info!(
                plan_id = %recommendation.recommended_plan_id,
                fallback = recommendation.is_fallback(),
                reasoning = %recommendation.reasoning,
                "Advisor answered"
            );
        }

        let chosen = pricing
            .recommended_plan(store)
            .or_else(|| store.plans().iter().find(|p| p.tier == PlanTier::Pro))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("catalog has no plan to choose"))?;
        route = pricing.choose_plan(store, chosen).resolve(store);
        info!(route = %route, "Plan chosen");

        // Checkout
        let mut checkout = CheckoutPage::for_user(store);
        if let Some(summary) = checkout.summary(store) {
            info!(
                plan = %summary.plan_name,
                price = %summary.price_label(),
                "Order summary"
            );
        }
        checkout.set_card_number("4242424242424242");
        checkout.set_expiry("1230");
        checkout.set_cvc("123");

        if let Some(declining) = self.declining_processor {
            if let Err(e) = checkout.submit(store, declining, self.mailer).await {
                warn!(error = %e, "First checkout attempt failed, retrying");
            }
        }
        route = checkout.submit(store, self.processor, self.mailer).await?;
        if let Some(notification) = store.notification() {
            info!(kind = %notification.kind, message = %notification.message, "Notification");
        }

        // Dashboard
        let mut dashboard = DashboardPage::new();
        if let Some(overview) = dashboard.overview(store) {
            info!(
                plan = %overview.plan_name,
                next_billing = %overview.next_billing_label(),
                days_of_usage = overview.usage.len(),
                "Dashboard overview"
            );
        }

        dashboard.select_tab(DashboardTab::Settings);
        dashboard.send_test_renewal_now(store, self.mailer).await?;
        dashboard.send_test_payment_failure(store, self.mailer).await?;

        dashboard.select_tab(DashboardTab::Admin);
        let draft = dashboard.open_create();
        draft.name = "Family Stream".to_string();
        draft.tier = PlanTier::Pro;
        draft.price_monthly = "24.99".to_string();
        draft.price_yearly = "249".to_string();
        draft.features = "5 Users\nHD Quality\nKids Profiles".to_string();
        draft.recommended_for = "Households with children.".to_string();
        let family_id = dashboard.save_plan(store)?;

        let family = store
            .catalog()
            .get(&family_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("saved plan {family_id} missing from catalog"))?;
        dashboard.open_edit(&family).price_monthly = "22.99".to_string();
        dashboard.save_plan(store)?;
        dashboard.delete_plan(store, &family_id, true);
        info!(plans = store.plans().len(), "Admin changes applied");

        store.set_billing_cycle(BillingCycle::Monthly);

        // Sign out from the dashboard
        if let SessionControl::SignedIn { greeting } = NavBar.session_control(store) {
            info!(%greeting, "Navbar");
        }
        route = NavBar.sign_out(store, route);
        info!(route = %route, "Signed out");

        Ok(route)
    }
}
