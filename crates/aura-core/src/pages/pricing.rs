//! Pricing page: plan cards, billing toggle and the AI plan advisor panel

use tracing::debug;

use aura_advisor::{PlanAdvisor, Recommendation, RecommendationRequest};
use aura_types::{format_usd, BillingCycle, Plan};

use crate::error::CoreError;
use crate::routes::Route;
use crate::seed::{demo_usage, DEMO_USER_NAME};
use crate::store::AppStore;

/// One plan as drawn on the pricing grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCard<'a> {
    /// Catalog plan
    pub plan: &'a Plan,
    /// Per-month price for the active cycle
    pub display_price_cents: i64,
    /// Full annual charge, shown under the price on yearly billing
    pub billed_yearly_cents: Option<i64>,
    /// Matches the advisor's latest recommendation
    pub is_recommended: bool,
}

impl PlanCard<'_> {
    /// Price text, e.g. `$16.58 /mo`
    pub fn price_label(&self) -> String {
        format!("{} /mo", format_usd(self.display_price_cents))
    }

    /// Yearly billing note, e.g. `Billed $199.00 yearly`
    pub fn billing_note(&self) -> Option<String> {
        self.billed_yearly_cents
            .map(|cents| format!("Billed {} yearly", format_usd(cents)))
    }
}

/// Local state of the pricing page
#[derive(Debug, Clone, Default)]
pub struct PricingPage {
    advisor_open: bool,
    query: String,
    budget: String,
    features: String,
    analyzing: bool,
    recommendation: Option<Recommendation>,
}

impl PricingPage {
    /// Page with the advisor closed and an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards for every catalog plan, in catalog order
    pub fn cards<'a>(&self, store: &'a AppStore) -> Vec<PlanCard<'a>> {
        let cycle = store.billing_cycle();
        store
            .plans()
            .iter()
            .map(|plan| PlanCard {
                plan,
                display_price_cents: plan.display_price_cents(cycle),
                billed_yearly_cents: (cycle == BillingCycle::Yearly)
                    .then_some(plan.price_yearly_cents),
                is_recommended: self
                    .recommendation
                    .as_ref()
                    .is_some_and(|r| r.recommended_plan_id == plan.id),
            })
            .collect()
    }

    /// Monthly / yearly switch
    pub fn toggle_billing_cycle(&self, store: &mut AppStore) -> BillingCycle {
        let cycle = store.billing_cycle().toggled();
        store.set_billing_cycle(cycle);
        cycle
    }

    /// Select a plan, sign in as the demo user and head to checkout
    pub fn choose_plan(&self, store: &mut AppStore, plan: Plan) -> Route {
        store.select_plan(plan);
        store.login(DEMO_USER_NAME);
        Route::Checkout
    }

    // =========================================================================
    // AI advisor panel
    // =========================================================================

    /// Whether the advisor panel is shown
    pub fn is_advisor_open(&self) -> bool {
        self.advisor_open
    }

    /// Whether an advisor request is in flight
    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// Latest advisor answer
    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// Catalog plan matching the latest recommendation, if it still exists
    pub fn recommended_plan<'a>(&self, store: &'a AppStore) -> Option<&'a Plan> {
        self.recommendation
            .as_ref()
            .and_then(|r| store.catalog().get(&r.recommended_plan_id))
    }

    /// Open the advisor panel; only possible with AI enabled
    pub fn open_advisor(&mut self, store: &AppStore) -> Result<(), CoreError> {
        if !store.is_ai_enabled() {
            return Err(CoreError::AiDisabled);
        }
        self.advisor_open = true;
        Ok(())
    }

    /// Close the advisor panel
    pub fn close_advisor(&mut self) {
        self.advisor_open = false;
    }

    /// Close the panel if AI was switched off elsewhere
    pub fn sync(&mut self, store: &AppStore) {
        if !store.is_ai_enabled() {
            self.advisor_open = false;
        }
    }

    /// Flip the AI feature flag from the page toggle
    pub fn toggle_ai(&mut self, store: &mut AppStore) -> bool {
        let enabled = store.toggle_ai();
        self.sync(store);
        enabled
    }

    /// Update the free-text needs field
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Update the monthly budget field
    pub fn set_budget(&mut self, budget: impl Into<String>) {
        self.budget = budget.into();
    }

    /// Update the desired features field
    pub fn set_features(&mut self, features: impl Into<String>) {
        self.features = features.into();
    }

    /// Build the advisor request from the form.
    ///
    /// Returns `None` when the description, budget and features are all
    /// blank. Budget text that is not a number counts as no budget.
    pub fn build_request(&self, store: &AppStore) -> Option<RecommendationRequest> {
        if self.query.trim().is_empty() && self.budget.is_empty() && self.features.trim().is_empty() {
            return None;
        }

        let mut request = RecommendationRequest::new(self.query.clone(), store.plans().to_vec())
            .with_features(self.features.clone())
            .with_usage_history(demo_usage());

        if let Some(budget) = self
            .budget
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|b| b.is_finite())
        {
            request = request.with_budget(budget);
        }
        Some(request)
    }

    /// Ask the advisor for a recommendation.
    ///
    /// Any previous recommendation is cleared first. An empty form does
    /// nothing and returns `Ok(None)`.
    pub async fn analyze(
        &mut self,
        store: &AppStore,
        advisor: &dyn PlanAdvisor,
    ) -> Result<Option<&Recommendation>, CoreError> {
        if !store.is_ai_enabled() {
            return Err(CoreError::AiDisabled);
        }
        let Some(request) = self.build_request(store) else {
            return Ok(None);
        };

        self.analyzing = true;
        self.recommendation = None;
        let recommendation = advisor.recommend(&request).await;
        self.analyzing = false;

        debug!(
            plan_id = %recommendation.recommended_plan_id,
            source = recommendation.source.as_label(),
            "Recommendation received"
        );
        Ok(Some(&*self.recommendation.insert(recommendation)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yearly_cards_show_monthly_equivalent() {
        let mut store = AppStore::new();
        let page = PricingPage::new();
        page.toggle_billing_cycle(&mut store);

        let cards = page.cards(&store);
        assert_eq!(cards[1].display_price_cents, 1658);
        assert_eq!(cards[1].price_label(), "$16.58 /mo");
        assert_eq!(cards[1].billing_note().unwrap(), "Billed $199.00 yearly");
        assert!(cards.iter().all(|c| !c.is_recommended));
    }

    #[test]
    fn test_monthly_cards_have_no_billing_note() {
        let store = AppStore::new();
        let cards = PricingPage::new().cards(&store);
        assert_eq!(cards[0].price_label(), "$9.99 /mo");
        assert!(cards[0].billing_note().is_none());
    }

    #[test]
    fn test_choose_plan_logs_in_demo_user() {
        let mut store = AppStore::new();
        let plan = store.plans()[2].clone();

        let route = PricingPage::new().choose_plan(&mut store, plan);
        assert_eq!(route, Route::Checkout);
        assert_eq!(store.user().unwrap().name, "Demo User");
        assert_eq!(store.selected_plan().unwrap().id, "plan_ent");
    }

    #[test]
    fn test_advisor_closes_when_ai_disabled() {
        let mut store = AppStore::new();
        let mut page = PricingPage::new();
        page.open_advisor(&store).unwrap();

        assert!(!page.toggle_ai(&mut store));
        assert!(!page.is_advisor_open());
        assert!(matches!(page.open_advisor(&store), Err(CoreError::AiDisabled)));
    }

    #[test]
    fn test_empty_form_builds_no_request() {
        let store = AppStore::new();
        let mut page = PricingPage::new();
        page.set_query("   ");
        assert!(page.build_request(&store).is_none());
    }

    #[test]
    fn test_unparsable_budget_is_ignored() {
        let store = AppStore::new();
        let mut page = PricingPage::new();
        page.set_budget("cheap");

        let request = page.build_request(&store).unwrap();
        assert!(request.budget.is_none());
        assert_eq!(request.available_plans.len(), 3);
        assert_eq!(request.usage_history.unwrap().len(), 7);

        page.set_budget(" 25.5 ");
        assert_eq!(page.build_request(&store).unwrap().budget, Some(25.5));
    }
}
