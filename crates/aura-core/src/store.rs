//! Application state store
//!
//! The one mutable context of the app. Page controllers borrow it, call the
//! actions below, and render from the accessors afterwards. Mutation goes
//! through `&mut self`, so there is never more than one writer.

use tracing::{debug, info};

use aura_types::{BillingCycle, Plan, PlanId, SubscriptionStatus, User};

use crate::catalog::PlanCatalog;
use crate::error::CoreError;
use crate::notification::{Notification, NotificationCenter, NotificationKind};

/// Session, catalog and preference state
#[derive(Debug, Clone)]
pub struct AppStore {
    user: Option<User>,
    catalog: PlanCatalog,
    selected_plan: Option<Plan>,
    billing_cycle: BillingCycle,
    ai_enabled: bool,
    notifications: NotificationCenter,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppStore {
    /// Store with the seed catalog, monthly billing and AI enabled
    pub fn new() -> Self {
        Self::with_catalog(PlanCatalog::seeded())
    }

    /// Store over a custom catalog
    pub fn with_catalog(catalog: PlanCatalog) -> Self {
        Self {
            user: None,
            catalog,
            selected_plan: None,
            billing_cycle: BillingCycle::Monthly,
            ai_enabled: true,
            notifications: NotificationCenter::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Logged-in user
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether someone is logged in
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Plan catalog
    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    /// Plans in display order
    pub fn plans(&self) -> &[Plan] {
        self.catalog.plans()
    }

    /// Plan chosen while browsing
    pub fn selected_plan(&self) -> Option<&Plan> {
        self.selected_plan.as_ref()
    }

    /// Process-wide billing cycle
    pub fn billing_cycle(&self) -> BillingCycle {
        self.billing_cycle
    }

    /// Whether the AI advisor is reachable
    pub fn is_ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    /// Notification visible right now
    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.visible()
    }

    /// Notification state
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Plan the user is subscribed to, falling back to the selection.
    ///
    /// A subscribed plan that was deleted from the catalog since is not
    /// found here, so the selection is used instead.
    pub fn active_plan(&self) -> Option<&Plan> {
        self.user
            .as_ref()
            .and_then(|u| u.current_plan_id.as_ref())
            .and_then(|id| self.catalog.get(id))
            .or(self.selected_plan.as_ref())
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Log in under a display name, replacing any current user
    pub fn login(&mut self, name: &str) -> &User {
        let user = User::new(name);
        info!(user_id = %user.id, email = %user.email, "User logged in");
        self.user.insert(user)
    }

    /// Log out, dropping the user and the selection
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "User logged out");
        }
        self.selected_plan = None;
        self.show_notification("Logged out successfully", NotificationKind::Info);
    }

    // =========================================================================
    // Browsing and subscription
    // =========================================================================

    /// Remember a plan for checkout; the catalog is not consulted
    pub fn select_plan(&mut self, plan: Plan) {
        debug!(plan_id = %plan.id, "Plan selected");
        self.selected_plan = Some(plan);
    }

    /// Change the billing cycle for every price display
    pub fn set_billing_cycle(&mut self, cycle: BillingCycle) {
        debug!(cycle = %cycle, "Billing cycle changed");
        self.billing_cycle = cycle;
    }

    /// Activate the user's subscription on the selected plan.
    ///
    /// Does nothing unless both a user and a selection exist. Returns whether
    /// the subscription was recorded. The selection is left in place.
    pub fn complete_subscription(&mut self) -> bool {
        let (Some(user), Some(plan)) = (self.user.as_mut(), self.selected_plan.as_ref()) else {
            debug!("Subscription not completed: missing user or plan");
            return false;
        };

        user.subscription_status = SubscriptionStatus::Active;
        user.current_plan_id = Some(plan.id.clone());
        user.billing_cycle = Some(self.billing_cycle);

        info!(
            user_id = %user.id,
            plan_id = %plan.id,
            cycle = %self.billing_cycle,
            "Subscription completed"
        );
        true
    }

    // =========================================================================
    // Plan administration
    // =========================================================================

    /// Append a plan to the catalog
    pub fn add_plan(&mut self, plan: Plan) -> Result<(), CoreError> {
        let name = plan.name.clone();
        if let Err(e) = self.catalog.insert(plan) {
            self.show_notification(format!("Plan \"{name}\" already exists"), NotificationKind::Error);
            return Err(e);
        }
        info!(plan = %name, "Plan created");
        self.show_notification(format!("Plan \"{name}\" created"), NotificationKind::Success);
        Ok(())
    }

    /// Replace the plan with the same ID; unknown IDs are ignored
    pub fn update_plan(&mut self, plan: Plan) -> bool {
        let name = plan.name.clone();
        let updated = self.catalog.update(plan);
        debug!(plan = %name, updated, "Plan update");
        self.show_notification(format!("Plan \"{name}\" updated"), NotificationKind::Success);
        updated
    }

    /// Remove a plan; unknown IDs are ignored
    pub fn delete_plan(&mut self, plan_id: &PlanId) -> Option<Plan> {
        let removed = self.catalog.remove(plan_id);
        debug!(plan_id = %plan_id, removed = removed.is_some(), "Plan delete");
        self.show_notification("Plan deleted", NotificationKind::Info);
        removed
    }

    // =========================================================================
    // Feature flag and notifications
    // =========================================================================

    /// Flip the AI feature flag, returning the new value
    pub fn toggle_ai(&mut self) -> bool {
        self.ai_enabled = !self.ai_enabled;
        let state = if self.ai_enabled { "enabled" } else { "disabled" };
        info!(ai_enabled = self.ai_enabled, "AI features toggled");
        self.show_notification(format!("AI features {state}"), NotificationKind::Info);
        self.ai_enabled
    }

    /// Show a notification, replacing any visible one
    pub fn show_notification(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notifications.show(message, kind);
    }

    /// Close the visible notification
    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pro(store: &AppStore) -> Plan {
        store.catalog().get(&PlanId::new("plan_pro")).cloned().unwrap()
    }

    fn last_message(store: &AppStore) -> (String, NotificationKind) {
        let n = store.notifications().last().unwrap();
        (n.message.clone(), n.kind)
    }

    #[test]
    fn test_initial_state() {
        let store = AppStore::new();
        assert!(store.user().is_none());
        assert!(store.selected_plan().is_none());
        assert_eq!(store.billing_cycle(), BillingCycle::Monthly);
        assert!(store.is_ai_enabled());
        assert_eq!(store.plans().len(), 3);
        assert!(store.notifications().last().is_none());
    }

    #[test]
    fn test_login_overwrites_user() {
        let mut store = AppStore::new();
        let first = store.login("Jane Doe").id;
        let second = store.login("John Roe").id;
        assert_ne!(first, second);
        assert_eq!(store.user().unwrap().email, "john.roe@example.com");
    }

    #[test]
    fn test_logout_clears_user_and_selection() {
        let mut store = AppStore::new();
        store.login("Jane Doe");
        store.select_plan(pro(&store));
        store.logout();

        assert!(store.user().is_none());
        assert!(store.selected_plan().is_none());
        assert_eq!(
            last_message(&store),
            ("Logged out successfully".to_string(), NotificationKind::Info)
        );
    }

    #[test]
    fn test_complete_subscription_needs_user_and_plan() {
        let mut store = AppStore::new();
        assert!(!store.complete_subscription());

        store.select_plan(pro(&store));
        assert!(!store.complete_subscription());

        let mut store = AppStore::new();
        store.login("Jane Doe");
        assert!(!store.complete_subscription());
        assert_eq!(
            store.user().unwrap().subscription_status,
            SubscriptionStatus::Inactive
        );
    }

    #[test]
    fn test_complete_subscription_records_plan_and_cycle() {
        let mut store = AppStore::new();
        store.login("Demo User");
        store.select_plan(pro(&store));
        store.set_billing_cycle(BillingCycle::Yearly);

        assert!(store.complete_subscription());
        let user = store.user().unwrap();
        assert_eq!(user.subscription_status, SubscriptionStatus::Active);
        assert_eq!(user.current_plan_id.as_ref().unwrap(), "plan_pro");
        assert_eq!(user.billing_cycle, Some(BillingCycle::Yearly));
        assert!(store.selected_plan().is_some());
    }

    #[test]
    fn test_stale_selection_still_completes() {
        let mut store = AppStore::new();
        store.login("Demo User");
        store.select_plan(pro(&store));
        store.delete_plan(&PlanId::new("plan_pro"));

        assert!(store.complete_subscription());
        assert_eq!(
            store.user().unwrap().current_plan_id,
            Some(PlanId::new("plan_pro"))
        );
        // Subscribed plan is gone from the catalog; the selection stands in.
        assert_eq!(store.active_plan().unwrap().name, "Pro Stream");
    }

    #[test]
    fn test_plan_admin_notifications() {
        let mut store = AppStore::new();
        let mut plan = pro(&store);
        plan.id = PlanId::new("plan_family");
        plan.name = "Family".to_string();

        store.add_plan(plan.clone()).unwrap();
        assert_eq!(store.plans().last().unwrap().id, plan.id);
        assert_eq!(
            last_message(&store),
            ("Plan \"Family\" created".to_string(), NotificationKind::Success)
        );

        plan.name = "Family Plus".to_string();
        assert!(store.update_plan(plan.clone()));
        assert_eq!(
            last_message(&store).0,
            "Plan \"Family Plus\" updated".to_string()
        );

        assert!(store.delete_plan(&plan.id).is_some());
        assert!(store.delete_plan(&plan.id).is_none());
        assert_eq!(
            last_message(&store),
            ("Plan deleted".to_string(), NotificationKind::Info)
        );
    }

    #[test]
    fn test_add_duplicate_plan_is_rejected() {
        let mut store = AppStore::new();
        let err = store.add_plan(pro(&store)).unwrap_err();
        assert!(matches!(err, CoreError::DuplicatePlanId(_)));
        assert_eq!(store.plans().len(), 3);
        assert_eq!(last_message(&store).1, NotificationKind::Error);
    }

    #[test]
    fn test_update_unknown_plan_is_silent_noop() {
        let mut store = AppStore::new();
        let mut ghost = pro(&store);
        ghost.id = PlanId::new("plan_ghost");
        let before = store.catalog().clone();

        assert!(!store.update_plan(ghost));
        assert_eq!(store.catalog(), &before);
    }

    #[test]
    fn test_toggle_ai_twice_restores_flag() {
        let mut store = AppStore::new();
        assert!(!store.toggle_ai());
        assert_eq!(last_message(&store).0, "AI features disabled");
        assert!(store.toggle_ai());
        assert_eq!(last_message(&store).0, "AI features enabled");
    }

    #[test]
    fn test_active_plan_prefers_subscription() {
        let mut store = AppStore::new();
        store.login("Demo User");
        store.select_plan(pro(&store));
        store.complete_subscription();
        let basic = store.plans()[0].clone();
        store.select_plan(basic);

        assert_eq!(store.active_plan().unwrap().id, "plan_pro");
    }
}
