//! Dashboard: usage overview, subscription settings and plan administration

use chrono::{Days, NaiveDate, Utc};
use tracing::debug;

use aura_types::{format_amount, format_usd, parse_usd, BillingCycle, Plan, PlanId, PlanTier, UsageMetric};

use crate::catalog::PlanCatalog;
use crate::email::{EmailTemplate, Mailer};
use crate::error::CoreError;
use crate::notification::NotificationKind;
use crate::seed::demo_usage;
use crate::store::AppStore;

const RENEWAL_LEAD_DAYS: u64 = 30;
const DEFAULT_PLAN_NAME: &str = "New Plan";

/// Date printed in renewal notices, thirty days after `today`
/// (e.g. `Sat Nov 01 2025`)
pub fn renewal_date(today: NaiveDate) -> String {
    today
        .checked_add_days(Days::new(RENEWAL_LEAD_DAYS))
        .unwrap_or(today)
        .format("%a %b %d %Y")
        .to_string()
}

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DashboardTab {
    /// Current plan, next billing and usage chart
    #[default]
    Overview,
    /// Subscription settings and test emails
    Settings,
    /// Plan administration
    Admin,
    /// Architecture explainer
    Blueprint,
}

impl DashboardTab {
    /// All tabs in display order
    pub const ALL: [Self; 4] = [Self::Overview, Self::Settings, Self::Admin, Self::Blueprint];

    /// Tab caption
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Settings => "Settings",
            Self::Admin => "Admin",
            Self::Blueprint => "Blueprint",
        }
    }
}

/// Overview tab contents
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    /// `Welcome back, <name>`
    pub greeting: String,
    /// Active plan name, or `No Active Plan`
    pub plan_name: String,
    /// Next charge for the current billing cycle, if a plan is active
    pub next_billing_cents: Option<i64>,
    /// Daily usage for the consumption chart
    pub usage: Vec<UsageMetric>,
}

impl Overview {
    /// Next charge as dollars, `$0.00` without a plan
    pub fn next_billing_label(&self) -> String {
        format_usd(self.next_billing_cents.unwrap_or(0))
    }
}

/// Plan editor form. `editing` is set when an existing plan is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanDraft {
    /// Plan being edited, `None` when creating
    pub editing: Option<PlanId>,
    /// Display name
    pub name: String,
    /// Tier
    pub tier: PlanTier,
    /// Monthly price as typed
    pub price_monthly: String,
    /// Yearly price as typed
    pub price_yearly: String,
    /// One feature per line
    pub features: String,
    /// Audience description
    pub recommended_for: String,
}

impl PlanDraft {
    /// Blank draft for a new plan
    pub fn create() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing plan
    pub fn edit(plan: &Plan) -> Self {
        Self {
            editing: Some(plan.id.clone()),
            name: plan.name.clone(),
            tier: plan.tier,
            price_monthly: format_amount(plan.price_monthly_cents),
            price_yearly: format_amount(plan.price_yearly_cents),
            features: plan.features.join("\n"),
            recommended_for: plan.recommended_for.clone(),
        }
    }

    /// Whether saving updates an existing plan
    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// Build the plan this draft describes.
    ///
    /// New plans get a time-derived ID unused in `catalog`. Blank names
    /// become `New Plan`, blank prices become zero, and blank feature lines
    /// are dropped.
    pub fn to_plan(&self, catalog: &PlanCatalog) -> Result<Plan, CoreError> {
        let price = |text: &str| -> Result<i64, CoreError> {
            if text.trim().is_empty() {
                Ok(0)
            } else {
                Ok(parse_usd(text)?)
            }
        };

        Ok(Plan {
            id: self.editing.clone().unwrap_or_else(|| catalog.fresh_id()),
            name: if self.name.trim().is_empty() {
                DEFAULT_PLAN_NAME.to_string()
            } else {
                self.name.clone()
            },
            tier: self.tier,
            price_monthly_cents: price(&self.price_monthly)?,
            price_yearly_cents: price(&self.price_yearly)?,
            features: self
                .features
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
            recommended_for: self.recommended_for.clone(),
        })
    }
}

/// Local state of the dashboard
#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    tab: DashboardTab,
    editor: Option<PlanDraft>,
    sending_email: bool,
}

impl DashboardPage {
    /// Dashboard on the overview tab
    pub fn new() -> Self {
        Self::default()
    }

    /// Active tab
    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    /// Switch tabs
    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    /// Whether a test email is in flight
    pub fn is_sending_email(&self) -> bool {
        self.sending_email
    }

    /// Overview tab, or `None` without a session
    pub fn overview(&self, store: &AppStore) -> Option<Overview> {
        let user = store.user()?;
        let plan = store.active_plan();
        Some(Overview {
            greeting: format!("Welcome back, {}", user.name),
            plan_name: plan.map_or_else(|| "No Active Plan".to_string(), |p| p.name.clone()),
            next_billing_cents: plan.map(|p| p.charge_cents(store.billing_cycle())),
            usage: demo_usage(),
        })
    }

    // =========================================================================
    // Settings: test emails
    // =========================================================================

    /// Send a renewal notice for the active plan to the logged-in user
    pub async fn send_test_renewal(
        &mut self,
        store: &mut AppStore,
        mailer: &dyn Mailer,
        today: NaiveDate,
    ) -> Result<(), CoreError> {
        let user = store.user().ok_or(CoreError::NoActiveSession)?;
        if user.email.is_empty() {
            return Ok(());
        }
        let to = user.email.clone();
        let amount_cents = store
            .active_plan()
            .map_or(0, |p| p.charge_cents(store.billing_cycle()));
        let template = EmailTemplate::RenewalNotice {
            date: renewal_date(today),
            amount_cents,
        };

        self.send(mailer, &to, &template).await?;
        store.show_notification("Test: Renewal email sent to console", NotificationKind::Info);
        Ok(())
    }

    /// [`send_test_renewal`](Self::send_test_renewal) dated from today
    pub async fn send_test_renewal_now(
        &mut self,
        store: &mut AppStore,
        mailer: &dyn Mailer,
    ) -> Result<(), CoreError> {
        self.send_test_renewal(store, mailer, Utc::now().date_naive())
            .await
    }

    /// Send a payment failure notice to the logged-in user
    pub async fn send_test_payment_failure(
        &mut self,
        store: &mut AppStore,
        mailer: &dyn Mailer,
    ) -> Result<(), CoreError> {
        let user = store.user().ok_or(CoreError::NoActiveSession)?;
        if user.email.is_empty() {
            return Ok(());
        }
        let to = user.email.clone();

        self.send(mailer, &to, &EmailTemplate::PaymentFailure).await?;
        store.show_notification(
            "Test: Payment failure email sent to console",
            NotificationKind::Error,
        );
        Ok(())
    }

    async fn send(
        &mut self,
        mailer: &dyn Mailer,
        to: &str,
        template: &EmailTemplate,
    ) -> Result<(), CoreError> {
        self.sending_email = true;
        let result = mailer.send_template(to, template).await;
        self.sending_email = false;
        result?;
        Ok(())
    }

    // =========================================================================
    // Admin: plan editor
    // =========================================================================

    /// Open plan draft, if any
    pub fn editor(&self) -> Option<&PlanDraft> {
        self.editor.as_ref()
    }

    /// Mutable access to the open draft's fields
    pub fn editor_mut(&mut self) -> Option<&mut PlanDraft> {
        self.editor.as_mut()
    }

    /// Open a blank draft for a new plan
    pub fn open_create(&mut self) -> &mut PlanDraft {
        self.editor.insert(PlanDraft::create())
    }

    /// Open a draft pre-filled from `plan`
    pub fn open_edit(&mut self, plan: &Plan) -> &mut PlanDraft {
        self.editor.insert(PlanDraft::edit(plan))
    }

    /// Discard the open draft
    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Save the open draft through the store and close the editor.
    ///
    /// Returns the saved plan's ID. The editor stays open if the draft is
    /// invalid or the store rejects it.
    pub fn save_plan(&mut self, store: &mut AppStore) -> Result<PlanId, CoreError> {
        let draft = self
            .editor
            .as_ref()
            .ok_or_else(|| CoreError::InvalidPlan("no plan open in the editor".to_string()))?;
        let plan = draft.to_plan(store.catalog())?;
        let id = plan.id.clone();

        if draft.is_edit() {
            store.update_plan(plan);
        } else {
            store.add_plan(plan)?;
        }
        debug!(plan_id = %id, "Plan saved from editor");
        self.editor = None;
        Ok(id)
    }

    /// Delete a plan once the user has confirmed
    pub fn delete_plan(&self, store: &mut AppStore, plan_id: &PlanId, confirmed: bool) -> Option<Plan> {
        if !confirmed {
            return None;
        }
        store.delete_plan(plan_id)
    }

    /// Admin row prices, e.g. (`$19.99/mo`, `$199.00/yr`)
    pub fn admin_prices(plan: &Plan) -> (String, String) {
        (
            format!("{}/mo", format_usd(plan.charge_cents(BillingCycle::Monthly))),
            format!("{}/yr", format_usd(plan.charge_cents(BillingCycle::Yearly))),
        )
    }
}
