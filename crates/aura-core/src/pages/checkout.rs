//! Checkout page: order summary, card form and submission
//!
//! Submission charges the simulated processor, sends the welcome email and
//! only then commits the subscription. Any failure before the commit leaves
//! the store untouched apart from an error notification.

use tracing::{error, info, instrument};

use aura_types::{format_usd, BillingCycle, Plan};

use crate::email::{EmailTemplate, Mailer};
use crate::error::{CoreError, PAYMENT_FAILED_MESSAGE};
use crate::notification::NotificationKind;
use crate::payment::{ChargeRequest, PaymentProcessor, PaymentReceipt};
use crate::routes::Route;
use crate::store::AppStore;

const CARD_NUMBER_MAX: usize = 19;
const EXPIRY_MAX: usize = 5;
const CVC_MAX: usize = 4;

fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Group card digits in fours, e.g. `4242 4242 4242 4242`
pub fn format_card_number(input: &str) -> String {
    let digits: Vec<char> = digits(input).chars().collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(CARD_NUMBER_MAX)
        .collect()
}

/// Insert the `MM/YY` slash once a third digit is typed
pub fn format_expiry(input: &str) -> String {
    let digits = digits(input);
    let formatted = if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    };
    formatted.chars().take(EXPIRY_MAX).collect()
}

/// Keep at most four digits
pub fn format_cvc(input: &str) -> String {
    digits(input).chars().take(CVC_MAX).collect()
}

/// Priced line items for the selected plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    /// Selected plan's display name
    pub plan_name: String,
    /// Billing cycle being purchased
    pub cycle: BillingCycle,
    /// Charge for one billing period
    pub price_cents: i64,
    /// Estimated tax, always zero
    pub tax_cents: i64,
}

impl OrderSummary {
    /// Summary for one period of `plan` on `cycle`
    pub fn new(plan: &Plan, cycle: BillingCycle) -> Self {
        Self {
            plan_name: plan.name.clone(),
            cycle,
            price_cents: plan.charge_cents(cycle),
            tax_cents: 0,
        }
    }

    /// Price before tax
    pub fn subtotal_cents(&self) -> i64 {
        self.price_cents
    }

    /// "Total due today"
    pub fn total_cents(&self) -> i64 {
        self.price_cents + self.tax_cents
    }

    /// e.g. `Monthly Billing`
    pub fn cycle_heading(&self) -> String {
        match self.cycle {
            BillingCycle::Monthly => "Monthly Billing".to_string(),
            BillingCycle::Yearly => "Yearly Billing".to_string(),
        }
    }

    /// e.g. `$19.99/month`
    pub fn price_label(&self) -> String {
        format!("{}{}", format_usd(self.price_cents), self.cycle.label())
    }
}

/// Local state of the checkout form
#[derive(Debug, Clone, Default)]
pub struct CheckoutPage {
    card_number: String,
    expiry: String,
    cvc: String,
    name_on_card: String,
    processing: bool,
}

impl CheckoutPage {
    /// Empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Form with the name on card pre-filled from the logged-in user
    pub fn for_user(store: &AppStore) -> Self {
        Self {
            name_on_card: store.user().map(|u| u.name.clone()).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Summary for the current selection, or `None` for the "No plan
    /// selected" placeholder
    pub fn summary(&self, store: &AppStore) -> Option<OrderSummary> {
        store.user()?;
        store
            .selected_plan()
            .map(|plan| OrderSummary::new(plan, store.billing_cycle()))
    }

    /// Read-only email field
    pub fn email<'a>(&self, store: &'a AppStore) -> Option<&'a str> {
        store.user().map(|u| u.email.as_str())
    }

    /// Card number as typed, grouped in fours
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Expiry as `MM/YY`
    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    /// Card security code
    pub fn cvc(&self) -> &str {
        &self.cvc
    }

    /// Cardholder name
    pub fn name_on_card(&self) -> &str {
        &self.name_on_card
    }

    /// Whether a submission is in flight
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Update the card number, keeping digits only
    pub fn set_card_number(&mut self, input: &str) {
        self.card_number = format_card_number(input);
    }

    /// Update the expiry, inserting the slash
    pub fn set_expiry(&mut self, input: &str) {
        self.expiry = format_expiry(input);
    }

    /// Update the security code
    pub fn set_cvc(&mut self, input: &str) {
        self.cvc = format_cvc(input);
    }

    /// Update the cardholder name
    pub fn set_name_on_card(&mut self, input: impl Into<String>) {
        self.name_on_card = input.into();
    }

    /// Check required fields
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            ("card number", &self.card_number),
            ("expiry", &self.expiry),
            ("cvc", &self.cvc),
            ("name on card", &self.name_on_card),
        ];
        match fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(CoreError::MissingField(name)),
            None => Ok(()),
        }
    }

    /// Submit the form.
    ///
    /// On success the subscription is committed, a welcome notification is
    /// shown and the dashboard route is returned. Processing failures show
    /// the payment-failed notification and leave the form usable.
    #[instrument(skip_all)]
    pub async fn submit(
        &mut self,
        store: &mut AppStore,
        processor: &dyn PaymentProcessor,
        mailer: &dyn Mailer,
    ) -> Result<Route, CoreError> {
        self.validate()?;
        let (Some(user), Some(plan)) = (store.user(), store.selected_plan()) else {
            return Err(CoreError::NoPlanSelected);
        };
        let email = user.email.clone();
        let plan_name = plan.name.clone();
        let charge = ChargeRequest {
            plan_id: plan.id.clone(),
            amount_cents: plan.charge_cents(store.billing_cycle()),
            cycle: store.billing_cycle(),
            card_last4: self.card_last4(),
        };

        self.processing = true;
        let result = self.process(processor, mailer, &charge, &email, &plan_name).await;
        self.processing = false;

        match result {
            Ok(receipt) => {
                store.complete_subscription();
                store.show_notification(
                    format!("Welcome to AuraStream! A confirmation email has been sent to {email}"),
                    NotificationKind::Success,
                );
                metrics::counter!("aura_checkouts_completed_total").increment(1);
                info!(receipt_id = %receipt.id, plan_id = %charge.plan_id, "Checkout completed");
                Ok(Route::Dashboard)
            }
            Err(e) => {
                error!(error = %e, plan_id = %charge.plan_id, "Checkout failed");
                store.show_notification(PAYMENT_FAILED_MESSAGE, NotificationKind::Error);
                metrics::counter!("aura_checkouts_failed_total").increment(1);
                Err(e)
            }
        }
    }

    async fn process(
        &self,
        processor: &dyn PaymentProcessor,
        mailer: &dyn Mailer,
        charge: &ChargeRequest,
        email: &str,
        plan_name: &str,
    ) -> Result<PaymentReceipt, CoreError> {
        let receipt = processor.charge(charge).await?;
        if !email.is_empty() {
            let welcome = EmailTemplate::Welcome {
                plan_name: plan_name.to_string(),
            };
            mailer.send_template(email, &welcome).await?;
        }
        Ok(receipt)
    }

    fn card_last4(&self) -> String {
        let digits = digits(&self.card_number);
        digits[digits.len().saturating_sub(4)..].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_card_number() {
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("4242-42"), "4242 42");
        assert_eq!(format_card_number("42424242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("abc"), "");
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry("12"), "12");
        assert_eq!(format_expiry("122"), "12/2");
        assert_eq!(format_expiry("1225"), "12/25");
        assert_eq!(format_expiry("12/259"), "12/25");
    }

    #[test]
    fn test_format_cvc() {
        assert_eq!(format_cvc("12a345"), "1234");
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut page = CheckoutPage::new();
        assert!(matches!(page.validate(), Err(CoreError::MissingField("card number"))));

        page.set_card_number("4242424242424242");
        page.set_expiry("1225");
        page.set_cvc("123");
        assert!(matches!(page.validate(), Err(CoreError::MissingField("name on card"))));

        page.set_name_on_card("Demo User");
        assert!(page.validate().is_ok());
        assert_eq!(page.card_last4(), "4242");
    }

    #[test]
    fn test_for_user_prefills_name_on_card() {
        let mut store = AppStore::new();
        assert_eq!(CheckoutPage::for_user(&store).name_on_card(), "");

        store.login("Demo User");
        let mut page = CheckoutPage::for_user(&store);
        assert_eq!(page.name_on_card(), "Demo User");

        page.set_card_number("4242424242424242");
        page.set_expiry("1230");
        page.set_cvc("123");
        assert!(page.validate().is_ok());
    }

    #[test]
    fn test_summary_for_yearly_pro() {
        let mut store = AppStore::new();
        let plan = store.plans()[1].clone();
        store.select_plan(plan);
        store.set_billing_cycle(BillingCycle::Yearly);

        assert!(CheckoutPage::new().summary(&store).is_none());

        store.login("Demo User");
        let summary = CheckoutPage::new().summary(&store).unwrap();
        assert_eq!(summary.plan_name, "Pro Stream");
        assert_eq!(summary.total_cents(), 19_900);
        assert_eq!(summary.price_label(), "$199.00/year");
        assert_eq!(summary.cycle_heading(), "Yearly Billing");
    }
}
