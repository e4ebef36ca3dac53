//! Aura Core - application state and page logic
//!
//! Everything the demo "backend" does lives here, in memory:
//! - [`AppStore`]: the single mutable context (user, catalog, selection,
//!   billing cycle, AI flag, visible notification)
//! - [`Mailer`] / [`MockMailer`]: simulated lifecycle emails
//! - [`PaymentProcessor`] / [`SimulatedProcessor`]: simulated card charges
//! - [`pages`]: controllers for the landing, pricing, checkout and dashboard
//!   pages, holding only local form state
//!
//! # Example
//!
//! ```rust,ignore
//! use aura_core::{AppStore, MockMailer, SimulatedProcessor};
//! use aura_core::pages::{CheckoutPage, PricingPage};
//!
//! let mut store = AppStore::new();
//! let mut pricing = PricingPage::new();
//!
//! let pro = store.catalog().get(&"plan_pro".into()).cloned().unwrap();
//! let route = pricing.choose_plan(&mut store, pro);
//!
//! let mut checkout = CheckoutPage::new();
//! checkout.set_card_number("4242424242424242");
//! // ...
//! let route = checkout.submit(&mut store, &SimulatedProcessor::new(), &MockMailer::new()).await?;
//! ```

pub mod catalog;
pub mod email;
pub mod error;
pub mod notification;
pub mod pages;
pub mod payment;
pub mod routes;
pub mod seed;
pub mod store;

pub use catalog::PlanCatalog;
pub use email::{DeliveryAck, EmailRequest, EmailTemplate, Mailer, MockMailer};
pub use error::{CoreError, MailError};
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use payment::{ChargeRequest, PaymentProcessor, PaymentReceipt, SimulatedProcessor};
pub use routes::Route;
pub use store::AppStore;
