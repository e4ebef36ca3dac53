//! Page controllers
//!
//! Each controller keeps only its page's local form state. Shared state is
//! read from and written to the [`AppStore`](crate::AppStore) passed into
//! every call, and actions that navigate return the next [`Route`](crate::Route).

pub mod checkout;
pub mod dashboard;
pub mod landing;
pub mod nav;
pub mod pricing;

pub use checkout::{format_card_number, format_cvc, format_expiry, CheckoutPage, OrderSummary};
pub use dashboard::{DashboardPage, DashboardTab, Overview, PlanDraft};
pub use landing::LandingPage;
pub use nav::{NavBar, NavLink, SessionControl};
pub use pricing::{PlanCard, PricingPage};
