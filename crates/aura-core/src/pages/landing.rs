//! Landing page

use crate::routes::Route;
use crate::seed::APP_NAME;

/// Static marketing page; both calls to action lead to pricing
#[derive(Debug, Clone, Copy, Default)]
pub struct LandingPage;

impl LandingPage {
    /// Product name in the hero
    pub fn title(&self) -> &'static str {
        APP_NAME
    }

    /// Primary "Start Free Trial" button
    pub fn start_trial(&self) -> Route {
        Route::Pricing
    }

    /// Closing "Get Started Now" banner button
    pub fn get_started(&self) -> Route {
        Route::Pricing
    }
}
