//! Navigation bar

use crate::routes::Route;
use crate::store::AppStore;

/// A navigation link and whether it points at the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Link text
    pub label: &'static str,
    /// Link target
    pub route: Route,
    /// Highlighted as the current page
    pub active: bool,
}

/// Right-hand side of the bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionControl {
    /// "Hi, <name>" plus a Sign Out button
    SignedIn { greeting: String },
    /// "Get Started" button leading to pricing
    GetStarted,
}

/// Navigation bar rendered on every page
#[derive(Debug, Clone, Copy, Default)]
pub struct NavBar;

impl NavBar {
    const LINKS: [(&'static str, Route); 3] = [
        ("Home", Route::Home),
        ("Pricing", Route::Pricing),
        ("Dashboard", Route::Dashboard),
    ];

    /// Links shown on every page, marking `current`
    pub fn links(&self, current: Route) -> Vec<NavLink> {
        Self::LINKS
            .iter()
            .map(|&(label, route)| NavLink {
                label,
                route,
                active: route == current,
            })
            .collect()
    }

    /// Greeting and Sign Out, or Get Started
    pub fn session_control(&self, store: &AppStore) -> SessionControl {
        match store.user() {
            Some(user) => SessionControl::SignedIn {
                greeting: format!("Hi, {}", user.name),
            },
            None => SessionControl::GetStarted,
        }
    }

    /// Target of the "Get Started" button
    pub fn get_started(&self) -> Route {
        Route::Pricing
    }

    /// Log out and re-resolve the current page through the session guard
    pub fn sign_out(&self, store: &mut AppStore, current: Route) -> Route {
        store.logout();
        current.resolve(store)
    }
}
