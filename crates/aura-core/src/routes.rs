//! Application routes and the session guard

use crate::store::AppStore;

/// Navigable pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Landing page (`/`)
    #[default]
    Home,
    /// Plan grid and advisor (`/pricing`)
    Pricing,
    /// Payment form (`/checkout`)
    Checkout,
    /// Account dashboard (`/dashboard`)
    Dashboard,
}

impl Route {
    /// All routes in navigation order
    pub const ALL: [Self; 4] = [Self::Home, Self::Pricing, Self::Checkout, Self::Dashboard];

    /// URL path of the page
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Pricing => "/pricing",
            Self::Checkout => "/checkout",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Parse a path, tolerating a `#` prefix and trailing slashes.
    /// Unknown paths map to [`Route::Home`].
    pub fn from_path(path: &str) -> Self {
        let path = path.trim().trim_start_matches('#');
        match path.trim_end_matches('/') {
            "/pricing" => Self::Pricing,
            "/checkout" => Self::Checkout,
            "/dashboard" => Self::Dashboard,
            _ => Self::Home,
        }
    }

    /// Whether the page needs a logged-in user
    pub fn requires_session(&self) -> bool {
        matches!(self, Self::Checkout | Self::Dashboard)
    }

    /// Page actually shown for this route given the store's session
    pub fn resolve(self, store: &AppStore) -> Self {
        if self.requires_session() && !store.is_logged_in() {
            Self::Pricing
        } else {
            self
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
