//! Advisor configuration

use std::time::Duration;

use aura_utils::{env_var, env_var_any};

/// Default Generative Language API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for recommendations
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Recommendation client configuration
#[derive(Clone)]
pub struct AdvisorConfig {
    /// API credential; `None` selects the fallback path
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// API base URL (overridable for tests)
    pub base_url: String,
    /// Optional per-request timeout (none by default)
    pub request_timeout: Option<Duration>,
}

impl AdvisorConfig {
    /// Create a config with the given credential
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Load configuration from environment variables.
    ///
    /// `API_KEY` holds the credential (`GEMINI_API_KEY` is accepted as an
    /// alias). `ADVISOR_MODEL` and `ADVISOR_BASE_URL` override the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(key) = env_var_any(&["API_KEY", "GEMINI_API_KEY"]) {
            config = config.with_api_key(key);
        }
        if let Some(model) = env_var("ADVISOR_MODEL") {
            config.model = model;
        }
        if let Some(base_url) = env_var("ADVISOR_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        config
    }

    /// Set the credential; blank strings count as missing
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        self.api_key = if key.trim().is_empty() { None } else { Some(key) };
        self
    }

    /// Set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a request timeout
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Whether a credential is present
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full `generateContent` endpoint for the configured model
    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl std::fmt::Debug for AdvisorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
