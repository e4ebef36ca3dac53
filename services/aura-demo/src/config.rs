//! Configuration for the demo walkthrough.

use std::time::Duration;

use aura_advisor::AdvisorConfig;
use aura_utils::env_var;

/// Demo configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Recommendation client configuration
    pub advisor: AdvisorConfig,
    /// Overrides both simulated delays (payment and email) when set
    pub simulated_delay: Option<Duration>,
    /// Make the simulated processor decline the first checkout attempt
    pub decline_first_payment: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut advisor = AdvisorConfig::from_env();

        if let Some(secs) = env_var("ADVISOR_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|_| ConfigError::Invalid("ADVISOR_TIMEOUT_SECS"))?;
            advisor = advisor.with_request_timeout(Duration::from_secs(secs));
        }

        let simulated_delay = env_var("SIMULATED_DELAY_MS")
            .map(|ms| {
                ms.parse()
                    .map(Duration::from_millis)
                    .map_err(|_| ConfigError::Invalid("SIMULATED_DELAY_MS"))
            })
            .transpose()?;

        let decline_first_payment = env_var("DEMO_DECLINE_FIRST_PAYMENT")
            .map(|v| v.parse().map_err(|_| ConfigError::Invalid("DEMO_DECLINE_FIRST_PAYMENT")))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            advisor,
            simulated_delay,
            decline_first_payment,
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
