//! AuraStream demo
//!
//! Runs a scripted visit through the subscription demo: landing page,
//! pricing with the AI plan advisor, checkout, dashboard emails, plan
//! administration and sign out. Everything except the optional advisor call
//! happens in memory.
//!
//! ## Environment
//!
//! - `API_KEY` / `GEMINI_API_KEY` - advisor credential (fallback answer when unset)
//! - `ADVISOR_MODEL`, `ADVISOR_BASE_URL`, `ADVISOR_TIMEOUT_SECS` - advisor overrides
//! - `SIMULATED_DELAY_MS` - replaces the simulated payment and email delays
//! - `DEMO_DECLINE_FIRST_PAYMENT` - `true` to show a declined checkout first
//! - `RUST_LOG` - log filter

mod config;
mod walkthrough;

use aura_advisor::GeminiAdvisor;
use aura_core::{AppStore, MockMailer, SimulatedProcessor};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::walkthrough::Walkthrough;

/// `RUST_LOG` plus the demo's own levels; the library crates log email
/// dispatch and advisor fallbacks at `info`/`warn`
fn log_filter() -> Result<EnvFilter, ParseError> {
    Ok(EnvFilter::from_default_env()
        .add_directive("aura_demo=debug".parse()?)
        .add_directive("aura_core=info".parse()?)
        .add_directive("aura_advisor=info".parse()?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    aura_utils::load_env();

    // Initialize logging
    tracing_subscriber::registry()
        .with(log_filter()?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AuraStream demo");

    let config = Config::from_env()?;
    tracing::info!(
        advisor_live = config.advisor.has_credential(),
        model = %config.advisor.model,
        simulated_delay_ms = config.simulated_delay.map(|d| d.as_millis() as u64),
        "Configuration loaded"
    );

    let advisor = GeminiAdvisor::new(config.advisor.clone())?;

    let mut processor = SimulatedProcessor::new();
    let mut declining = SimulatedProcessor::new().declining();
    let mut mailer = MockMailer::new();
    if let Some(delay) = config.simulated_delay {
        processor = processor.with_delay(delay);
        declining = declining.with_delay(delay);
        mailer = mailer.with_delay(delay);
    }

    let walkthrough = Walkthrough {
        advisor: &advisor,
        processor: &processor,
        declining_processor: config
            .decline_first_payment
            .then_some(&declining as &dyn aura_core::PaymentProcessor),
        mailer: &mailer,
    };

    let mut store = AppStore::new();
    let route = walkthrough.run(&mut store).await?;

    tracing::info!(
        final_route = %route,
        emails_sent = mailer.sent().len(),
        "Demo finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_includes_library_crates() {
        let filter = log_filter().unwrap().to_string();
        assert!(filter.contains("aura_demo=debug"));
        assert!(filter.contains("aura_core=info"));
        assert!(filter.contains("aura_advisor=info"));
    }
}
