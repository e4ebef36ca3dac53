//! Usage history types

use serde::{Deserialize, Serialize};

/// One day of streaming usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetric {
    /// Day in `YYYY-MM-DD` form
    pub date: String,
    /// Bandwidth consumed, in GB
    pub bandwidth: f64,
    /// Request count
    pub requests: u64,
}

impl UsageMetric {
    /// Create a usage metric
    pub fn new(date: impl Into<String>, bandwidth: f64, requests: u64) -> Self {
        Self {
            date: date.into(),
            bandwidth,
            requests,
        }
    }

    /// Short `MM-DD` label used on chart axes
    pub fn short_date(&self) -> &str {
        self.date.get(5..).unwrap_or(&self.date)
    }
}
