//! Usage history analysis
//!
//! Condenses a short bandwidth history into the figures the prompt quotes.

use aura_types::UsageMetric;

/// Days used to project a monthly figure
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Coarse consumption band, by projected monthly bandwidth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    /// Under 100 GB a month
    Low,
    /// 100 to 500 GB a month
    Moderate,
    /// Over 500 GB a month
    High,
}

impl UsageLevel {
    /// Classify a projected monthly bandwidth in GB
    pub fn from_monthly_gb(gb: f64) -> Self {
        if gb < 100.0 {
            Self::Low
        } else if gb <= 500.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

impl std::fmt::Display for UsageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Summary of a usage history
#[derive(Debug, Clone, PartialEq)]
pub struct UsageAnalysis {
    /// Number of days in the history
    pub days: usize,
    /// Average daily bandwidth in GB
    pub daily_average_gb: f64,
    /// Daily average projected over a month
    pub projected_monthly_gb: f64,
    /// Band the projection falls into
    pub level: UsageLevel,
}

impl UsageAnalysis {
    /// Analyze a history; `None` when it is empty
    pub fn from_history(history: &[UsageMetric]) -> Option<Self> {
        if history.is_empty() {
            return None;
        }

        let total: f64 = history.iter().map(|m| m.bandwidth).sum();
        let daily_average_gb = total / history.len() as f64;
        let projected_monthly_gb = daily_average_gb * DAYS_PER_MONTH;

        Some(Self {
            days: history.len(),
            daily_average_gb,
            projected_monthly_gb,
            level: UsageLevel::from_monthly_gb(projected_monthly_gb),
        })
    }

    /// Prompt section describing this analysis
    pub fn prompt_context(&self) -> String {
        format!(
            "User Usage Analysis (Past {days} days):\n\
             - Estimated Monthly Bandwidth: ~{monthly:.0} GB\n\
             - Daily Average: {daily:.1} GB\n\
             - Context:\n  \
               - < 100GB/mo: Low usage (Casual)\n  \
               - 100-500GB/mo: Moderate usage (Regular HD)\n  \
               - > 500GB/mo: High usage (4K/Heavy streaming)",
            days = self.days,
            monthly = self.projected_monthly_gb,
            daily = self.daily_average_gb,
        )
    }
}
