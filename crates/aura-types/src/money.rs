//! Money helpers
//!
//! Amounts are carried as integer cents. These helpers convert to and from
//! the two-decimal dollar strings shown to users.

use crate::TypesError;

/// Largest amount `parse_usd` accepts, in cents ($1,000,000,000.00)
pub const MAX_AMOUNT_CENTS: i64 = 100_000_000_000;

/// Format cents as a bare two-decimal amount (`1999` -> `"19.99"`)
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Format cents as dollars (`1999` -> `"$19.99"`)
pub fn format_usd(cents: i64) -> String {
    format!("${}", format_amount(cents))
}

/// Convert cents to a floating-point dollar amount
pub fn cents_to_dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Parse a dollar string into cents.
///
/// Accepts an optional leading `$` and up to two decimals; extra decimals are
/// rounded to the nearest cent. Amounts above [`MAX_AMOUNT_CENTS`] are
/// rejected.
pub fn parse_usd(input: &str) -> Result<i64, TypesError> {
    let trimmed = input.trim().trim_start_matches('$').trim();
    if trimmed.is_empty() {
        return Err(TypesError::InvalidAmount(input.to_string()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| TypesError::InvalidAmount(input.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(TypesError::InvalidAmount(input.to_string()));
    }

    let cents = (value * 100.0).round();
    if cents > MAX_AMOUNT_CENTS as f64 {
        return Err(TypesError::InvalidAmount(input.to_string()));
    }
    Ok(cents as i64)
}
