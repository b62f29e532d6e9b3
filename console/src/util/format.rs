//! Display formatting for money, rates, dates, and experiment maps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// Whole-dollar amount with thousands separators, e.g. `$25,000`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    #[allow(clippy::cast_possible_truncation)]
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 { format!("-${grouped}") } else { format!("${grouped}") }
}

/// One-decimal percentage, e.g. `4.1%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Long-form calendar date (`October 16, 2026`) from an RFC 3339 timestamp.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_long_date(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(ts) => ts.format("%B %-d, %Y").to_string(),
        Err(_) => rfc3339.to_owned(),
    }
}

/// Clock time for chat turns, e.g. `14:05`.
#[must_use]
pub fn format_clock(ts: &DateTime<Utc>) -> String {
    ts.format("%H:%M").to_string()
}

/// Indented JSON object for metric/hyperparameter maps.
#[must_use]
pub fn pretty_json(map: &BTreeMap<String, f64>) -> String {
    match serde_json::to_string_pretty(map) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("could not render map as JSON: {err}");
            String::from("{}")
        }
    }
}

/// Upper-case the first character (`active` -> `Active`).
#[must_use]
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
