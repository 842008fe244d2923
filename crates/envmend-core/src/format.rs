//! Presentation-layer formatting helpers.
//!
//! Pure and total: missing, unparsable, or otherwise unusable input yields
//! [`PLACEHOLDER`]. Nothing here panics or returns an error to the caller.

use std::fmt::Write as _;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Rendered in place of a value the UI cannot format.
pub const PLACEHOLDER: &str = "--";

/// Format a date/time string with a chrono strftime `pattern`.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, a bare `YYYY-MM-DD` (midnight),
/// or integer epoch milliseconds. `None`, unparsable input, and patterns the
/// parsed value cannot satisfy (unknown specifiers, `%Z` without a timezone)
/// all come back as the placeholder.
pub fn format_date(value: Option<&str>, pattern: &str) -> String {
    let Some(raw) = value else {
        return PLACEHOLDER.to_string();
    };
    let raw = raw.trim();
    let Some(dt) = parse_datetime(raw) else {
        return PLACEHOLDER.to_string();
    };
    // write! surfaces formatting failures as Err; `.to_string()` would panic.
    let mut out = String::new();
    if write!(out, "{}", dt.format(pattern)).is_err() {
        return PLACEHOLDER.to_string();
    }
    out
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        // Keep the wall-clock time as written, not shifted to UTC.
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    if let Ok(ms) = raw.parse::<i64>() {
        return DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.naive_utc());
    }
    None
}

/// Format `amount` as a symbol-prefixed, thousands-grouped currency string
/// with two decimals: `format_currency(1234.5, "USD")` is `"$1,234.50"`.
///
/// Non-finite amounts yield the placeholder. Unknown currency codes fall
/// back to the code itself as the prefix.
pub fn format_currency(amount: f64, currency: &str) -> String {
    if !amount.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    format!(
        "{sign}{}{}.{:02}",
        currency_symbol(currency),
        group_thousands(cents / 100),
        cents % 100
    )
}

/// String-input variant: non-numeric input yields the placeholder.
pub fn parse_and_format_currency(raw: &str, currency: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(amount) => format_currency(amount, currency),
        Err(_) => PLACEHOLDER.to_string(),
    }
}

fn currency_symbol(code: &str) -> String {
    match code.to_ascii_uppercase().as_str() {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" | "CNY" => "¥".to_string(),
        "BRL" => "R$".to_string(),
        "INR" => "₹".to_string(),
        "KRW" => "₩".to_string(),
        other if !other.is_empty() => format!("{} ", other),
        _ => String::new(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
