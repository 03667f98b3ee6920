//! Cell formatting helpers.
//!
//! Every helper here is total: malformed amounts degrade to 0, malformed
//! dates render as their original text. Nothing in this module can fail, so
//! the render path never has to handle errors from individual cells.
//!
//! Output conventions follow the dataset's origin locale (vi-VN): digits
//! grouped with `.`, the `đ` currency suffix, and `DD/MM/YYYY` dates.

use crate::record::Amount;
use chrono::{DateTime, NaiveDate};

/// Parse a revenue value into a number.
///
/// Numbers pass through as-is; strings are parsed after stripping
/// thousands-separator commas. Missing, empty, or unparseable input yields 0.
pub fn parse_amount(value: Option<&Amount>) -> f64 {
    match value {
        Some(Amount::Number(n)) => *n,
        Some(Amount::Text(s)) => {
            let stripped = s.trim().replace(',', "");
            if stripped.is_empty() {
                0.0
            } else {
                stripped.parse::<f64>().unwrap_or(0.0)
            }
        }
        None => 0.0,
    }
}

/// Render a revenue value with grouped digits and the currency suffix.
pub fn format_amount(value: Option<&Amount>) -> String {
    let amount = parse_amount(value);
    format!("{} đ", group_digits(amount))
}

/// Render an upload date as `DD/MM/YYYY`.
///
/// Accepts `YYYY-MM-DD` dates and RFC 3339 timestamps. Anything else is
/// returned unchanged so a non-empty input never renders empty.
pub fn format_date(value: &str) -> String {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return ts.date_naive().format("%d/%m/%Y").to_string();
    }
    value.to_string()
}

/// Group the integral digits of a non-negative-or-negative amount with `.`
/// separators; fractional amounts keep two decimals behind a `,`.
fn group_digits(amount: f64) -> String {
    let negative = amount < 0.0;
    // Round to two decimals up front so a carry lands in the integral part
    // (1.999 renders as 2, not as a three-digit fraction)
    let magnitude = (amount.abs() * 100.0).round() / 100.0;
    let integral = magnitude.trunc() as u64;
    let cents = (magnitude.fract() * 100.0).round() as u64;

    let digits = integral.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if cents > 0 {
        out.push_str(&format!(",{cents:02}"));
    }
    out
}
