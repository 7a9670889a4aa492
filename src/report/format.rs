//! Display formatting for currency, percentages and payback periods
//!
//! Non-finite values render as a placeholder so "NaN"/"inf" never reach a report.

use crate::engine::PaybackPeriod;

/// Shown in place of any value that is not a finite number
pub const PLACEHOLDER: &str = "—";

/// US-dollar amount with thousands separators and two decimals, e.g. `-$1,234.50`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let rounded = format!("{:.2}", value.abs());
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };

    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// Fraction as a percentage with two decimals, e.g. `0.2763` -> `27.63%`
pub fn format_percentage(value: f64) -> String {
    let pct = value * 100.0;
    if !pct.is_finite() {
        return PLACEHOLDER.to_string();
    }
    // -0.0 would otherwise print as "-0.00"
    let pct = if pct == 0.0 { 0.0 } else { pct };
    format!("{:.2}%", pct)
}

pub fn format_payback(period: PaybackPeriod) -> String {
    match period {
        PaybackPeriod::Years(years) if years.is_finite() => format!("{:.2} years", years),
        PaybackPeriod::NotWithinHorizon => "No payback".to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
