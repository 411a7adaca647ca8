//! Display formatting for organization codes, token amounts, and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Utc};

/// Display label for an organization code. Unknown codes render empty.
pub fn org_label(code: i32) -> &'static str {
    match code {
        1 => "Platform",
        2 => "Creator",
        3 => "Financial Institution",
        _ => "",
    }
}

/// Space-joined labels for an account's organization codes.
pub fn org_labels(codes: &[i32]) -> String {
    codes
        .iter()
        .map(|&code| org_label(code))
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a token amount with thousands separators.
pub fn format_tokens(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();
    if amount < 0 { format!("-{grouped}") } else { grouped }
}

/// Render a timestamp for tables and cards; `None` renders as a dash.
pub fn format_timestamp(time: Option<&DateTime<Utc>>) -> String {
    time.map_or_else(|| "—".to_owned(), |t| t.format("%Y-%m-%d %H:%M").to_string())
}
