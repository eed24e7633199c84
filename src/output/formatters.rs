//! Reusable formatting utilities for CLI output
//!
//! Dates are shown the way the shop reads them (`dd/mm/yyyy`), money in
//! reais.

use crate::client::models::time::{parse_date, parse_instant};

/// Placeholder for absent values
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a backend date (`2025-03-14` or an ISO instant) as `14/03/2025`.
///
/// Returns "N/A" if the value is missing, or the raw value if it cannot be
/// parsed.
pub fn format_date(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => NOT_AVAILABLE.to_string(),
        Some(raw) => parse_date(raw)
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// Format a backend instant as `14/03/2025 10:30` in UTC.
///
/// # Example output
/// `14/03/2025 10:30 UTC`
pub fn format_datetime(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => NOT_AVAILABLE.to_string(),
        Some(raw) => parse_instant(raw)
            .map(|dt| dt.format("%d/%m/%Y %H:%M UTC").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// Format whole reais as `R$ 1.234,00`
pub fn format_currency(reais: u64) -> String {
    let digits = reais.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("R$ {},00", grouped)
}

/// Render a 1-5 rating as stars, e.g. `★★★★☆`
pub fn format_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Value or "N/A"
pub fn or_na(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Truncate string to max characters with ellipsis
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
