//! Timestamp parsing for backend date fields
//!
//! `criadoEm`/`atualizadoEm` are ISO-8601 instants; appointment `data` is a
//! bare `YYYY-MM-DD`. Both are read leniently: anything unparseable is
//! treated as missing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse an instant, accepting RFC 3339, naive date-times and bare dates
/// (midnight UTC).
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    parse_date(value).and_then(|d| d.and_hms_opt(0, 0, 0)).map(|n| n.and_utc())
}

/// Parse the date part of a value (`2025-03-14` or `2025-03-14T10:00:00Z`)
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
