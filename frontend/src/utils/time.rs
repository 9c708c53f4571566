use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
}

/// Date portion of an ISO timestamp (`2025-01-02T09:00:00Z` -> `2025-01-02`).
///
/// Unparseable input falls back to the text before the first `T`.
pub fn date_portion(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => raw.split('T').next().unwrap_or_default().to_string(),
    }
}

/// `Jan 2, 2025` style label, `N/A` when missing or unparseable.
pub fn display_date(raw: Option<&str>) -> String {
    raw.filter(|value| !value.trim().is_empty())
        .and_then(parse_date)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
