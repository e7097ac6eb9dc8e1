//! Timestamp parsing for dataset cells and CLI date arguments.

use chrono::{NaiveDate, NaiveDateTime};

/// Date-time layouts accepted in dataset cells, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a dataset timestamp.
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, the `T`-separated ISO form, fractional
/// seconds, and a bare `YYYY-MM-DD` (taken as midnight). Surrounding
/// whitespace is ignored.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| parse_date(value).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod tests;
