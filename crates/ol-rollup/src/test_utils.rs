//! Shared test utilities for ol-rollup

use chrono::NaiveDate;
use ol_core::{parse_timestamp, OrderLine};

/// Create an order line purchased at `ts` (`YYYY-MM-DD HH:MM:SS` or a bare date)
pub(crate) fn line(order_id: &str, customer_id: &str, ts: &str, value: f64) -> OrderLine {
    let purchased_at = parse_timestamp(ts).unwrap_or_else(|| panic!("bad test timestamp {ts}"));
    OrderLine::new(order_id, customer_id, purchased_at, value)
}

/// Shorthand for a calendar date
pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The three-order example: A buys twice, B once, across two days
pub(crate) fn three_orders() -> Vec<OrderLine> {
    vec![
        line("o1", "A", "2017-01-01 09:00:00", 10.0),
        line("o2", "B", "2017-01-01 15:30:00", 5.0),
        line("o3", "A", "2017-01-02 11:00:00", 20.0),
    ]
}
