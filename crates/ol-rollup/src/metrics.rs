//! Headline numbers derived from the rollups

use crate::rfm::RfmRecord;
use crate::temporal::PeriodRollup;
use serde::Serialize;

/// Order and revenue totals across every period of a temporal rollup
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OrderTotals {
    pub orders: usize,
    pub revenue: f64,
}

/// Mean RFM values across customers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RfmAverages {
    /// Rounded to one decimal
    pub recency_days: f64,
    /// Rounded to two decimals
    pub frequency: f64,
    pub monetary: f64,
}

/// Sum orders and revenue over a temporal rollup
pub fn order_totals(rows: &[PeriodRollup]) -> OrderTotals {
    rows.iter().fold(OrderTotals::default(), |acc, row| OrderTotals {
        orders: acc.orders + row.order_count,
        revenue: acc.revenue + row.revenue,
    })
}

/// Average recency, frequency and monetary value; all zero for no customers
pub fn rfm_averages(records: &[RfmRecord]) -> RfmAverages {
    if records.is_empty() {
        return RfmAverages::default();
    }

    let n = records.len() as f64;
    let recency: f64 = records.iter().map(|r| r.recency_days as f64).sum();
    let frequency: f64 = records.iter().map(|r| r.frequency as f64).sum();
    let monetary: f64 = records.iter().map(|r| r.monetary).sum();

    RfmAverages {
        recency_days: round_to(recency / n, 1),
        frequency: round_to(frequency / n, 2),
        monetary: monetary / n,
    }
}

/// Round to `places` decimals, sending exact ties to the even neighbour
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
