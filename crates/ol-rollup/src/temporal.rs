//! Orders and revenue per calendar period
//!
//! Records are grouped by the start of the period containing their purchase
//! date. Periods without orders that fall between the first and the last
//! populated period are emitted with zero counts, for every granularity, so
//! a daily series has no gaps. Nothing is emitted outside that span.

use crate::accumulate::{group_fold, OrderAccumulator};
use chrono::{Datelike, Days, Months, NaiveDate};
use ol_core::OrderLine;
use serde::{Deserialize, Serialize};

/// Period length of a temporal rollup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Calendar day
    Day,
    /// Calendar month
    Month,
    /// Calendar year
    Year,
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Granularity::Day => write!(f, "day"),
            Granularity::Month => write!(f, "month"),
            Granularity::Year => write!(f, "year"),
        }
    }
}

impl Granularity {
    /// First day of the period containing `date`
    pub fn truncate(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => date,
            Granularity::Month => date - Days::new(u64::from(date.day0())),
            Granularity::Year => date - Days::new(u64::from(date.ordinal0())),
        }
    }

    /// First day of the period after the one starting at `period_start`
    pub fn next_period(&self, period_start: NaiveDate) -> Option<NaiveDate> {
        match self {
            Granularity::Day => period_start.succ_opt(),
            Granularity::Month => period_start.checked_add_months(Months::new(1)),
            Granularity::Year => period_start.checked_add_months(Months::new(12)),
        }
    }

    /// Render a period start the way the period is usually written
    pub fn label(&self, period_start: NaiveDate) -> String {
        match self {
            Granularity::Day => period_start.format("%Y-%m-%d").to_string(),
            Granularity::Month => period_start.format("%Y-%m").to_string(),
            Granularity::Year => period_start.format("%Y").to_string(),
        }
    }
}

/// Orders and revenue within one period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodRollup {
    /// First day of the period
    pub period: NaiveDate,
    /// Distinct order ids purchased in the period
    pub order_count: usize,
    /// Summed payment value of every record in the period
    pub revenue: f64,
}

impl PeriodRollup {
    fn empty(period: NaiveDate) -> Self {
        Self {
            period,
            order_count: 0,
            revenue: 0.0,
        }
    }
}

/// Group records by period and compute distinct orders and revenue per group.
///
/// Returns periods in chronological order, zero-filled between the first
/// and last populated period. An empty input yields an empty rollup.
pub fn temporal_rollup<'a, I>(records: I, granularity: Granularity) -> Vec<PeriodRollup>
where
    I: IntoIterator<Item = &'a OrderLine>,
{
    let groups = group_fold(
        records,
        |r| Some(granularity.truncate(r.purchase_date())),
        OrderAccumulator::add,
    );

    let (Some(&first), Some(&last)) = (groups.keys().next(), groups.keys().next_back()) else {
        return Vec::new();
    };

    let mut rows = Vec::with_capacity(groups.len());
    let mut period = first;
    loop {
        rows.push(match groups.get(&period) {
            Some(acc) => PeriodRollup {
                period,
                order_count: acc.order_count(),
                revenue: acc.revenue(),
            },
            None => PeriodRollup::empty(period),
        });

        if period >= last {
            break;
        }
        match granularity.next_period(period) {
            Some(next) => period = next,
            None => break,
        }
    }
    rows
}

/// Orders and revenue per calendar day
pub fn daily_rollup<'a, I>(records: I) -> Vec<PeriodRollup>
where
    I: IntoIterator<Item = &'a OrderLine>,
{
    temporal_rollup(records, Granularity::Day)
}

/// Orders and revenue per calendar year
pub fn annual_rollup<'a, I>(records: I) -> Vec<PeriodRollup>
where
    I: IntoIterator<Item = &'a OrderLine>,
{
    temporal_rollup(records, Granularity::Year)
}

#[cfg(test)]
#[path = "temporal_test.rs"]
mod tests;
