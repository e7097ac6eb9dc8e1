//! RFM (recency, frequency, monetary) customer summary
//!
//! Recency is measured against the latest purchase date of the records
//! passed in, so a narrower date filter moves the reference point with it.

use crate::accumulate::group_fold;
use chrono::NaiveDate;
use ol_core::OrderLine;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Recency, frequency and monetary value of one customer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RfmRecord {
    pub customer_id: String,
    /// Days between the latest purchase overall and this customer's latest purchase
    pub recency_days: u64,
    /// Distinct orders placed
    pub frequency: usize,
    /// Summed payment value
    pub monetary: f64,
}

/// Ordering used to pick a customer's "best" view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RfmRank {
    /// Most recent first
    Recency,
    /// Most orders first
    Frequency,
    /// Highest spend first
    Monetary,
}

impl std::fmt::Display for RfmRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RfmRank::Recency => write!(f, "recency"),
            RfmRank::Frequency => write!(f, "frequency"),
            RfmRank::Monetary => write!(f, "monetary"),
        }
    }
}

#[derive(Debug, Default)]
struct CustomerSummary<'a> {
    last_purchase: Option<NaiveDate>,
    orders: HashSet<&'a str>,
    monetary: f64,
}

impl<'a> CustomerSummary<'a> {
    fn add(&mut self, record: &'a OrderLine) {
        let date = record.purchase_date();
        self.last_purchase = Some(self.last_purchase.map_or(date, |d| d.max(date)));
        self.orders.insert(record.order_id.as_str());
        self.monetary += record.payment_value;
    }
}

/// One RFM record per distinct customer, in customer-id order.
///
/// The reference date is the latest purchase date among `records`; a
/// customer whose last purchase falls on that date has recency 0.
pub fn rfm<'a, I>(records: I) -> Vec<RfmRecord>
where
    I: IntoIterator<Item = &'a OrderLine>,
{
    let groups = group_fold(
        records,
        |r| Some(r.customer_id.as_str()),
        CustomerSummary::add,
    );

    let Some(reference) = groups.values().filter_map(|s| s.last_purchase).max() else {
        return Vec::new();
    };

    groups
        .into_iter()
        .map(|(customer_id, summary)| {
            let last = summary.last_purchase.unwrap_or(reference);
            RfmRecord {
                customer_id: customer_id.to_string(),
                recency_days: u64::try_from((reference - last).num_days()).unwrap_or(0),
                frequency: summary.orders.len(),
                monetary: summary.monetary,
            }
        })
        .collect()
}

/// The `n` best customers by one RFM dimension (ties by customer id)
pub fn rank_customers(records: &[RfmRecord], by: RfmRank, n: usize) -> Vec<&RfmRecord> {
    let mut sorted: Vec<&RfmRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        let primary = match by {
            RfmRank::Recency => a.recency_days.cmp(&b.recency_days),
            RfmRank::Frequency => b.frequency.cmp(&a.frequency),
            RfmRank::Monetary => b.monetary.total_cmp(&a.monetary),
        };
        primary.then_with(|| a.customer_id.cmp(&b.customer_id))
    });
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
#[path = "rfm_test.rs"]
mod tests;
