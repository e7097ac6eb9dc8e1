//! Payment-type distribution

use crate::accumulate::{group_fold, non_blank};
use crate::ranking::Ranked;
use ol_core::OrderLine;
use serde::Serialize;
use std::collections::HashSet;

/// Order count for one payment method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRollup {
    pub payment_type: String,
    pub order_count: usize,
}

impl Ranked for PaymentRollup {
    fn label(&self) -> &str {
        &self.payment_type
    }

    fn count(&self) -> usize {
        self.order_count
    }
}

/// Reduce item-level records to one record per (order id, payment type).
///
/// The first record seen for each pair is kept, in input order.
pub fn order_level<'a, I>(records: I) -> Vec<&'a OrderLine>
where
    I: IntoIterator<Item = &'a OrderLine>,
{
    let mut seen: HashSet<(&'a str, Option<&'a str>)> = HashSet::new();
    let mut kept = Vec::new();
    for record in records {
        if seen.insert((record.order_id.as_str(), record.payment_type.as_deref())) {
            kept.push(record);
        }
    }
    kept
}

/// Count records per payment type, most used first (ties by name).
///
/// Every record counts once, so pass the output of [`order_level`] to count
/// orders rather than items. Records without a payment type are skipped.
pub fn payment_distribution<'a, I>(records: I) -> Vec<PaymentRollup>
where
    I: IntoIterator<Item = &'a OrderLine>,
{
    let groups = group_fold(
        records,
        |r| non_blank(r.payment_type.as_deref()),
        |count: &mut usize, _| *count += 1,
    );

    let mut rows: Vec<PaymentRollup> = groups
        .into_iter()
        .map(|(payment_type, order_count)| PaymentRollup {
            payment_type: payment_type.to_string(),
            order_count,
        })
        .collect();
    rows.sort_by(|a, b| b.order_count.cmp(&a.order_count));
    rows
}

#[cfg(test)]
#[path = "payment_test.rs"]
mod tests;
