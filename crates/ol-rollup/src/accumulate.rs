//! Group-by building blocks shared by the rollups.
//!
//! Each rollup is two explicit stages: [`group_fold`] extracts a key from
//! every record and folds the record into that key's accumulator. The
//! accumulators below make the aggregate semantics (distinct count vs sum
//! vs plain count) visible at the call site.

use ol_core::OrderLine;
use std::collections::{BTreeMap, HashSet};

/// Fold records into one accumulator per key.
///
/// Records whose key extractor returns `None` are skipped, mirroring a
/// group-by that drops missing keys. Groups come back in key order.
pub(crate) fn group_fold<'a, I, K, A>(
    records: I,
    mut key: impl FnMut(&'a OrderLine) -> Option<K>,
    mut fold: impl FnMut(&mut A, &'a OrderLine),
) -> BTreeMap<K, A>
where
    I: IntoIterator<Item = &'a OrderLine>,
    K: Ord,
    A: Default,
{
    let mut groups: BTreeMap<K, A> = BTreeMap::new();
    for record in records {
        if let Some(k) = key(record) {
            fold(groups.entry(k).or_default(), record);
        }
    }
    groups
}

/// Distinct order ids plus summed payment value
#[derive(Debug, Default)]
pub(crate) struct OrderAccumulator<'a> {
    orders: HashSet<&'a str>,
    revenue: f64,
}

impl<'a> OrderAccumulator<'a> {
    pub(crate) fn add(&mut self, record: &'a OrderLine) {
        self.orders.insert(record.order_id.as_str());
        self.revenue += record.payment_value;
    }

    pub(crate) fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub(crate) fn revenue(&self) -> f64 {
        self.revenue
    }
}

/// Distinct customer ids
#[derive(Debug, Default)]
pub(crate) struct CustomerAccumulator<'a> {
    customers: HashSet<&'a str>,
}

impl<'a> CustomerAccumulator<'a> {
    pub(crate) fn add(&mut self, record: &'a OrderLine) {
        self.customers.insert(record.customer_id.as_str());
    }

    pub(crate) fn customer_count(&self) -> usize {
        self.customers.len()
    }
}

/// Key extractor for optional string attributes: missing or blank is no key
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
