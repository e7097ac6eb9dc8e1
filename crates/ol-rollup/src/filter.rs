//! Date-range filtering
//!
//! Bounds are calendar dates compared against the parsed purchase date of
//! each record, both ends inclusive. A reversed range (start after end) is
//! not an error: it selects nothing, so every downstream rollup is empty.

use chrono::NaiveDate;
use ol_core::{Dataset, OrderLine};
use serde::{Deserialize, Serialize};

/// Inclusive purchase-date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First selected date
    pub start: NaiveDate,
    /// Last selected date
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Fill missing bounds from the dataset's purchase-date span.
    ///
    /// Returns `None` when a bound is missing and the dataset is empty.
    pub fn resolve(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        dataset: &Dataset,
    ) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Some(Self::new(start, end)),
            _ => {
                let (min, max) = dataset.date_span()?;
                Some(Self::new(start.unwrap_or(min), end.unwrap_or(max)))
            }
        }
    }

    /// Whether the start bound lies after the end bound
    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }

    /// Select the dataset records purchased within this range
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> FilteredView<'a> {
        if self.is_reversed() {
            log::debug!(
                "Date range {} > {} is reversed; selecting nothing",
                self.start,
                self.end
            );
            return FilteredView {
                range: Some(*self),
                records: Vec::new(),
            };
        }

        // Dataset records are sorted by purchase timestamp.
        let all = dataset.records();
        let lo = all.partition_point(|r| r.purchase_date() < self.start);
        let hi = all.partition_point(|r| r.purchase_date() <= self.end);
        let records: Vec<&OrderLine> = all[lo..hi].iter().collect();

        log::debug!(
            "Filtered {} of {} records for {}..={}",
            records.len(),
            all.len(),
            self.start,
            self.end
        );

        FilteredView {
            range: Some(*self),
            records,
        }
    }
}

/// The subset of records one date filter selected
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    range: Option<DateRange>,
    records: Vec<&'a OrderLine>,
}

impl<'a> FilteredView<'a> {
    /// An unfiltered view over the whole dataset
    pub fn all(dataset: &'a Dataset) -> Self {
        Self::from_records(dataset.records())
    }

    /// An unfiltered view over a slice of records
    pub fn from_records(records: &'a [OrderLine]) -> Self {
        Self {
            range: None,
            records: records.iter().collect(),
        }
    }

    /// The range that produced this view, `None` when unfiltered
    pub fn range(&self) -> Option<DateRange> {
        self.range
    }

    pub fn records(&self) -> &[&'a OrderLine] {
        &self.records
    }

    /// Iterate the selected records
    pub fn iter(&self) -> impl Iterator<Item = &'a OrderLine> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct order ids among the selected records
    pub fn distinct_orders(&self) -> usize {
        self.iter()
            .map(|r| r.order_id.as_str())
            .collect::<std::collections::HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
