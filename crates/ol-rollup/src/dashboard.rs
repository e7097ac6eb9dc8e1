//! Dashboard snapshot
//!
//! Computes every rollup over one filtered view in a single call. A
//! snapshot owns its tables and is discarded when the filter changes;
//! computing again from the same view yields an equal snapshot.

use crate::category::{category_popularity, CategoryRollup};
use crate::filter::{DateRange, FilteredView};
use crate::geo::{customers_by_city, customers_by_state, GeoRollup};
use crate::metrics::{order_totals, rfm_averages, OrderTotals, RfmAverages};
use crate::payment::{order_level, payment_distribution, PaymentRollup};
use crate::rfm::{rfm, RfmRecord};
use crate::temporal::{annual_rollup, daily_rollup, PeriodRollup};
use serde::Serialize;

/// All derived tables for one filtered view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Filter that produced the view, `None` when unfiltered
    pub range: Option<DateRange>,
    /// Order lines in the view
    pub record_count: usize,
    pub daily: Vec<PeriodRollup>,
    pub daily_totals: OrderTotals,
    pub annual: Vec<PeriodRollup>,
    pub annual_totals: OrderTotals,
    pub categories: Vec<CategoryRollup>,
    /// Computed at order granularity
    pub payments: Vec<PaymentRollup>,
    pub cities: Vec<GeoRollup>,
    pub states: Vec<GeoRollup>,
    pub rfm: Vec<RfmRecord>,
    pub rfm_averages: RfmAverages,
}

impl Dashboard {
    /// Run every rollup over `view`
    pub fn compute(view: &FilteredView<'_>) -> Self {
        let daily = daily_rollup(view.iter());
        let annual = annual_rollup(view.iter());
        let rfm = rfm(view.iter());

        log::debug!(
            "Computed dashboard over {} records: {} days, {} customers",
            view.len(),
            daily.len(),
            rfm.len()
        );

        Self {
            range: view.range(),
            record_count: view.len(),
            daily_totals: order_totals(&daily),
            annual_totals: order_totals(&annual),
            daily,
            annual,
            categories: category_popularity(view.iter()),
            payments: payment_distribution(order_level(view.iter())),
            cities: customers_by_city(view.iter()),
            states: customers_by_state(view.iter()),
            rfm_averages: rfm_averages(&rfm),
            rfm,
        }
    }

    /// Whether the view behind this snapshot selected no records
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
