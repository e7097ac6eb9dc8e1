//! ol-rollup - Aggregation layer for Orderlens
//!
//! Every view is a pure function of a [`FilteredView`]: filter the dataset
//! by purchase date first, then fold the surviving order lines into one
//! rollup per concern. Nothing is cached between calls.

mod accumulate;
pub mod category;
pub mod dashboard;
pub mod filter;
pub mod geo;
pub mod metrics;
pub mod payment;
pub mod ranking;
pub mod rfm;
pub mod temporal;

#[cfg(test)]
pub(crate) mod test_utils;

pub use category::{category_popularity, CategoryRollup};
pub use dashboard::Dashboard;
pub use filter::{DateRange, FilteredView};
pub use geo::{customers_by_city, customers_by_state, geo_rollup, GeoLevel, GeoRollup};
pub use metrics::{order_totals, rfm_averages, OrderTotals, RfmAverages};
pub use payment::{order_level, payment_distribution, PaymentRollup};
pub use ranking::{bottom_n, top_n, Ranked};
pub use rfm::{rank_customers, rfm, RfmRank, RfmRecord};
pub use temporal::{annual_rollup, daily_rollup, temporal_rollup, Granularity, PeriodRollup};
