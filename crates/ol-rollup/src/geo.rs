//! Customer geography
//!
//! Distinct customers per city or per state. The rollup has no ordering
//! contract; rows come back in region-name order so output is reproducible,
//! and [`GeoRollup`] implements [`Ranked`] for "top regions" views.

use crate::accumulate::{group_fold, non_blank, CustomerAccumulator};
use crate::ranking::Ranked;
use ol_core::OrderLine;
use serde::{Deserialize, Serialize};

/// Which location attribute to group by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoLevel {
    City,
    State,
}

impl GeoLevel {
    fn region_of(self, record: &OrderLine) -> &str {
        match self {
            GeoLevel::City => &record.customer_city,
            GeoLevel::State => &record.customer_state,
        }
    }
}

impl std::fmt::Display for GeoLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoLevel::City => write!(f, "city"),
            GeoLevel::State => write!(f, "state"),
        }
    }
}

/// Distinct customers in one city or state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoRollup {
    pub region: String,
    pub customer_count: usize,
}

impl Ranked for GeoRollup {
    fn label(&self) -> &str {
        &self.region
    }

    fn count(&self) -> usize {
        self.customer_count
    }
}

/// Count distinct customer ids per region; records with a blank region are skipped
pub fn geo_rollup<'a, I>(records: I, level: GeoLevel) -> Vec<GeoRollup>
where
    I: IntoIterator<Item = &'a OrderLine>,
{
    group_fold(
        records,
        |r| non_blank(Some(level.region_of(r))),
        CustomerAccumulator::add,
    )
    .into_iter()
    .map(|(region, acc)| GeoRollup {
        region: region.to_string(),
        customer_count: acc.customer_count(),
    })
    .collect()
}

pub fn customers_by_city<'a, I>(records: I) -> Vec<GeoRollup>
where
    I: IntoIterator<Item = &'a OrderLine>,
{
    geo_rollup(records, GeoLevel::City)
}

pub fn customers_by_state<'a, I>(records: I) -> Vec<GeoRollup>
where
    I: IntoIterator<Item = &'a OrderLine>,
{
    geo_rollup(records, GeoLevel::State)
}

#[cfg(test)]
#[path = "geo_test.rs"]
mod tests;
