//! ol-core - Core library for Orderlens
//!
//! This crate provides the order line record type, CSV dataset loading,
//! timestamp parsing, and `orderlens.yml` configuration used by the
//! aggregation layer and the CLI.

pub mod config;
pub mod dataset;
pub mod error;
pub mod record;
pub mod timestamp;

pub use config::Config;
pub use dataset::{Dataset, LoadOptions};
pub use error::{CoreError, CoreResult};
pub use record::OrderLine;
pub use timestamp::{parse_date, parse_timestamp};
