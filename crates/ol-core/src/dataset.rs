//! Dataset loading
//!
//! A [`Dataset`] is the immutable, purchase-ordered set of order lines that
//! every filtered view borrows from. It is loaded once from a CSV export of
//! the joined orders table and never mutated afterwards.

use crate::error::{CoreError, CoreResult};
use crate::record::OrderLine;
use crate::timestamp::parse_timestamp;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Columns a dataset header must contain
pub const REQUIRED_COLUMNS: &[&str] = &[
    "order_id",
    "customer_id",
    "order_purchase_timestamp",
    "payment_value",
];

/// Options controlling how a CSV dataset is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter byte
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// One CSV row as it appears on disk, before timestamps are parsed
#[derive(Debug, Deserialize)]
struct RawOrderLine {
    order_id: String,
    customer_id: String,
    #[serde(default)]
    customer_city: Option<String>,
    #[serde(default)]
    customer_state: Option<String>,
    order_purchase_timestamp: String,
    #[serde(default)]
    payment_type: Option<String>,
    #[serde(default)]
    payment_value: Option<f64>,
    #[serde(default)]
    product_id: Option<String>,
    #[serde(default)]
    product_category_name_english: Option<String>,
    #[serde(default)]
    order_approved_at: Option<String>,
    #[serde(default)]
    shipping_limit_date: Option<String>,
    #[serde(default)]
    order_delivered_carrier_date: Option<String>,
    #[serde(default)]
    order_delivered_customer_date: Option<String>,
    #[serde(default)]
    order_estimated_delivery_date: Option<String>,
}

/// Immutable collection of order lines sorted by purchase timestamp
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<OrderLine>,
    source: Option<PathBuf>,
}

impl Dataset {
    /// Build a dataset from in-memory records.
    ///
    /// Records are stably sorted by purchase timestamp, so rows sharing a
    /// timestamp keep their input order.
    pub fn from_records(mut records: Vec<OrderLine>) -> Self {
        records.sort_by_key(|r| r.purchased_at);
        Self {
            records,
            source: None,
        }
    }

    /// Load a dataset from a CSV file
    pub fn load(path: &Path, options: &LoadOptions) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::DatasetNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        let mut dataset = Self::from_reader(file, options, &path.display().to_string())?;
        dataset.source = Some(path.to_path_buf());
        Ok(dataset)
    }

    /// Load a dataset from any CSV reader.
    ///
    /// `origin` names the input in error messages.
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions, origin: &str) -> CoreResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| csv_error(origin, 0, e))?
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == *column) {
                return Err(CoreError::MissingColumn {
                    path: origin.to_string(),
                    column: (*column).to_string(),
                });
            }
        }

        let mut records = Vec::new();
        let mut blank_payments = 0usize;
        for (idx, result) in csv_reader.deserialize::<RawOrderLine>().enumerate() {
            let row = idx + 1;
            let raw = result.map_err(|e| csv_error(origin, row, e))?;
            if raw.payment_value.is_none() {
                blank_payments += 1;
            }
            records.push(raw.into_record(origin, row)?);
        }

        if blank_payments > 0 {
            log::debug!(
                "{}: {} rows without a payment value were counted as 0",
                origin,
                blank_payments
            );
        }
        log::debug!("{}: loaded {} order lines", origin, records.len());

        Ok(Self::from_records(records))
    }

    /// All records, ordered by purchase timestamp
    pub fn records(&self) -> &[OrderLine] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// File the dataset was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Earliest and latest purchase dates, or `None` for an empty dataset
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.purchase_date(), last.purchase_date()))
    }
}

impl RawOrderLine {
    fn into_record(self, origin: &str, row: usize) -> CoreResult<OrderLine> {
        if self.order_id.is_empty() || self.customer_id.is_empty() {
            return Err(CoreError::MalformedRow {
                path: origin.to_string(),
                row,
                message: "order_id and customer_id must not be empty".to_string(),
            });
        }

        let purchased_at = required_timestamp(
            origin,
            row,
            "order_purchase_timestamp",
            &self.order_purchase_timestamp,
        )?;
        let payment_value = self.payment_value.unwrap_or(0.0);
        if payment_value < 0.0 {
            log::warn!(
                "{}: row {} has a negative payment value ({})",
                origin,
                row,
                payment_value
            );
        }

        Ok(OrderLine {
            order_id: self.order_id,
            customer_id: self.customer_id,
            customer_city: self.customer_city.unwrap_or_default(),
            customer_state: self.customer_state.unwrap_or_default(),
            purchased_at,
            payment_type: self.payment_type,
            payment_value,
            product_id: self.product_id,
            product_category: self.product_category_name_english,
            approved_at: optional_timestamp(
                origin,
                row,
                "order_approved_at",
                self.order_approved_at,
            )?,
            shipping_limit_at: optional_timestamp(
                origin,
                row,
                "shipping_limit_date",
                self.shipping_limit_date,
            )?,
            delivered_carrier_at: optional_timestamp(
                origin,
                row,
                "order_delivered_carrier_date",
                self.order_delivered_carrier_date,
            )?,
            delivered_customer_at: optional_timestamp(
                origin,
                row,
                "order_delivered_customer_date",
                self.order_delivered_customer_date,
            )?,
            estimated_delivery_at: optional_timestamp(
                origin,
                row,
                "order_estimated_delivery_date",
                self.order_estimated_delivery_date,
            )?,
        })
    }
}

fn required_timestamp(
    origin: &str,
    row: usize,
    column: &str,
    value: &str,
) -> CoreResult<NaiveDateTime> {
    parse_timestamp(value).ok_or_else(|| CoreError::InvalidTimestamp {
        path: origin.to_string(),
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}

fn optional_timestamp(
    origin: &str,
    row: usize,
    column: &str,
    value: Option<String>,
) -> CoreResult<Option<NaiveDateTime>> {
    value
        .map(|v| required_timestamp(origin, row, column, &v))
        .transpose()
}

fn csv_error(origin: &str, row: usize, err: csv::Error) -> CoreError {
    if err.is_io_error() {
        if let csv::ErrorKind::Io(io) = err.into_kind() {
            return CoreError::IoWithPath {
                path: origin.to_string(),
                source: io,
            };
        }
        return CoreError::MalformedRow {
            path: origin.to_string(),
            row,
            message: "I/O error while reading".to_string(),
        };
    }
    CoreError::MalformedRow {
        path: origin.to_string(),
        row,
        message: err.to_string(),
    }
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
