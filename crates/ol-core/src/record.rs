//! Order line record
//!
//! One row of the pre-joined e-commerce dataset: a single order item with the
//! customer, payment, product and lifecycle attributes of its order. Rows are
//! not deduplicated, so an order with three items or two payments appears on
//! several lines.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single order item row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Order identifier (shared by every item of the order)
    pub order_id: String,

    /// Customer identifier
    pub customer_id: String,

    /// Customer city
    pub customer_city: String,

    /// Customer state
    pub customer_state: String,

    /// When the order was placed
    pub purchased_at: NaiveDateTime,

    /// Payment method, absent for orders without a payment row
    #[serde(default)]
    pub payment_type: Option<String>,

    /// Payment value attached to this row
    pub payment_value: f64,

    /// Product identifier of the item
    #[serde(default)]
    pub product_id: Option<String>,

    /// Product category (English name)
    #[serde(default)]
    pub product_category: Option<String>,

    /// When the payment was approved
    #[serde(default)]
    pub approved_at: Option<NaiveDateTime>,

    /// Seller shipping deadline
    #[serde(default)]
    pub shipping_limit_at: Option<NaiveDateTime>,

    /// When the order was handed to the carrier
    #[serde(default)]
    pub delivered_carrier_at: Option<NaiveDateTime>,

    /// When the customer received the order
    #[serde(default)]
    pub delivered_customer_at: Option<NaiveDateTime>,

    /// Delivery date promised at purchase time
    #[serde(default)]
    pub estimated_delivery_at: Option<NaiveDateTime>,
}

impl OrderLine {
    /// Create a record with the fields every aggregation reads.
    ///
    /// Location, payment type and product fields start empty; use the
    /// `with_*` builders to fill them in.
    pub fn new(
        order_id: impl Into<String>,
        customer_id: impl Into<String>,
        purchased_at: NaiveDateTime,
        payment_value: f64,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            customer_id: customer_id.into(),
            customer_city: String::new(),
            customer_state: String::new(),
            purchased_at,
            payment_type: None,
            payment_value,
            product_id: None,
            product_category: None,
            approved_at: None,
            shipping_limit_at: None,
            delivered_carrier_at: None,
            delivered_customer_at: None,
            estimated_delivery_at: None,
        }
    }

    /// Set the customer city and state
    pub fn with_location(mut self, city: impl Into<String>, state: impl Into<String>) -> Self {
        self.customer_city = city.into();
        self.customer_state = state.into();
        self
    }

    /// Set the payment method
    pub fn with_payment_type(mut self, payment_type: impl Into<String>) -> Self {
        self.payment_type = Some(payment_type.into());
        self
    }

    /// Set the product id and category
    pub fn with_product(
        mut self,
        product_id: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        self.product_id = Some(product_id.into());
        self.product_category = Some(category.into());
        self
    }

    /// Calendar date of the purchase
    pub fn purchase_date(&self) -> NaiveDate {
        self.purchased_at.date()
    }
}
