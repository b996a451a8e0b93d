use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of an order linking a customer to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Customer placing the order.
    pub customer_id: i32,
    /// Product being ordered.
    pub product_id: i32,
    /// Number of units ordered.
    pub quantity: i32,
    /// Timestamp supplied by the client, stored as UTC.
    pub order_date: NaiveDateTime,
}

/// Payload required to insert a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub order_date: NaiveDateTime,
}

impl NewOrder {
    /// Build a new order payload.
    #[must_use]
    pub fn new(
        customer_id: i32,
        product_id: i32,
        quantity: i32,
        order_date: NaiveDateTime,
    ) -> Self {
        Self {
            customer_id,
            product_id,
            quantity,
            order_date,
        }
    }
}
