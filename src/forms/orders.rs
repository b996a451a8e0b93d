use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use validator::Validate;

use crate::domain::order::NewOrder;
use crate::forms::{FormError, FormResult};

/// Naive timestamp layouts accepted for `order_date`, tried in order.
const ORDER_DATE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// JSON payload accepted by `POST /orders`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PlaceOrderForm {
    #[validate(required)]
    pub customer_id: Option<i32>,
    #[validate(required)]
    pub product_id: Option<i32>,
    #[validate(required)]
    pub quantity: Option<i32>,
    #[validate(required)]
    pub order_date: Option<String>,
}

impl PlaceOrderForm {
    /// Checks that all four fields are present and parses the order date.
    pub fn into_new_order(self) -> FormResult<NewOrder> {
        self.validate()?;

        let order_date = parse_order_date(self.order_date.as_deref().unwrap_or_default())?;

        Ok(NewOrder::new(
            self.customer_id.unwrap_or_default(),
            self.product_id.unwrap_or_default(),
            self.quantity.unwrap_or_default(),
            order_date,
        ))
    }
}

/// Parse a client supplied timestamp. Values carrying an offset are converted to UTC.
pub fn parse_order_date(input: &str) -> FormResult<NaiveDateTime> {
    let value = input.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Ok(with_offset.naive_utc());
    }

    ORDER_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| FormError::InvalidOrderDate(input.to_string()))
}
