use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub order_date: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder {
    pub customer_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub order_date: NaiveDateTime,
}

impl From<Order> for DomainOrder {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            product_id: value.product_id,
            quantity: value.quantity,
            order_date: value.order_date,
        }
    }
}

impl From<&DomainNewOrder> for NewOrder {
    fn from(value: &DomainNewOrder) -> Self {
        Self {
            customer_id: value.customer_id,
            product_id: value.product_id,
            quantity: value.quantity,
            order_date: value.order_date,
        }
    }
}
