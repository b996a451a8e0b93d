use crate::domain::order::Order;
use crate::forms::orders::PlaceOrderForm;
use crate::repository::OrderWriter;
use crate::services::{ServiceError, ServiceResult};

/// Places an order for an existing customer and product.
///
/// Stock levels are left untouched.
pub fn place_order<R>(repo: &R, form: PlaceOrderForm) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    let new_order = form.into_new_order()?;

    repo.create_order(&new_order).map_err(ServiceError::from)
}
