use actix_web::http::StatusCode;
use actix_web::{Responder, post, web};

use crate::forms::orders::PlaceOrderForm;
use crate::repository::DieselRepository;
use crate::routes::{MessageResponse, message, service_error_response};
use crate::services::orders as order_service;

#[post("/orders")]
pub async fn place_order(
    repo: web::Data<DieselRepository>,
    form: web::Json<PlaceOrderForm>,
) -> impl Responder {
    match order_service::place_order(repo.get_ref(), form.into_inner()) {
        Ok(order) => {
            log::info!(
                "Order {} placed for customer {} (product {}, quantity {})",
                order.id,
                order.customer_id,
                order.product_id,
                order.quantity
            );
            message(
                StatusCode::CREATED,
                MessageResponse::new("Order placed successfully").with_id(order.id),
            )
        }
        // `create_order` never addresses an existing order, so the not-found
        // message is unreachable here.
        Err(err) => service_error_response(err, "Order not found", "place order"),
    }
}
