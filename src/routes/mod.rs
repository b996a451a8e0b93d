use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod customers;
pub mod orders;
pub mod products;

pub const INVALID_DATA_FORMAT: &str = "Invalid data format";
pub const DATABASE_ERROR: &str = "Database error";

/// JSON body returned by every endpoint except the read ones.
#[derive(Debug, Serialize)]
pub struct MessageResponse<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> MessageResponse<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            id: None,
            error: None,
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Register every endpoint together with the JSON extractor configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(customers::add_customer)
        .service(customers::show_customer)
        .service(customers::edit_customer)
        .service(customers::delete_customer)
        .service(products::add_product)
        .service(products::show_product)
        .service(products::edit_product)
        .service(products::delete_product)
        .service(orders::place_order);
}

pub fn message(status: StatusCode, body: MessageResponse<'_>) -> HttpResponse {
    HttpResponse::build(status).json(body)
}

pub fn invalid_data_format() -> HttpResponse {
    message(
        StatusCode::BAD_REQUEST,
        MessageResponse::new(INVALID_DATA_FORMAT),
    )
}

/// Map service failures that every handler treats the same way.
///
/// `not_found` is the message returned for a missing record, `action` is
/// used in the log line.
pub fn service_error_response(err: ServiceError, not_found: &str, action: &str) -> HttpResponse {
    match err {
        ServiceError::Form(reason) => {
            log::warn!("Rejected payload while trying to {action}: {reason}");
            invalid_data_format()
        }
        ServiceError::NotFound => message(StatusCode::NOT_FOUND, MessageResponse::new(not_found)),
        ServiceError::InvalidReference(reason) => {
            log::warn!("Rejected reference while trying to {action}: {reason}");
            message(
                StatusCode::BAD_REQUEST,
                MessageResponse::new("Invalid order reference").with_error(reason),
            )
        }
        ServiceError::Repository(err) => {
            log::error!("Failed to {action}: {err}");
            message(
                StatusCode::INTERNAL_SERVER_ERROR,
                MessageResponse::new(DATABASE_ERROR).with_error(err.to_string()),
            )
        }
    }
}

/// Malformed bodies get the same answer as incomplete ones.
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON body for {} {}: {err}", req.method(), req.path());
    InternalError::from_response(err, invalid_data_format()).into()
}
