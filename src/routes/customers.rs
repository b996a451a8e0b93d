use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::customers::{AddCustomerForm, EditCustomerForm};
use crate::repository::DieselRepository;
use crate::routes::{MessageResponse, message, service_error_response};
use crate::services::customers::{
    create_customer, load_customer, modify_customer, remove_customer,
};

const CUSTOMER_NOT_FOUND: &str = "Customer not found";

#[post("/customers")]
pub async fn add_customer(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddCustomerForm>,
) -> impl Responder {
    match create_customer(repo.get_ref(), form.into_inner()) {
        Ok(customer) => message(
            StatusCode::CREATED,
            MessageResponse::new("Customer added successfully").with_id(customer.id),
        ),
        Err(err) => service_error_response(err, CUSTOMER_NOT_FOUND, "create customer"),
    }
}

#[get("/customers/{customer_id}")]
pub async fn show_customer(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let customer_id = path.into_inner();

    match load_customer(repo.get_ref(), customer_id) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => service_error_response(
            err,
            CUSTOMER_NOT_FOUND,
            &format!("load customer {customer_id}"),
        ),
    }
}

#[put("/customers/{customer_id}")]
pub async fn edit_customer(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditCustomerForm>,
) -> impl Responder {
    let customer_id = path.into_inner();

    match modify_customer(repo.get_ref(), customer_id, form.into_inner()) {
        Ok(_) => message(
            StatusCode::OK,
            MessageResponse::new("Customer updated successfully"),
        ),
        Err(err) => service_error_response(
            err,
            CUSTOMER_NOT_FOUND,
            &format!("update customer {customer_id}"),
        ),
    }
}

#[delete("/customers/{customer_id}")]
pub async fn delete_customer(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let customer_id = path.into_inner();

    match remove_customer(repo.get_ref(), customer_id) {
        Ok(()) => message(
            StatusCode::OK,
            MessageResponse::new("Customer deleted successfully"),
        ),
        Err(err) => service_error_response(
            err,
            CUSTOMER_NOT_FOUND,
            &format!("delete customer {customer_id}"),
        ),
    }
}
