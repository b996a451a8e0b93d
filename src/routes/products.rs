use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::DieselRepository;
use crate::routes::{MessageResponse, message, service_error_response};
use crate::services::products::{
    create_product, load_product, modify_product, remove_product,
};

const PRODUCT_NOT_FOUND: &str = "Product not found";

#[post("/products")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddProductForm>,
) -> impl Responder {
    match create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => message(
            StatusCode::CREATED,
            MessageResponse::new("Product added successfully").with_id(product.id),
        ),
        Err(err) => service_error_response(err, PRODUCT_NOT_FOUND, "create product"),
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match load_product(repo.get_ref(), product_id) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => service_error_response(
            err,
            PRODUCT_NOT_FOUND,
            &format!("load product {product_id}"),
        ),
    }
}

#[put("/products/{product_id}")]
pub async fn edit_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditProductForm>,
) -> impl Responder {
    let product_id = path.into_inner();

    match modify_product(repo.get_ref(), product_id, form.into_inner()) {
        Ok(_) => message(
            StatusCode::OK,
            MessageResponse::new("Product updated successfully"),
        ),
        Err(err) => service_error_response(
            err,
            PRODUCT_NOT_FOUND,
            &format!("update product {product_id}"),
        ),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match remove_product(repo.get_ref(), product_id) {
        Ok(()) => message(
            StatusCode::OK,
            MessageResponse::new("Product deleted successfully"),
        ),
        Err(err) => service_error_response(
            err,
            PRODUCT_NOT_FOUND,
            &format!("delete product {product_id}"),
        ),
    }
}
