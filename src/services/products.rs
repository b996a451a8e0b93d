use crate::domain::product::Product;
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Creates a product; the stock level defaults to zero.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = form.into_new_product()?;

    repo.create_product(&new_product).map_err(ServiceError::from)
}

pub fn load_product<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Overlays the supplied fields onto an existing product.
pub fn modify_product<R>(repo: &R, product_id: i32, form: EditProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let updates = form.into_update_product();

    repo.update_product(product_id, &updates).map_err(ServiceError::from)
}

pub fn remove_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id).map_err(ServiceError::from)
}
