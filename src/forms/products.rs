use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::FormResult;

/// JSON payload accepted by `POST /products`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(required)]
    pub name: Option<String>,
    #[validate(required)]
    pub price: Option<f64>,
    /// Defaults to zero when omitted.
    pub stock_level: Option<i32>,
}

impl AddProductForm {
    /// Checks the required fields and converts into a domain `NewProduct`.
    pub fn into_new_product(self) -> FormResult<NewProduct> {
        self.validate()?;

        let mut new_product =
            NewProduct::new(self.name.unwrap_or_default(), self.price.unwrap_or_default());
        if let Some(stock_level) = self.stock_level {
            new_product = new_product.with_stock_level(stock_level);
        }

        Ok(new_product)
    }
}

/// JSON payload accepted by `PUT /products/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct EditProductForm {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock_level: Option<i32>,
}

impl EditProductForm {
    pub fn into_update_product(self) -> UpdateProduct {
        UpdateProduct {
            name: self.name,
            price: self.price,
            stock_level: self.stock_level,
        }
    }
}
