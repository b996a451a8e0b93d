use serde::{Deserialize, Serialize};

/// Stock level assigned to products created without an explicit value.
pub const DEFAULT_STOCK_LEVEL: i32 = 0;

/// Domain representation of a catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Display name of the product.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Units on hand. Order placement does not adjust this value.
    pub stock_level: i32,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock_level: i32,
}

impl NewProduct {
    /// Build a new product payload with the default stock level.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            stock_level: DEFAULT_STOCK_LEVEL,
        }
    }

    /// Override the initial stock level.
    #[must_use]
    pub fn with_stock_level(mut self, stock_level: i32) -> Self {
        self.stock_level = stock_level;
        self
    }
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock_level: Option<i32>,
}

impl UpdateProduct {
    /// Returns `true` when the patch would not change any column.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.stock_level.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_defaults_stock_level() {
        let product = NewProduct::new("Coffee", 4.5);

        assert_eq!(product.stock_level, DEFAULT_STOCK_LEVEL);
        assert_eq!(product.with_stock_level(12).stock_level, 12);
    }

    #[test]
    fn update_product_reports_emptiness() {
        assert!(UpdateProduct::default().is_empty());

        let patch = UpdateProduct {
            stock_level: Some(0),
            ..UpdateProduct::default()
        };
        assert!(!patch.is_empty());
    }
}
