use crate::db::{DbConnection, DbPool};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::order::{NewOrder, Order};
use crate::domain::product::{NewProduct, Product, UpdateProduct};

pub use errors::{RepositoryError, RepositoryResult};

pub mod customer;
pub mod errors;
pub mod order;
pub mod product;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over customer records.
pub trait CustomerReader {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
    fn count_customers(&self) -> RepositoryResult<usize>;
}

/// Write operations over customer records.
pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update_customer(
        &self,
        customer_id: i32,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer>;
    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn count_products(&self) -> RepositoryResult<usize>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over order records.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn count_orders(&self) -> RepositoryResult<usize>;
}

/// Write operations over order records.
pub trait OrderWriter {
    /// Insert an order after checking that its customer and product exist.
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
}
