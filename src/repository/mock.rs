use mockall::mock;

use super::{
    CustomerReader, CustomerWriter, OrderWriter, ProductReader, ProductWriter, RepositoryResult,
};
use crate::domain::{
    customer::{Customer, NewCustomer, UpdateCustomer},
    order::{NewOrder, Order},
    product::{NewProduct, Product, UpdateProduct},
};

mock! {
    pub CustomerReader {}

    impl CustomerReader for CustomerReader {
        fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
        fn count_customers(&self) -> RepositoryResult<usize>;
    }
}

mock! {
    pub CustomerWriter {}

    impl CustomerWriter for CustomerWriter {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update_customer(&self, customer_id: i32, updates: &UpdateCustomer) -> RepositoryResult<Customer>;
        fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn count_products(&self) -> RepositoryResult<usize>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub OrderWriter {}

    impl OrderWriter for OrderWriter {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    }
}
