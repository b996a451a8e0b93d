use diesel::dsl::{exists, select};
use diesel::prelude::*;

use crate::{
    domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder},
    models::order::{NewOrder as DbNewOrder, Order as DbOrder},
    repository::{DieselRepository, OrderReader, OrderWriter, RepositoryError, RepositoryResult},
};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .find(id)
            .first::<DbOrder>(&mut conn)
            .optional()?;

        Ok(order.map(Into::into))
    }

    fn count_orders(&self) -> RepositoryResult<usize> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let total = orders::table.count().get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let db_new = DbNewOrder::from(new_order);

        // Take the write lock up front: upgrading a read transaction fails
        // immediately under WAL instead of waiting on busy_timeout.
        let created = conn.immediate_transaction::<DbOrder, RepositoryError, _>(|conn| {
            ensure_customer_exists(conn, new_order.customer_id)?;
            ensure_product_exists(conn, new_order.product_id)?;

            let created = diesel::insert_into(orders::table)
                .values(&db_new)
                .get_result::<DbOrder>(conn)?;
            Ok(created)
        })?;

        Ok(created.into())
    }
}

fn ensure_customer_exists(conn: &mut SqliteConnection, customer_id: i32) -> RepositoryResult<()> {
    use crate::schema::customers;

    let exists: bool = select(exists(customers::table.find(customer_id))).get_result(conn)?;

    if exists {
        Ok(())
    } else {
        Err(RepositoryError::MissingReference {
            entity: "customer",
            id: customer_id,
        })
    }
}

fn ensure_product_exists(conn: &mut SqliteConnection, product_id: i32) -> RepositoryResult<()> {
    use crate::schema::products;

    let exists: bool = select(exists(products::table.find(product_id))).get_result(conn)?;

    if exists {
        Ok(())
    } else {
        Err(RepositoryError::MissingReference {
            entity: "product",
            id: product_id,
        })
    }
}
