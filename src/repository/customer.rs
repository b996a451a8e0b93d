use diesel::prelude::*;

use crate::{
    domain::customer::{
        Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
        UpdateCustomer as DomainUpdateCustomer,
    },
    models::customer::{
        Customer as DbCustomer, NewCustomer as DbNewCustomer, UpdateCustomer as DbUpdateCustomer,
    },
    repository::{
        CustomerReader, CustomerWriter, DieselRepository, RepositoryError, RepositoryResult,
    },
};

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCustomer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let customer = customers::table
            .find(id)
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn count_customers(&self) -> RepositoryResult<usize> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let total = customers::table.count().get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(
        &self,
        new_customer: &DomainNewCustomer,
    ) -> RepositoryResult<DomainCustomer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let db_new = DbNewCustomer::from(new_customer);

        let created = conn.transaction::<DbCustomer, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(customers::table)
                .values(&db_new)
                .get_result::<DbCustomer>(conn)?;
            Ok(created)
        })?;

        Ok(created.into())
    }

    fn update_customer(
        &self,
        customer_id: i32,
        updates: &DomainUpdateCustomer,
    ) -> RepositoryResult<DomainCustomer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let updated = conn.transaction::<DbCustomer, RepositoryError, _>(|conn| {
            // An empty changeset is rejected by diesel, so nothing to write.
            if updates.is_empty() {
                return Ok(customers::table
                    .find(customer_id)
                    .first::<DbCustomer>(conn)?);
            }

            let db_updates = DbUpdateCustomer::from(updates);
            let updated = diesel::update(customers::table.find(customer_id))
                .set(&db_updates)
                .get_result::<DbCustomer>(conn)?;
            Ok(updated)
        })?;

        Ok(updated.into())
    }

    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            let deleted = diesel::delete(customers::table.find(customer_id)).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }
}
