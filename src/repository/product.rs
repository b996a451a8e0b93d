use diesel::prelude::*;

use crate::{
    domain::product::{
        NewProduct as DomainNewProduct, Product as DomainProduct,
        UpdateProduct as DomainUpdateProduct,
    },
    models::product::{
        NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
    },
    repository::{
        DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult,
    },
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .find(id)
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn count_products(&self) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let total = products::table.count().get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = conn.transaction::<DbProduct, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(products::table)
                .values(&db_new)
                .get_result::<DbProduct>(conn)?;
            Ok(created)
        })?;

        Ok(created.into())
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let updated = conn.transaction::<DbProduct, RepositoryError, _>(|conn| {
            if updates.is_empty() {
                return Ok(products::table
                    .find(product_id)
                    .first::<DbProduct>(conn)?);
            }

            let db_updates = DbUpdateProduct::from(updates);
            let updated = diesel::update(products::table.find(product_id))
                .set(&db_updates)
                .get_result::<DbProduct>(conn)?;
            Ok(updated)
        })?;

        Ok(updated.into())
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            let deleted = diesel::delete(products::table.find(product_id)).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }
}
