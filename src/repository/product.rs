//! Diesel persistence for products.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::DbConnection;
use crate::domain::product::{NewProduct, PRODUCT_LIST_CONFIG, Product, UpdateProduct};
use crate::domain::types::ProductId;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::pagination::{self, ListParams, ListPlan, ListResult, ListSource, SortDirection};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductReader, ProductWriter};
use crate::schema::products;

fn filtered_products(plan: &ListPlan) -> products::BoxedQuery<'static, Sqlite> {
    let mut query = products::table.into_boxed();

    if let Some(pattern) = plan.like_pattern() {
        for field in plan.searchable_fields {
            query = match *field {
                "name" => query.or_filter(products::name.like(pattern.clone())),
                _ => query,
            };
        }
    }

    query
}

/// [`ListSource`] over the `products` table.
pub struct ProductListSource {
    conn: DbConnection,
}

impl ProductListSource {
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }
}

impl ListSource for ProductListSource {
    type Record = DbProduct;
    type Error = RepositoryError;

    fn load(&mut self, plan: &ListPlan) -> RepositoryResult<Vec<DbProduct>> {
        let mut query = filtered_products(plan);

        if let Some(key) = plan.sort {
            query = match (key.field, key.direction) {
                ("name", SortDirection::Asc) => query.order(products::name.asc()),
                ("name", SortDirection::Desc) => query.order(products::name.desc()),
                ("price", SortDirection::Asc) => query.order(products::price.asc()),
                ("price", SortDirection::Desc) => query.order(products::price.desc()),
                ("createdAt", SortDirection::Asc) => query.order(products::created_at.asc()),
                ("createdAt", SortDirection::Desc) => query.order(products::created_at.desc()),
                _ => query,
            };
        }

        if let Some(window) = plan.window {
            query = query.offset(window.offset).limit(window.limit);
        }

        Ok(query.load::<DbProduct>(&mut self.conn)?)
    }

    fn count(&mut self, plan: &ListPlan) -> RepositoryResult<i64> {
        Ok(filtered_products(plan)
            .count()
            .get_result::<i64>(&mut self.conn)?)
    }
}

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let mut conn = self.conn()?;

        let db_product = products::table
            .find(id.to_string())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(db_product.map(Product::try_from).transpose()?)
    }

    fn list_products(&self, params: &ListParams) -> RepositoryResult<ListResult<Product>> {
        let mut source = ProductListSource::new(self.conn()?);
        pagination::execute(&mut source, params, &PRODUCT_LIST_CONFIG)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        let mut conn = self.conn()?;
        let insertable: DbNewProduct = new_product.into();

        let db_product = diesel::insert_into(products::table)
            .values(&insertable)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(Product::try_from(db_product)?)
    }

    fn update_product(
        &self,
        id: ProductId,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product> {
        let mut conn = self.conn()?;
        let db_updates: DbUpdateProduct = updates.into();

        let db_product = diesel::update(products::table.find(id.to_string()))
            .set(&db_updates)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(Product::try_from(db_product)?)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        diesel::delete(products::table.find(id.to_string())).execute(&mut conn)?;
        Ok(())
    }
}
