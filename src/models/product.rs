use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct,
    UpdateProduct as DomainUpdateProduct,
};
use crate::domain::types::{
    ImageUrl, ProductId, ProductName, ProductPrice, ProductStatus, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
#[diesel(primary_key(uuid))]
/// Diesel model for [`crate::domain::product::Product`].
pub struct Product {
    pub uuid: String,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
/// Insertable form of [`Product`].
pub struct NewProduct<'a> {
    pub uuid: String,
    pub name: &'a str,
    pub price: f64,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub status: &'static str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
/// Data used when updating a [`Product`] record.
pub struct UpdateProduct<'a> {
    pub name: Option<&'a str>,
    pub price: Option<f64>,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub status: Option<&'static str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: product.uuid.parse::<ProductId>()?,
            name: ProductName::new(product.name)?,
            price: ProductPrice::new(product.price)?,
            description: product.description,
            image: product.image.map(ImageUrl::new).transpose()?,
            status: product.status.parse::<ProductStatus>()?,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            uuid: ProductId::new().to_string(),
            name: product.name.as_str(),
            price: product.price.get(),
            description: product.description.as_deref(),
            image: product.image.as_ref().map(|i| i.as_str()),
            status: ProductStatus::Active.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(product: &'a DomainUpdateProduct) -> Self {
        Self {
            name: product.name.as_ref().map(|n| n.as_str()),
            price: product.price.map(ProductPrice::get),
            description: product.description.as_deref(),
            image: product.image.as_ref().map(|i| i.as_str()),
            status: product.status.map(ProductStatus::as_str),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
