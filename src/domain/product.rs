use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{ImageUrl, ProductId, ProductName, ProductPrice, ProductStatus};
use crate::pagination::ListConfig;

/// Listing capabilities of products: searched by name, sortable by name,
/// price or creation time.
pub const PRODUCT_LIST_CONFIG: ListConfig = ListConfig {
    searchable_fields: &["name"],
    sortable_fields: &["name", "price", "createdAt"],
};

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub uuid: ProductId,
    pub name: ProductName,
    pub price: ProductPrice,
    pub description: Option<String>,
    pub image: Option<ImageUrl>,
    pub status: ProductStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to create a product. New products always start `active`.
#[derive(Clone, Debug)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: ProductPrice,
    pub description: Option<String>,
    pub image: Option<ImageUrl>,
}

impl NewProduct {
    #[must_use]
    pub fn new(
        name: ProductName,
        price: ProductPrice,
        description: Option<String>,
        image: Option<ImageUrl>,
    ) -> Self {
        Self {
            name,
            price,
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            image,
        }
    }
}

/// Partial update; `None` fields keep their stored value.
#[derive(Clone, Debug, Default)]
pub struct UpdateProduct {
    pub name: Option<ProductName>,
    pub price: Option<ProductPrice>,
    pub description: Option<String>,
    pub image: Option<ImageUrl>,
    pub status: Option<ProductStatus>,
}
