use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::domain::types::{ImageUrl, ProductName, ProductPrice, ProductStatus};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub description: Option<String>,
    #[validate(url)]
    pub image: Option<String>,
}

impl TryFrom<CreateProductForm> for NewProduct {
    type Error = FormError;

    fn try_from(form: CreateProductForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewProduct::new(
            ProductName::new(form.name)?,
            ProductPrice::new(form.price)?,
            form.description,
            form.image.map(ImageUrl::new).transpose()?,
        ))
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProductForm {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub description: Option<String>,
    #[validate(url)]
    pub image: Option<String>,
    /// `active` or `inactive`.
    pub status: Option<String>,
}

impl TryFrom<UpdateProductForm> for UpdateProduct {
    type Error = FormError;

    fn try_from(form: UpdateProductForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(UpdateProduct {
            name: form.name.map(ProductName::new).transpose()?,
            price: form.price.map(ProductPrice::new).transpose()?,
            description: form.description.map(|d| d.trim().to_string()),
            image: form.image.map(ImageUrl::new).transpose()?,
            status: form
                .status
                .as_deref()
                .map(str::parse::<ProductStatus>)
                .transpose()?,
        })
    }
}
