//! Product use cases.

use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::ProductId;
use crate::forms::product::{CreateProductForm, UpdateProductForm};
use crate::pagination::{ListParams, ListResult};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Validates the form and stores a new, active product.
pub fn create_product<R>(form: CreateProductForm, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = NewProduct::try_from(form).map_err(|err| {
        log::error!("Failed to validate product form: {err}");
        err
    })?;

    let product = repo.create_product(&new_product).map_err(|err| {
        log::error!("Failed to create product: {err}");
        err
    })?;

    Ok(product)
}

pub fn get_product_by_id<R>(id: &str, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    let product_id: ProductId = id.parse()?;

    repo.get_product_by_id(product_id)
        .map_err(|err| {
            log::error!("Failed to load product {product_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)
}

pub fn list_products<R>(params: &ListParams, repo: &R) -> ServiceResult<ListResult<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products(params)
        .map_err(|err| {
            log::error!("Failed to list products: {err}");
            err
        })
        .map_err(ServiceError::from)
}

pub fn update_product_by_id<R>(
    id: &str,
    form: UpdateProductForm,
    repo: &R,
) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let product_id: ProductId = id.parse()?;
    let updates = UpdateProduct::try_from(form)?;

    if repo.get_product_by_id(product_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let product = repo.update_product(product_id, &updates).map_err(|err| {
        log::error!("Failed to update product {product_id}: {err}");
        err
    })?;

    Ok(product)
}

pub fn delete_product_by_id<R>(id: &str, repo: &R) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let product_id: ProductId = id.parse()?;

    if repo.get_product_by_id(product_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.delete_product(product_id).map_err(|err| {
        log::error!("Failed to delete product {product_id}: {err}");
        err
    })?;

    Ok(())
}
