//! Repository ports and their Diesel-backed implementation.

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        post::{NewPost, Post, UpdatePost},
        product::{NewProduct, Product, UpdateProduct},
        types::{PostId, ProductId, Username},
        user::{NewUser, User, UserCredentials},
    },
    pagination::{ListParams, ListResult},
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod post;
pub mod product;
pub mod user;

/// Diesel repository backed by a shared SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait PostReader {
    fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>>;
    fn list_posts(&self, params: &ListParams) -> RepositoryResult<ListResult<Post>>;
}

pub trait PostWriter {
    fn create_post(&self, new_post: &NewPost) -> RepositoryResult<Post>;
    fn update_post(&self, id: PostId, updates: &UpdatePost) -> RepositoryResult<Post>;
    fn delete_post(&self, id: PostId) -> RepositoryResult<()>;
}

pub trait ProductReader {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, params: &ListParams) -> RepositoryResult<ListResult<Product>>;
}

pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, id: ProductId, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
}

pub trait UserReader {
    fn get_user_by_username(&self, username: &Username) -> RepositoryResult<Option<User>>;
    /// Same lookup as [`UserReader::get_user_by_username`] but keeps the
    /// password hash for credential checks.
    fn get_credentials_by_username(
        &self,
        username: &Username,
    ) -> RepositoryResult<Option<UserCredentials>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}
