//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::post::{NewPost, Post, UpdatePost};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::{PostId, ProductId, Username};
use crate::domain::user::{NewUser, User, UserCredentials};
use crate::pagination::{ListParams, ListResult};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    PostReader, PostWriter, ProductReader, ProductWriter, UserReader, UserWriter,
};

mock! {
    pub Repository {}

    impl PostReader for Repository {
        fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>>;
        fn list_posts(&self, params: &ListParams) -> RepositoryResult<ListResult<Post>>;
    }

    impl PostWriter for Repository {
        fn create_post(&self, new_post: &NewPost) -> RepositoryResult<Post>;
        fn update_post(&self, id: PostId, updates: &UpdatePost) -> RepositoryResult<Post>;
        fn delete_post(&self, id: PostId) -> RepositoryResult<()>;
    }

    impl ProductReader for Repository {
        fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, params: &ListParams) -> RepositoryResult<ListResult<Product>>;
    }

    impl ProductWriter for Repository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(
            &self,
            id: ProductId,
            updates: &UpdateProduct,
        ) -> RepositoryResult<Product>;
        fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
    }

    impl UserReader for Repository {
        fn get_user_by_username(&self, username: &Username) -> RepositoryResult<Option<User>>;
        fn get_credentials_by_username(
            &self,
            username: &Username,
        ) -> RepositoryResult<Option<UserCredentials>>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    }
}
