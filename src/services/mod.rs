//! Use cases invoked by the HTTP routes.
//!
//! Services are generic over the repository ports so they can be exercised
//! against [`crate::repository::mock::MockRepository`] in tests.

pub mod auth;
pub mod errors;
pub mod post;
pub mod product;
pub mod user;

pub use errors::{ServiceError, ServiceResult};
