//! Domain aggregates exposed by the service layer.

pub mod post;
pub mod product;
pub mod types;
pub mod user;
