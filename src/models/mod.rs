//! Database models and configuration shared across the service.

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "server")]
pub mod config;
pub mod post;
pub mod product;
pub mod user;
