//! Response and query payloads that are not domain entities.

use serde::{Deserialize, Serialize};

/// Body returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

/// Query string of `GET /users`.
#[derive(Debug, Deserialize)]
pub struct UsernameQuery {
    pub username: String,
}
