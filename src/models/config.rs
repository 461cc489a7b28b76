//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_jwt_expires_in() -> i64 {
    60 * 60 * 24
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:7000".to_string()]
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// HMAC secret used to sign access tokens.
    pub secret: String,
    /// Access token lifetime in seconds.
    #[serde(default = "default_jwt_expires_in")]
    pub jwt_expires_in: i64,
    /// Mark the `access_token` cookie as `Secure`.
    #[serde(default)]
    pub secure_cookies: bool,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

/// `APP_*` environment overrides. `APP_CORS_ORIGINS` takes a comma-separated
/// list and numeric values such as `APP_PORT` are parsed.
pub fn environment_source() -> config::Environment {
    config::Environment::with_prefix("APP")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("cors_origins")
}
