//! Credential checks and access token issuance.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use validator::Validate;

use crate::domain::types::Username;
use crate::dto::TokenResponse;
use crate::forms::auth::LoginForm;
use crate::models::auth::Claims;
use crate::repository::UserReader;
use crate::services::{ServiceError, ServiceResult};

const INVALID_CREDENTIALS: &str = "Invalid username or password.";

/// Hashes `password` with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            log::error!("Failed to hash password: {err}");
            ServiceError::Internal("password hashing failed".to_string())
        })
}

/// Returns `false` for a wrong password and for an unparsable hash alike.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        log::warn!("Stored password hash is malformed");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Checks the credentials and issues a signed access token valid for
/// `ttl_seconds`.
pub fn login<R>(
    form: LoginForm,
    secret: &str,
    ttl_seconds: i64,
    repo: &R,
) -> ServiceResult<TokenResponse>
where
    R: UserReader + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate login form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    let invalid = || ServiceError::Unauthorized(INVALID_CREDENTIALS.to_string());

    let username = Username::new(form.username).map_err(|_| invalid())?;

    let credentials = repo
        .get_credentials_by_username(&username)
        .map_err(|err| {
            log::error!("Failed to load credentials for {username}: {err}");
            err
        })?
        .ok_or_else(invalid)?;

    if !verify_password(&form.password, &credentials.password_hash) {
        log::warn!("Failed login attempt for {username}");
        return Err(invalid());
    }

    let access_token = Claims::for_user(&credentials.user, ttl_seconds)
        .encode(secret)
        .map_err(|err| {
            log::error!("Failed to sign access token: {err}");
            ServiceError::Internal("token signing failed".to_string())
        })?;

    log::info!("User {username} logged in");

    Ok(TokenResponse { access_token })
}
