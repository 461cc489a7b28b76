//! User registration and lookup.

use validator::Validate;

use crate::domain::types::{UserEmail, Username};
use crate::domain::user::{NewUser, User};
use crate::forms::user::CreateUserForm;
use crate::repository::{UserReader, UserWriter};
use crate::services::auth::hash_password;
use crate::services::{ServiceError, ServiceResult};

/// Registers a user, storing only the Argon2 hash of the password.
pub fn create_user<R>(form: CreateUserForm, repo: &R) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate user form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    let new_user = NewUser {
        username: Username::new(form.username)?,
        email: UserEmail::new(form.email)?,
        password_hash: hash_password(&form.password)?,
    };

    let user = repo.create_user(&new_user).map_err(|err| {
        log::error!("Failed to create user {}: {err}", new_user.username);
        err
    })?;

    log::info!("Registered user {}", user.username);

    Ok(user)
}

pub fn get_user_by_username<R>(username: &str, repo: &R) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    let username = Username::new(username)?;

    repo.get_user_by_username(&username)
        .map_err(|err| {
            log::error!("Failed to load user {username}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)
}
