use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{UserEmail, UserId, Username};

/// Registered user as exposed outside the repository. The password hash is
/// only reachable through [`UserCredentials`].
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uuid: UserId,
    pub username: Username,
    pub email: UserEmail,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A user together with the stored password hash, used for login checks.
#[derive(Clone, Debug)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Data required to register a user. The password is already hashed.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: Username,
    pub email: UserEmail,
    pub password_hash: String,
}
