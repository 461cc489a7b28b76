use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::types::{TypeConstraintError, UserEmail, UserId, Username};
use crate::domain::user::{
    NewUser as DomainNewUser, User as DomainUser, UserCredentials as DomainUserCredentials,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
#[diesel(primary_key(uuid))]
/// Diesel model for [`crate::domain::user::User`], including the password hash.
pub struct User {
    pub uuid: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
/// Insertable form of [`User`].
pub struct NewUser<'a> {
    pub uuid: String,
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<User> for DomainUserCredentials {
    type Error = TypeConstraintError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Ok(Self {
            user: DomainUser {
                uuid: user.uuid.parse::<UserId>()?,
                username: Username::new(user.username)?,
                email: UserEmail::new(user.email)?,
                created_at: user.created_at,
                updated_at: user.updated_at,
            },
            password_hash: user.password,
        })
    }
}

impl TryFrom<User> for DomainUser {
    type Error = TypeConstraintError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        DomainUserCredentials::try_from(user).map(|credentials| credentials.user)
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(user: &'a DomainNewUser) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            uuid: UserId::new().to_string(),
            username: user.username.as_str(),
            email: user.email.as_str(),
            password: user.password_hash.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}
