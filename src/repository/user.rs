//! Diesel persistence for users.

use diesel::prelude::*;

use crate::domain::types::Username;
use crate::domain::user::{NewUser, User, UserCredentials};
use crate::models::user::{NewUser as DbNewUser, User as DbUser};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, UserReader, UserWriter};
use crate::schema::users;

impl UserReader for DieselRepository {
    fn get_user_by_username(&self, username: &Username) -> RepositoryResult<Option<User>> {
        Ok(self
            .get_credentials_by_username(username)?
            .map(|credentials| credentials.user))
    }

    fn get_credentials_by_username(
        &self,
        username: &Username,
    ) -> RepositoryResult<Option<UserCredentials>> {
        let mut conn = self.conn()?;

        let db_user = users::table
            .filter(users::username.eq(username.as_str()))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(db_user.map(UserCredentials::try_from).transpose()?)
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        let mut conn = self.conn()?;
        let insertable: DbNewUser = new_user.into();

        let db_user = diesel::insert_into(users::table)
            .values(&insertable)
            .get_result::<DbUser>(&mut conn)?;

        Ok(User::try_from(db_user)?)
    }
}
