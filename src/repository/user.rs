//! Repository implementation for user accounts.

use diesel::dsl::exists;
use diesel::prelude::*;

use crate::{
    domain::{
        types::{DisplayName, Login},
        user::{NewUser, User},
    },
    models::user::{NewUser as DbNewUser, User as DbUser},
    repository::errors::RepositoryResult,
    repository::{DieselRepository, UserReader, UserWriter},
};

impl UserReader for DieselRepository {
    fn get_user_by_login(&self, login: &Login) -> RepositoryResult<Option<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::login.eq(login.as_str()))
            .select(DbUser::as_select())
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn display_exists(&self, display: &DisplayName) -> RepositoryResult<bool> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let found = diesel::select(exists(
            users::table.filter(users::display.eq(display.as_str())),
        ))
        .get_result(&mut conn)?;
        Ok(found)
    }

    fn login_exists(&self, login: &Login) -> RepositoryResult<bool> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let found = diesel::select(exists(users::table.filter(users::login.eq(login.as_str()))))
            .get_result(&mut conn)?;
        Ok(found)
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let insertable: DbNewUser = new_user.into();
        let user = diesel::insert_into(users::table)
            .values(&insertable)
            .returning(DbUser::as_returning())
            .get_result::<DbUser>(&mut conn)?;

        Ok(user.into())
    }
}
