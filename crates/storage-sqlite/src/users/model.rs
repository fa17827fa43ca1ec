//! Database models for users.

use budgify_core::users::{User, UserCredentials};
use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        User {
            id: db.id,
            username: db.username,
            email: db.email,
            created_at: db.created_at,
        }
    }
}

impl From<UserDB> for UserCredentials {
    fn from(db: UserDB) -> Self {
        let password_hash = db.password_hash.clone();
        UserCredentials {
            user: User::from(db),
            password_hash,
        }
    }
}
