use std::sync::Arc;

use async_trait::async_trait;
use budgify_core::users::{NewUser, User, UserCredentials, UserRepositoryTrait};
use budgify_core::Result;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use super::model::{NewUserDB, UserDB};
use crate::budget::BudgetSettingDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{budget_settings, users};

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        let mut conn = get_connection(&self.pool)?;
        let row = users::table
            .filter(users::email.eq(email))
            .select(UserDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(UserCredentials::from))
    }

    fn email_or_username_taken(&self, email: &str, username: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let count: i64 = users::table
            .filter(users::email.eq(email).or(users::username.eq(username)))
            .count()
            .get_result(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count > 0)
    }

    async fn create_user(&self, new_user: NewUser, monthly_limit: f64) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let now = Utc::now().naive_utc();
                let row = NewUserDB {
                    id: Uuid::new_v4().to_string(),
                    username: new_user.username,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    created_at: now,
                };

                let created = diesel::insert_into(users::table)
                    .values(&row)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;

                // Same transaction as the user row.
                diesel::insert_into(budget_settings::table)
                    .values(&BudgetSettingDB {
                        user_id: created.id.clone(),
                        monthly_limit,
                        updated_at: now,
                    })
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(User::from(created))
            })
            .await
    }
}
