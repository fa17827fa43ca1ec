use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use super::users_model::{NewUser, User, UserCredentials};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::constants::DEFAULT_MONTHLY_LIMIT;
use crate::errors::{Error, Result};
use crate::validation::normalize_email;

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        self.repository
            .find_credentials_by_email(&normalize_email(email))
    }

    async fn register(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        let new_user = NewUser {
            username: new_user.username.trim().to_string(),
            email: normalize_email(&new_user.email),
            password_hash: new_user.password_hash,
        };

        if self
            .repository
            .email_or_username_taken(&new_user.email, &new_user.username)?
        {
            return Err(Error::ConstraintViolation("User already exists".to_string()));
        }

        let user = self
            .repository
            .create_user(new_user, DEFAULT_MONTHLY_LIMIT)
            .await?;
        info!("Registered user {}", user.id);
        Ok(user)
    }
}
