use crate::errors::Result;
use crate::users::users_model::{NewUser, User, UserCredentials};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>>;
    fn email_or_username_taken(&self, email: &str, username: &str) -> Result<bool>;
    /// Inserts the user and its budget setting in one atomic step.
    async fn create_user(&self, new_user: NewUser, monthly_limit: f64) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>>;
    async fn register(&self, new_user: NewUser) -> Result<User>;
}
