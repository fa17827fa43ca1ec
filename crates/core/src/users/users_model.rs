//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::validation::{ensure_email, ensure_label};

/// Public view of a registered user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// A user together with the stored password hash. Never serialized.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Input model for registering a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Registration checks that can run on the plain password, before it is
    /// hashed.
    pub fn validate_registration(username: &str, email: &str, password: &str) -> Result<()> {
        ensure_label("username", username)?;
        ensure_email(email)?;
        if password.is_empty() {
            return Err(Error::missing_field("password"));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        Self::validate_registration(&self.username, &self.email, &self.password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    fn failing_field(username: &str, email: &str, password: &str) -> String {
        match NewUser::validate_registration(username, email, password) {
            Err(Error::Validation(ValidationError::MissingField(field))) => field,
            Err(Error::Validation(ValidationError::InvalidInput(message))) => message,
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn registration_fields_are_checked_in_order() {
        assert!(NewUser::validate_registration("jane", "jane@example.com", "pw").is_ok());
        assert_eq!(failing_field(" ", "not-an-email", ""), "username");
        assert_eq!(
            failing_field("jane", "not-an-email", ""),
            "email is not a valid address"
        );
        assert_eq!(failing_field("jane", "jane@example.com", ""), "password");
    }
}
