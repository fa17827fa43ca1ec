//! Field-level checks shared by the `validate` methods of input models.

use crate::constants::{MAX_AMOUNT, MAX_LABEL_LENGTH};
use crate::errors::{Error, Result};

/// Rejects blank or overlong labels such as categories and names.
pub fn ensure_label(field: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::missing_field(field));
    }
    if trimmed.chars().count() > MAX_LABEL_LENGTH {
        return Err(Error::invalid_input(format!(
            "{} must be at most {} characters",
            field, MAX_LABEL_LENGTH
        )));
    }
    Ok(())
}

/// Currency amounts must be finite, non-negative and at most [`MAX_AMOUNT`].
pub fn ensure_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_input(format!("{} must be a number", field)));
    }
    if value < 0.0 {
        return Err(Error::invalid_input(format!(
            "{} must not be negative",
            field
        )));
    }
    if value > MAX_AMOUNT {
        return Err(Error::invalid_input(format!(
            "{} must be at most {}",
            field, MAX_AMOUNT
        )));
    }
    Ok(())
}

/// Minimal structural check: one `@` with a non-empty local part and a domain
/// containing a dot.
pub fn ensure_email(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::missing_field("email"));
    }
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(Error::invalid_input("email is not a valid address"));
    }
    Ok(())
}

/// Emails are compared case-insensitively, so they are stored lower-cased.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}
