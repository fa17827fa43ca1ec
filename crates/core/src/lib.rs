//! Budgify Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for Budgify. It is storage-agnostic
//! and defines repository traits that are implemented by the
//! `storage-sqlite` and `storage-memory` crates.

pub mod budget;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod recurring;
pub mod users;
pub mod validation;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
