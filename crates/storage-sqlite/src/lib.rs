//! SQLite storage implementation for Budgify.
//!
//! Implements the repository traits defined in `budgify-core` with Diesel:
//! - Connection pooling and PRAGMA setup
//! - Embedded migrations
//! - A single-writer actor that serializes every write in an immediate transaction
//! - Database model types with Diesel derives
//!
//! Diesel is confined to this crate; `core` only sees the traits.

pub mod db;
pub mod errors;
pub mod schema;

pub mod budget;
pub mod expenses;
pub mod recurring;
pub mod users;

pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};
pub use errors::{IntoCore, StorageError};

pub use budget::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use recurring::RecurringCostRepository;
pub use users::UserRepository;

pub use budgify_core::errors::{DatabaseError, Error, Result};
