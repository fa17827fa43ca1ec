//! SQLite storage implementation for recurring costs.

mod model;
mod repository;

pub use model::RecurringCostDB;
pub use repository::RecurringCostRepository;
