//! SQLite storage implementation for budget settings.

mod model;
mod repository;

pub use model::BudgetSettingDB;
pub use repository::BudgetRepository;
