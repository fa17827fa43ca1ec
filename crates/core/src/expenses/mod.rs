//! Expenses module - one-off spending records dated by when they were incurred.

mod expenses_model;
mod expenses_service;
mod expenses_traits;

pub use expenses_model::{Expense, ExpenseUpdate, NewExpense};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
