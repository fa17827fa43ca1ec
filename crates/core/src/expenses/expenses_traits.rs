use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for expense repository operations. Every call is scoped to one user.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// All expenses of the user, newest date first.
    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>>;
    /// Expenses dated within `start..=end`, newest date first.
    fn get_expenses_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>>;
    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Option<Expense>>;
    async fn insert_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, expense: Expense) -> Result<Expense>;
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>>;
    fn get_expenses_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>>;
    /// Fails with `NotFound` when the expense is missing or owned by someone else.
    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense>;
    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(
        &self,
        user_id: &str,
        expense_id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense>;
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()>;
}
