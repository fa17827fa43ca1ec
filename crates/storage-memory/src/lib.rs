//! In-process storage implementation for Budgify.
//!
//! [`MemoryStore`] keeps every record in maps keyed by id and implements all
//! four repository traits from `budgify-core`, so the server can run without a
//! database file. Data lives as long as the process. Uniqueness and ownership
//! rules mirror the SQLite schema: duplicate emails or usernames are unique
//! violations and rows for unknown users are foreign key violations.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use budgify_core::budget::{BudgetRepositoryTrait, BudgetSetting};
use budgify_core::errors::{DatabaseError, Error, Result};
use budgify_core::expenses::{Expense, ExpenseRepositoryTrait, NewExpense};
use budgify_core::recurring::{NewRecurringCost, RecurringCost, RecurringCostRepositoryTrait};
use budgify_core::users::{NewUser, User, UserCredentials, UserRepositoryTrait};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use log::debug;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserCredentials>>,
    expenses: RwLock<HashMap<String, Expense>>,
    recurring_costs: RwLock<HashMap<String, RecurringCost>>,
    budget_settings: RwLock<HashMap<String, BudgetSetting>>,
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
    lock.read().map_err(|e| {
        Error::Database(DatabaseError::Internal(format!(
            "Failed to acquire read lock: {}",
            e
        )))
    })
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
    lock.write().map_err(|e| {
        Error::Database(DatabaseError::Internal(format!(
            "Failed to acquire write lock: {}",
            e
        )))
    })
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_user(&self, user_id: &str) -> Result<()> {
        if read(&self.users)?.contains_key(user_id) {
            Ok(())
        } else {
            Err(Error::Database(DatabaseError::ForeignKeyViolation(format!(
                "unknown user {user_id}"
            ))))
        }
    }
}

#[async_trait]
impl UserRepositoryTrait for MemoryStore {
    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        Ok(read(&self.users)?
            .values()
            .find(|c| c.user.email == email)
            .cloned())
    }

    fn email_or_username_taken(&self, email: &str, username: &str) -> Result<bool> {
        Ok(read(&self.users)?
            .values()
            .any(|c| c.user.email == email || c.user.username == username))
    }

    async fn create_user(&self, new_user: NewUser, monthly_limit: f64) -> Result<User> {
        // Lock order users -> budget_settings keeps the pair atomic.
        let mut users = write(&self.users)?;
        let mut settings = write(&self.budget_settings)?;

        if users
            .values()
            .any(|c| c.user.email == new_user.email || c.user.username == new_user.username)
        {
            return Err(Error::Database(DatabaseError::UniqueViolation(
                "users.email or users.username".to_string(),
            )));
        }

        let created_at = now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            username: new_user.username,
            email: new_user.email,
            created_at,
        };
        settings.insert(
            user.id.clone(),
            BudgetSetting {
                user_id: user.id.clone(),
                monthly_limit,
                updated_at: created_at,
            },
        );
        users.insert(
            user.id.clone(),
            UserCredentials {
                user: user.clone(),
                password_hash: new_user.password_hash,
            },
        );
        debug!("Stored user {} in memory", user.id);
        Ok(user)
    }
}

/// Newest date first, then newest record first.
fn sort_expenses(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
}

#[async_trait]
impl ExpenseRepositoryTrait for MemoryStore {
    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
        let mut rows: Vec<Expense> = read(&self.expenses)?
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        sort_expenses(&mut rows);
        Ok(rows)
    }

    fn get_expenses_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        let mut rows: Vec<Expense> = read(&self.expenses)?
            .values()
            .filter(|e| e.user_id == user_id && e.date >= start && e.date <= end)
            .cloned()
            .collect();
        sort_expenses(&mut rows);
        Ok(rows)
    }

    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Option<Expense>> {
        Ok(read(&self.expenses)?
            .get(expense_id)
            .filter(|e| e.user_id == user_id)
            .cloned())
    }

    async fn insert_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        self.ensure_user(user_id)?;
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            amount: new_expense.amount,
            category: new_expense.category,
            description: new_expense.description,
            date: new_expense.date,
            created_at: now(),
        };
        write(&self.expenses)?.insert(expense.id.clone(), expense.clone());
        Ok(expense)
    }

    async fn update_expense(&self, expense: Expense) -> Result<Expense> {
        let mut expenses = write(&self.expenses)?;
        let slot = expenses
            .get_mut(&expense.id)
            .filter(|e| e.user_id == expense.user_id)
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(expense.id.clone())))?;
        // Identity and creation time are not updatable.
        slot.amount = expense.amount;
        slot.category = expense.category;
        slot.description = expense.description;
        slot.date = expense.date;
        Ok(slot.clone())
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize> {
        let mut expenses = write(&self.expenses)?;
        match expenses.get(expense_id) {
            Some(e) if e.user_id == user_id => {
                expenses.remove(expense_id);
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

#[async_trait]
impl RecurringCostRepositoryTrait for MemoryStore {
    fn get_recurring_costs(&self, user_id: &str) -> Result<Vec<RecurringCost>> {
        let mut rows: Vec<RecurringCost> = read(&self.recurring_costs)?
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    fn get_recurring_cost(&self, user_id: &str, cost_id: &str) -> Result<Option<RecurringCost>> {
        Ok(read(&self.recurring_costs)?
            .get(cost_id)
            .filter(|c| c.user_id == user_id)
            .cloned())
    }

    async fn insert_recurring_cost(
        &self,
        user_id: &str,
        new_cost: NewRecurringCost,
    ) -> Result<RecurringCost> {
        self.ensure_user(user_id)?;
        let cost = RecurringCost {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new_cost.name,
            amount: new_cost.amount,
            frequency: new_cost.frequency,
            category: new_cost.category,
            start_date: new_cost.start_date,
            created_at: now(),
        };
        write(&self.recurring_costs)?.insert(cost.id.clone(), cost.clone());
        Ok(cost)
    }

    async fn update_recurring_cost(&self, cost: RecurringCost) -> Result<RecurringCost> {
        let mut costs = write(&self.recurring_costs)?;
        let slot = costs
            .get_mut(&cost.id)
            .filter(|c| c.user_id == cost.user_id)
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(cost.id.clone())))?;
        slot.name = cost.name;
        slot.amount = cost.amount;
        slot.frequency = cost.frequency;
        slot.category = cost.category;
        slot.start_date = cost.start_date;
        Ok(slot.clone())
    }

    async fn delete_recurring_cost(&self, user_id: &str, cost_id: &str) -> Result<usize> {
        let mut costs = write(&self.recurring_costs)?;
        match costs.get(cost_id) {
            Some(c) if c.user_id == user_id => {
                costs.remove(cost_id);
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for MemoryStore {
    fn get_budget_setting(&self, user_id: &str) -> Result<Option<BudgetSetting>> {
        Ok(read(&self.budget_settings)?.get(user_id).cloned())
    }

    async fn upsert_budget_setting(
        &self,
        user_id: &str,
        monthly_limit: f64,
    ) -> Result<BudgetSetting> {
        self.ensure_user(user_id)?;
        let setting = BudgetSetting {
            user_id: user_id.to_string(),
            monthly_limit,
            updated_at: now(),
        };
        write(&self.budget_settings)?.insert(user_id.to_string(), setting.clone());
        Ok(setting)
    }
}
