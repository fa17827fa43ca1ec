use std::collections::BTreeMap;

use budgify_core::budget as core_budget;
use budgify_core::errors::{Error as CoreError, Result as CoreResult};
use budgify_core::expenses as core_expenses;
use budgify_core::recurring as core_recurring;
use budgify_core::users as core_users;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// --- auth ---------------------------------------------------------------

#[derive(Deserialize, ToSchema, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<core_users::User> for UserSummary {
    fn from(u: core_users::User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
    pub user: UserSummary,
}

// --- expenses -----------------------------------------------------------

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl From<core_expenses::Expense> for Expense {
    fn from(e: core_expenses::Expense) -> Self {
        Self {
            id: e.id,
            user_id: e.user_id,
            amount: e.amount,
            category: e.category,
            description: e.description,
            date: e.date,
            created_at: e.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl From<NewExpense> for core_expenses::NewExpense {
    fn from(e: NewExpense) -> Self {
        Self {
            amount: e.amount,
            category: e.category,
            description: e.description,
            date: e.date,
        }
    }
}

#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl From<ExpenseUpdate> for core_expenses::ExpenseUpdate {
    fn from(e: ExpenseUpdate) -> Self {
        Self {
            amount: e.amount,
            category: e.category,
            description: e.description,
            date: e.date,
        }
    }
}

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

// --- recurring costs ----------------------------------------------------

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RecurringCost {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: f64,
    /// `monthly` or `annual`.
    pub frequency: String,
    pub category: String,
    pub start_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl From<core_recurring::RecurringCost> for RecurringCost {
    fn from(c: core_recurring::RecurringCost) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            name: c.name,
            amount: c.amount,
            frequency: c.frequency.as_str().to_string(),
            category: c.category,
            start_date: c.start_date,
            created_at: c.created_at,
        }
    }
}

/// `frequency` arrives as free text so a wrong value yields a validation message
/// rather than a generic body rejection.
#[derive(Deserialize, ToSchema, Debug)]
pub struct NewRecurringCost {
    pub name: String,
    pub amount: f64,
    pub frequency: String,
    pub category: String,
    /// Defaults to today.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl TryFrom<NewRecurringCost> for core_recurring::NewRecurringCost {
    type Error = CoreError;

    fn try_from(c: NewRecurringCost) -> CoreResult<Self> {
        Ok(Self {
            name: c.name,
            amount: c.amount,
            frequency: c.frequency.parse()?,
            category: c.category,
            start_date: c.start_date.unwrap_or_else(|| Utc::now().date_naive()),
        })
    }
}

#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct RecurringCostUpdate {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub frequency: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
}

impl TryFrom<RecurringCostUpdate> for core_recurring::RecurringCostUpdate {
    type Error = CoreError;

    fn try_from(c: RecurringCostUpdate) -> CoreResult<Self> {
        Ok(Self {
            name: c.name,
            amount: c.amount,
            frequency: c.frequency.map(|f| f.parse()).transpose()?,
            category: c.category,
            start_date: c.start_date,
        })
    }
}

// --- budget -------------------------------------------------------------

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BudgetSetting {
    pub user_id: String,
    pub monthly_limit: f64,
    pub updated_at: NaiveDateTime,
}

impl From<core_budget::BudgetSetting> for BudgetSetting {
    fn from(s: core_budget::BudgetSetting) -> Self {
        Self {
            user_id: s.user_id,
            monthly_limit: s.monthly_limit,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct BudgetSettingUpdate {
    pub monthly_limit: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    pub total_spent: f64,
    pub recurring_costs: f64,
    pub total_with_recurring: f64,
    pub budget_limit: f64,
    pub remaining: f64,
    pub percentage_used: f64,
    pub transaction_count: usize,
    pub is_over_budget: bool,
}

impl From<core_budget::SpendingSummary> for SpendingSummary {
    fn from(s: core_budget::SpendingSummary) -> Self {
        Self {
            total_spent: s.total_spent,
            recurring_costs: s.recurring_costs,
            total_with_recurring: s.total_with_recurring,
            budget_limit: s.budget_limit,
            remaining: s.remaining,
            percentage_used: s.percentage_used,
            transaction_count: s.transaction_count,
            is_over_budget: s.is_over_budget,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct DailySpending {
    pub day: u32,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SpendingBreakdown {
    pub year: i32,
    pub month: u32,
    pub category_totals: BTreeMap<String, f64>,
    pub daily_spending: Vec<DailySpending>,
    pub transaction_count: usize,
}

impl From<core_budget::SpendingBreakdown> for SpendingBreakdown {
    fn from(b: core_budget::SpendingBreakdown) -> Self {
        Self {
            year: b.year,
            month: b.month,
            category_totals: b.category_totals,
            daily_spending: b
                .daily_spending
                .into_iter()
                .map(|d| DailySpending {
                    day: d.day,
                    amount: d.amount,
                })
                .collect(),
            transaction_count: b.transaction_count,
        }
    }
}

// --- service info -------------------------------------------------------

#[derive(Serialize, ToSchema, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}
