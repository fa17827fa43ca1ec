//! Budget module - monthly limit setting plus the spending summary and breakdown.

mod breakdown;
mod budget_model;
mod budget_service;
mod budget_traits;
mod month;
mod summary;

pub use breakdown::{breakdown, DailySpending, SpendingBreakdown};
pub use budget_model::{BudgetSetting, BudgetSettingUpdate};
pub use budget_service::BudgetService;
pub use budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
pub use month::BudgetMonth;
pub use summary::{recurring_totals, summarize, RecurringTotals, SpendingSummary};
