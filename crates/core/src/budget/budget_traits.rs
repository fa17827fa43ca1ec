use crate::budget::breakdown::SpendingBreakdown;
use crate::budget::budget_model::{BudgetSetting, BudgetSettingUpdate};
use crate::budget::month::BudgetMonth;
use crate::budget::summary::SpendingSummary;
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for budget setting repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn get_budget_setting(&self, user_id: &str) -> Result<Option<BudgetSetting>>;
    /// Inserts the setting or replaces the existing limit, stamping `updated_at`.
    async fn upsert_budget_setting(
        &self,
        user_id: &str,
        monthly_limit: f64,
    ) -> Result<BudgetSetting>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budget_setting(&self, user_id: &str) -> Result<BudgetSetting>;
    async fn update_budget_setting(
        &self,
        user_id: &str,
        update: BudgetSettingUpdate,
    ) -> Result<BudgetSetting>;
    fn get_spending_summary(&self, user_id: &str, month: BudgetMonth) -> Result<SpendingSummary>;
    fn get_spending_breakdown(
        &self,
        user_id: &str,
        month: BudgetMonth,
    ) -> Result<SpendingBreakdown>;
}
