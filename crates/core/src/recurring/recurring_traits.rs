use crate::errors::Result;
use crate::recurring::recurring_model::{NewRecurringCost, RecurringCost, RecurringCostUpdate};
use async_trait::async_trait;

/// Trait for recurring cost repository operations. Every call is scoped to one user.
#[async_trait]
pub trait RecurringCostRepositoryTrait: Send + Sync {
    /// All recurring costs of the user, most recently created first.
    fn get_recurring_costs(&self, user_id: &str) -> Result<Vec<RecurringCost>>;
    fn get_recurring_cost(&self, user_id: &str, cost_id: &str) -> Result<Option<RecurringCost>>;
    async fn insert_recurring_cost(
        &self,
        user_id: &str,
        new_cost: NewRecurringCost,
    ) -> Result<RecurringCost>;
    async fn update_recurring_cost(&self, cost: RecurringCost) -> Result<RecurringCost>;
    async fn delete_recurring_cost(&self, user_id: &str, cost_id: &str) -> Result<usize>;
}

/// Trait for recurring cost service operations
#[async_trait]
pub trait RecurringCostServiceTrait: Send + Sync {
    fn get_recurring_costs(&self, user_id: &str) -> Result<Vec<RecurringCost>>;
    fn get_recurring_cost(&self, user_id: &str, cost_id: &str) -> Result<RecurringCost>;
    async fn create_recurring_cost(
        &self,
        user_id: &str,
        new_cost: NewRecurringCost,
    ) -> Result<RecurringCost>;
    async fn update_recurring_cost(
        &self,
        user_id: &str,
        cost_id: &str,
        update: RecurringCostUpdate,
    ) -> Result<RecurringCost>;
    async fn delete_recurring_cost(&self, user_id: &str, cost_id: &str) -> Result<()>;
}
