use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::breakdown::{breakdown, SpendingBreakdown};
use super::budget_model::{BudgetSetting, BudgetSettingUpdate};
use super::budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use super::month::BudgetMonth;
use super::summary::{summarize, SpendingSummary};
use crate::constants::DEFAULT_MONTHLY_LIMIT;
use crate::errors::{Error, Result};
use crate::expenses::{Expense, ExpenseRepositoryTrait};
use crate::recurring::RecurringCostRepositoryTrait;

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    recurring_repository: Arc<dyn RecurringCostRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        recurring_repository: Arc<dyn RecurringCostRepositoryTrait>,
    ) -> Self {
        BudgetService {
            repository,
            expense_repository,
            recurring_repository,
        }
    }

    fn month_expenses(&self, user_id: &str, month: BudgetMonth) -> Result<Vec<Expense>> {
        self.expense_repository
            .get_expenses_in_range(user_id, month.first_day(), month.last_day())
    }

    fn monthly_limit(&self, user_id: &str) -> Result<f64> {
        Ok(self
            .repository
            .get_budget_setting(user_id)?
            .map(|setting| setting.monthly_limit)
            .unwrap_or(DEFAULT_MONTHLY_LIMIT))
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budget_setting(&self, user_id: &str) -> Result<BudgetSetting> {
        self.repository
            .get_budget_setting(user_id)?
            .ok_or_else(|| Error::NotFound("Budget settings".to_string()))
    }

    async fn update_budget_setting(
        &self,
        user_id: &str,
        update: BudgetSettingUpdate,
    ) -> Result<BudgetSetting> {
        update.validate()?;
        self.repository
            .upsert_budget_setting(user_id, update.monthly_limit)
            .await
    }

    fn get_spending_summary(&self, user_id: &str, month: BudgetMonth) -> Result<SpendingSummary> {
        let expenses = self.month_expenses(user_id, month)?;
        let recurring_costs = self.recurring_repository.get_recurring_costs(user_id)?;
        let limit = self.monthly_limit(user_id)?;
        debug!(
            "Summarizing {} for user {}: {} expenses, {} recurring costs",
            month,
            user_id,
            expenses.len(),
            recurring_costs.len()
        );
        Ok(summarize(&expenses, &recurring_costs, limit, month))
    }

    fn get_spending_breakdown(
        &self,
        user_id: &str,
        month: BudgetMonth,
    ) -> Result<SpendingBreakdown> {
        let expenses = self.month_expenses(user_id, month)?;
        Ok(breakdown(&expenses, month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expenses::NewExpense;
    use crate::recurring::{Frequency, NewRecurringCost, RecurringCost};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::RwLock;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[derive(Default)]
    struct MockBudgetRepository {
        settings: RwLock<Vec<BudgetSetting>>,
    }

    #[async_trait]
    impl BudgetRepositoryTrait for MockBudgetRepository {
        fn get_budget_setting(&self, user_id: &str) -> Result<Option<BudgetSetting>> {
            Ok(self
                .settings
                .read()
                .unwrap()
                .iter()
                .find(|s| s.user_id == user_id)
                .cloned())
        }

        async fn upsert_budget_setting(
            &self,
            user_id: &str,
            monthly_limit: f64,
        ) -> Result<BudgetSetting> {
            let mut settings = self.settings.write().unwrap();
            settings.retain(|s| s.user_id != user_id);
            let setting = BudgetSetting {
                user_id: user_id.to_string(),
                monthly_limit,
                updated_at: stamp(),
            };
            settings.push(setting.clone());
            Ok(setting)
        }
    }

    /// Serves fixed rows; the range query honours its bounds.
    struct FixedExpenses(Vec<Expense>);

    #[async_trait]
    impl ExpenseRepositoryTrait for FixedExpenses {
        fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
            Ok(self
                .0
                .iter()
                .filter(|e| e.user_id == user_id)
                .cloned()
                .collect())
        }

        fn get_expenses_in_range(
            &self,
            user_id: &str,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<Vec<Expense>> {
            Ok(self
                .get_expenses(user_id)?
                .into_iter()
                .filter(|e| e.date >= start && e.date <= end)
                .collect())
        }

        fn get_expense(&self, _user_id: &str, _expense_id: &str) -> Result<Option<Expense>> {
            Ok(None)
        }

        async fn insert_expense(&self, _user_id: &str, _new: NewExpense) -> Result<Expense> {
            Err(Error::Unexpected("read-only".to_string()))
        }

        async fn update_expense(&self, _expense: Expense) -> Result<Expense> {
            Err(Error::Unexpected("read-only".to_string()))
        }

        async fn delete_expense(&self, _user_id: &str, _expense_id: &str) -> Result<usize> {
            Ok(0)
        }
    }

    struct FixedCosts(Vec<RecurringCost>);

    #[async_trait]
    impl RecurringCostRepositoryTrait for FixedCosts {
        fn get_recurring_costs(&self, user_id: &str) -> Result<Vec<RecurringCost>> {
            Ok(self
                .0
                .iter()
                .filter(|c| c.user_id == user_id)
                .cloned()
                .collect())
        }

        fn get_recurring_cost(&self, _user_id: &str, _id: &str) -> Result<Option<RecurringCost>> {
            Ok(None)
        }

        async fn insert_recurring_cost(
            &self,
            _user_id: &str,
            _new: NewRecurringCost,
        ) -> Result<RecurringCost> {
            Err(Error::Unexpected("read-only".to_string()))
        }

        async fn update_recurring_cost(&self, _cost: RecurringCost) -> Result<RecurringCost> {
            Err(Error::Unexpected("read-only".to_string()))
        }

        async fn delete_recurring_cost(&self, _user_id: &str, _id: &str) -> Result<usize> {
            Ok(0)
        }
    }

    fn expense(user_id: &str, amount: f64, category: &str, on: NaiveDate) -> Expense {
        Expense {
            id: format!("{user_id}-{on}"),
            user_id: user_id.to_string(),
            amount,
            category: category.to_string(),
            description: None,
            date: on,
            created_at: stamp(),
        }
    }

    fn service(budgets: Arc<MockBudgetRepository>) -> BudgetService {
        let expenses = FixedExpenses(vec![
            expense("u1", 50.0, "Food", date(2024, 3, 5)),
            expense("u1", 30.0, "Food", date(2024, 2, 20)),
            expense("u1", 5.0, "Coffee", date(2024, 3, 31)),
            expense("u2", 1000.0, "Rent", date(2024, 3, 1)),
        ]);
        let costs = FixedCosts(vec![RecurringCost {
            id: "r1".to_string(),
            user_id: "u1".to_string(),
            name: "Phone".to_string(),
            amount: 120.0,
            frequency: Frequency::Annual,
            category: "Bills".to_string(),
            start_date: date(2024, 1, 1),
            created_at: stamp(),
        }]);
        BudgetService::new(budgets, Arc::new(expenses), Arc::new(costs))
    }

    #[tokio::test]
    async fn summary_uses_stored_limit_and_only_the_callers_rows() {
        let budgets = Arc::new(MockBudgetRepository::default());
        let service = service(budgets.clone());
        service
            .update_budget_setting("u1", BudgetSettingUpdate { monthly_limit: 100.0 })
            .await
            .unwrap();

        let summary = service
            .get_spending_summary("u1", BudgetMonth::new(2024, 3).unwrap())
            .unwrap();
        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.total_spent, 55.0);
        assert_eq!(summary.recurring_costs, 10.0);
        assert_eq!(summary.budget_limit, 100.0);
        assert!(!summary.is_over_budget);
    }

    #[test]
    fn missing_setting_counts_as_zero_limit() {
        let service = service(Arc::new(MockBudgetRepository::default()));
        let summary = service
            .get_spending_summary("u1", BudgetMonth::new(2024, 3).unwrap())
            .unwrap();
        assert_eq!(summary.budget_limit, 0.0);
        assert_eq!(summary.percentage_used, 0.0);
        assert!(summary.is_over_budget);

        assert!(matches!(
            service.get_budget_setting("u1"),
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn negative_limit_is_rejected_before_storage() {
        let budgets = Arc::new(MockBudgetRepository::default());
        let service = service(budgets.clone());
        let result = service
            .update_budget_setting("u1", BudgetSettingUpdate { monthly_limit: -5.0 })
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(budgets.settings.read().unwrap().is_empty());
    }

    #[test]
    fn breakdown_covers_the_requested_month() {
        let service = service(Arc::new(MockBudgetRepository::default()));
        let result = service
            .get_spending_breakdown("u1", BudgetMonth::new(2024, 3).unwrap())
            .unwrap();
        assert_eq!(result.transaction_count, 2);
        assert_eq!(result.daily_spending.len(), 31);
        assert_eq!(result.daily_spending[30].amount, 5.0);
        assert_eq!(result.category_totals.len(), 2);
    }
}
