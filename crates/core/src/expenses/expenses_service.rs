use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;

use super::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::{Error, Result};

pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { repository }
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
        self.repository.get_expenses(user_id)
    }

    fn get_expenses_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        if start > end {
            return Err(Error::invalid_input(
                "start_date must be on or before end_date",
            ));
        }
        self.repository.get_expenses_in_range(user_id, start, end)
    }

    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        self.repository
            .get_expense(user_id, expense_id)?
            .ok_or_else(|| Error::NotFound("Expense".to_string()))
    }

    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        new_expense.validate()?;
        let expense = self
            .repository
            .insert_expense(user_id, new_expense.normalized())
            .await?;
        debug!("Created expense {} for user {}", expense.id, user_id);
        Ok(expense)
    }

    async fn update_expense(
        &self,
        user_id: &str,
        expense_id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense> {
        update.validate()?;
        let existing = self.get_expense(user_id, expense_id)?;
        self.repository
            .update_expense(update.apply_to(existing))
            .await
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()> {
        let deleted = self.repository.delete_expense(user_id, expense_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound("Expense".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::RwLock;

    #[derive(Default)]
    struct MockExpenseRepository {
        expenses: RwLock<Vec<Expense>>,
    }

    fn created_at() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[async_trait]
    impl ExpenseRepositoryTrait for MockExpenseRepository {
        fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
            Ok(self
                .expenses
                .read()
                .unwrap()
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

        fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Option<Expense>> {
            Ok(self
                .get_expenses(user_id)?
                .into_iter()
                .find(|e| e.id == expense_id))
        }

        async fn insert_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
            let mut expenses = self.expenses.write().unwrap();
            let expense = Expense {
                id: format!("expense-{}", expenses.len() + 1),
                user_id: user_id.to_string(),
                amount: new_expense.amount,
                category: new_expense.category,
                description: new_expense.description,
                date: new_expense.date,
                created_at: created_at(),
            };
            expenses.push(expense.clone());
            Ok(expense)
        }

        async fn update_expense(&self, expense: Expense) -> Result<Expense> {
            let mut expenses = self.expenses.write().unwrap();
            let slot = expenses
                .iter_mut()
                .find(|e| e.id == expense.id && e.user_id == expense.user_id)
                .ok_or_else(|| Error::NotFound("Expense".to_string()))?;
            *slot = expense.clone();
            Ok(expense)
        }

        async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize> {
            let mut expenses = self.expenses.write().unwrap();
            let before = expenses.len();
            expenses.retain(|e| !(e.id == expense_id && e.user_id == user_id));
            Ok(before - expenses.len())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn lunch() -> NewExpense {
        NewExpense {
            amount: 12.5,
            category: " Food ".to_string(),
            description: Some("   ".to_string()),
            date: date(2024, 3, 5),
        }
    }

    #[tokio::test]
    async fn create_trims_fields_and_drops_blank_description() {
        let service = ExpenseService::new(Arc::new(MockExpenseRepository::default()));
        let expense = service.create_expense("u1", lunch()).await.unwrap();
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.description, None);
        assert_eq!(expense.user_id, "u1");
    }

    #[tokio::test]
    async fn create_rejects_negative_amount() {
        let service = ExpenseService::new(Arc::new(MockExpenseRepository::default()));
        let mut input = lunch();
        input.amount = -1.0;
        let result = service.create_expense("u1", input).await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn update_merges_only_provided_fields() {
        let service = ExpenseService::new(Arc::new(MockExpenseRepository::default()));
        let created = service.create_expense("u1", lunch()).await.unwrap();

        let updated = service
            .update_expense(
                "u1",
                &created.id,
                ExpenseUpdate {
                    amount: Some(20.0),
                    description: Some("team lunch".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.amount, 20.0);
        assert_eq!(updated.category, "Food");
        assert_eq!(updated.description.as_deref(), Some("team lunch"));
        assert_eq!(updated.date, created.date);
    }

    #[tokio::test]
    async fn other_users_records_are_not_found() {
        let service = ExpenseService::new(Arc::new(MockExpenseRepository::default()));
        let created = service.create_expense("owner", lunch()).await.unwrap();

        assert_eq!(service.get_expense("owner", &created.id).unwrap(), created);
        assert!(matches!(
            service.get_expense("intruder", &created.id),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            service.get_expense("owner", "missing"),
            Err(Error::NotFound(_))
        ));

        let update = service
            .update_expense("intruder", &created.id, ExpenseUpdate::default())
            .await;
        assert!(matches!(update, Err(Error::NotFound(_))));

        let delete = service.delete_expense("intruder", &created.id).await;
        assert!(matches!(delete, Err(Error::NotFound(_))));

        assert_eq!(service.get_expenses("owner").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn range_requires_ordered_bounds() {
        let service = ExpenseService::new(Arc::new(MockExpenseRepository::default()));
        service.create_expense("u1", lunch()).await.unwrap();

        let hits = service
            .get_expenses_in_range("u1", date(2024, 3, 5), date(2024, 3, 5))
            .unwrap();
        assert_eq!(hits.len(), 1);

        let inverted = service.get_expenses_in_range("u1", date(2024, 4, 1), date(2024, 3, 1));
        assert!(matches!(inverted, Err(Error::Validation(_))));
    }
}
