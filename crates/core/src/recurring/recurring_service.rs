use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::recurring_model::{NewRecurringCost, RecurringCost, RecurringCostUpdate};
use super::recurring_traits::{RecurringCostRepositoryTrait, RecurringCostServiceTrait};
use crate::errors::{Error, Result};

pub struct RecurringCostService {
    repository: Arc<dyn RecurringCostRepositoryTrait>,
}

impl RecurringCostService {
    pub fn new(repository: Arc<dyn RecurringCostRepositoryTrait>) -> Self {
        RecurringCostService { repository }
    }
}

#[async_trait]
impl RecurringCostServiceTrait for RecurringCostService {
    fn get_recurring_costs(&self, user_id: &str) -> Result<Vec<RecurringCost>> {
        self.repository.get_recurring_costs(user_id)
    }

    fn get_recurring_cost(&self, user_id: &str, cost_id: &str) -> Result<RecurringCost> {
        self.repository
            .get_recurring_cost(user_id, cost_id)?
            .ok_or_else(|| Error::NotFound("Recurring cost".to_string()))
    }

    async fn create_recurring_cost(
        &self,
        user_id: &str,
        new_cost: NewRecurringCost,
    ) -> Result<RecurringCost> {
        new_cost.validate()?;
        let cost = self
            .repository
            .insert_recurring_cost(user_id, new_cost.normalized())
            .await?;
        debug!(
            "Created {} recurring cost {} for user {}",
            cost.frequency, cost.id, user_id
        );
        Ok(cost)
    }

    async fn update_recurring_cost(
        &self,
        user_id: &str,
        cost_id: &str,
        update: RecurringCostUpdate,
    ) -> Result<RecurringCost> {
        update.validate()?;
        let existing = self.get_recurring_cost(user_id, cost_id)?;
        self.repository
            .update_recurring_cost(update.apply_to(existing))
            .await
    }

    async fn delete_recurring_cost(&self, user_id: &str, cost_id: &str) -> Result<()> {
        match self.repository.delete_recurring_cost(user_id, cost_id).await? {
            0 => Err(Error::NotFound("Recurring cost".to_string())),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurring::Frequency;
    use chrono::NaiveDate;
    use std::sync::RwLock;

    #[derive(Default)]
    struct MockRecurringRepository {
        costs: RwLock<Vec<RecurringCost>>,
    }

    #[async_trait]
    impl RecurringCostRepositoryTrait for MockRecurringRepository {
        fn get_recurring_costs(&self, user_id: &str) -> Result<Vec<RecurringCost>> {
            Ok(self
                .costs
                .read()
                .unwrap()
                .iter()
                .filter(|c| c.user_id == user_id)
                .cloned()
                .collect())
        }

        fn get_recurring_cost(
            &self,
            user_id: &str,
            cost_id: &str,
        ) -> Result<Option<RecurringCost>> {
            Ok(self
                .get_recurring_costs(user_id)?
                .into_iter()
                .find(|c| c.id == cost_id))
        }

        async fn insert_recurring_cost(
            &self,
            user_id: &str,
            new_cost: NewRecurringCost,
        ) -> Result<RecurringCost> {
            let mut costs = self.costs.write().unwrap();
            let cost = RecurringCost {
                id: format!("cost-{}", costs.len() + 1),
                user_id: user_id.to_string(),
                name: new_cost.name,
                amount: new_cost.amount,
                frequency: new_cost.frequency,
                category: new_cost.category,
                start_date: new_cost.start_date,
                created_at: new_cost.start_date.and_hms_opt(0, 0, 0).unwrap(),
            };
            costs.push(cost.clone());
            Ok(cost)
        }

        async fn update_recurring_cost(&self, cost: RecurringCost) -> Result<RecurringCost> {
            let mut costs = self.costs.write().unwrap();
            if let Some(slot) = costs
                .iter_mut()
                .find(|c| c.id == cost.id && c.user_id == cost.user_id)
            {
                *slot = cost.clone();
            }
            Ok(cost)
        }

        async fn delete_recurring_cost(&self, user_id: &str, cost_id: &str) -> Result<usize> {
            let mut costs = self.costs.write().unwrap();
            let before = costs.len();
            costs.retain(|c| !(c.id == cost_id && c.user_id == user_id));
            Ok(before - costs.len())
        }
    }

    fn streaming() -> NewRecurringCost {
        NewRecurringCost {
            name: " Streaming ".to_string(),
            amount: 12.0,
            frequency: Frequency::Monthly,
            category: "Entertainment".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_and_switch_frequency() {
        let service = RecurringCostService::new(Arc::new(MockRecurringRepository::default()));
        let cost = service.create_recurring_cost("u1", streaming()).await.unwrap();
        assert_eq!(cost.name, "Streaming");

        let updated = service
            .update_recurring_cost(
                "u1",
                &cost.id,
                RecurringCostUpdate {
                    frequency: Some(Frequency::Annual),
                    amount: Some(120.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.frequency, Frequency::Annual);
        assert_eq!(updated.amount, 120.0);
        assert_eq!(updated.name, "Streaming");
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let service = RecurringCostService::new(Arc::new(MockRecurringRepository::default()));
        let mut input = streaming();
        input.name = "  ".to_string();
        let result = service.create_recurring_cost("u1", input).await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn foreign_cost_is_not_found() {
        let service = RecurringCostService::new(Arc::new(MockRecurringRepository::default()));
        let cost = service.create_recurring_cost("owner", streaming()).await.unwrap();

        assert_eq!(service.get_recurring_cost("owner", &cost.id).unwrap().name, "Streaming");
        match service.get_recurring_cost("intruder", &cost.id) {
            Err(err) => assert_eq!(err.to_string(), "Recurring cost not found"),
            Ok(other) => panic!("unexpected cost: {other:?}"),
        }

        let result = service
            .update_recurring_cost("intruder", &cost.id, RecurringCostUpdate::default())
            .await;
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(matches!(
            service.delete_recurring_cost("intruder", &cost.id).await,
            Err(Error::NotFound(_))
        ));
        service.delete_recurring_cost("owner", &cost.id).await.unwrap();
        assert!(service.get_recurring_costs("owner").unwrap().is_empty());
    }
}
