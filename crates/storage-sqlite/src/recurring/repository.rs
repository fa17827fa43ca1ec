use std::sync::Arc;

use async_trait::async_trait;
use budgify_core::recurring::{NewRecurringCost, RecurringCost, RecurringCostRepositoryTrait};
use budgify_core::Result;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use super::model::RecurringCostDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::recurring_costs;

pub struct RecurringCostRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RecurringCostRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RecurringCostRepository { pool, writer }
    }
}

fn to_domain(rows: Vec<RecurringCostDB>) -> Result<Vec<RecurringCost>> {
    rows.into_iter()
        .map(|row| RecurringCost::try_from(row).map_err(Into::into))
        .collect()
}

#[async_trait]
impl RecurringCostRepositoryTrait for RecurringCostRepository {
    fn get_recurring_costs(&self, user_id: &str) -> Result<Vec<RecurringCost>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = recurring_costs::table
            .filter(recurring_costs::user_id.eq(user_id))
            .order(recurring_costs::created_at.desc())
            .select(RecurringCostDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        to_domain(rows)
    }

    fn get_recurring_cost(&self, user_id: &str, cost_id: &str) -> Result<Option<RecurringCost>> {
        let mut conn = get_connection(&self.pool)?;
        let row = recurring_costs::table
            .filter(recurring_costs::id.eq(cost_id))
            .filter(recurring_costs::user_id.eq(user_id))
            .select(RecurringCostDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(RecurringCost::try_from)
            .transpose()
            .map_err(Into::into)
    }

    async fn insert_recurring_cost(
        &self,
        user_id: &str,
        new_cost: NewRecurringCost,
    ) -> Result<RecurringCost> {
        let row = RecurringCostDB {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new_cost.name,
            amount: new_cost.amount,
            frequency: new_cost.frequency.as_str().to_string(),
            category: new_cost.category,
            start_date: new_cost.start_date,
            created_at: Utc::now().naive_utc(),
        };

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<RecurringCost> {
                let created = diesel::insert_into(recurring_costs::table)
                    .values(&row)
                    .returning(RecurringCostDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(RecurringCost::try_from(created)?)
            })
            .await
    }

    async fn update_recurring_cost(&self, cost: RecurringCost) -> Result<RecurringCost> {
        let row = RecurringCostDB::from(cost);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<RecurringCost> {
                let updated = diesel::update(
                    recurring_costs::table
                        .filter(recurring_costs::id.eq(&row.id))
                        .filter(recurring_costs::user_id.eq(&row.user_id)),
                )
                .set((
                    recurring_costs::name.eq(&row.name),
                    recurring_costs::amount.eq(row.amount),
                    recurring_costs::frequency.eq(&row.frequency),
                    recurring_costs::category.eq(&row.category),
                    recurring_costs::start_date.eq(row.start_date),
                ))
                .returning(RecurringCostDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(RecurringCost::try_from(updated)?)
            })
            .await
    }

    async fn delete_recurring_cost(&self, user_id: &str, cost_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let cost_id = cost_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    recurring_costs::table
                        .filter(recurring_costs::id.eq(cost_id))
                        .filter(recurring_costs::user_id.eq(user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
