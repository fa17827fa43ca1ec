use std::sync::Arc;

use async_trait::async_trait;
use budgify_core::budget::{BudgetRepositoryTrait, BudgetSetting};
use budgify_core::Result;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use super::model::BudgetSettingDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::budget_settings;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn get_budget_setting(&self, user_id: &str) -> Result<Option<BudgetSetting>> {
        let mut conn = get_connection(&self.pool)?;
        let row = budget_settings::table
            .find(user_id)
            .select(BudgetSettingDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(BudgetSetting::from))
    }

    async fn upsert_budget_setting(
        &self,
        user_id: &str,
        monthly_limit: f64,
    ) -> Result<BudgetSetting> {
        let row = BudgetSettingDB {
            user_id: user_id.to_string(),
            monthly_limit,
            updated_at: Utc::now().naive_utc(),
        };

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<BudgetSetting> {
                let stored = diesel::insert_into(budget_settings::table)
                    .values(&row)
                    .on_conflict(budget_settings::user_id)
                    .do_update()
                    .set(&row)
                    .returning(BudgetSettingDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(BudgetSetting::from(stored))
            })
            .await
    }
}
