use std::sync::Arc;

use async_trait::async_trait;
use budgify_core::expenses::{Expense, ExpenseRepositoryTrait, NewExpense};
use budgify_core::Result;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use super::model::ExpenseDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::expenses;

pub struct ExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ExpenseRepository { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .order((expenses::date.desc(), expenses::created_at.desc()))
            .select(ExpenseDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn get_expenses_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::date.between(start, end))
            .order((expenses::date.desc(), expenses::created_at.desc()))
            .select(ExpenseDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Option<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let row = expenses::table
            .filter(expenses::id.eq(expense_id))
            .filter(expenses::user_id.eq(user_id))
            .select(ExpenseDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Expense::from))
    }

    async fn insert_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let row = ExpenseDB {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            amount: new_expense.amount,
            category: new_expense.category,
            description: new_expense.description,
            date: new_expense.date,
            created_at: Utc::now().naive_utc(),
        };

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let created = diesel::insert_into(expenses::table)
                    .values(&row)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(created))
            })
            .await
    }

    async fn update_expense(&self, expense: Expense) -> Result<Expense> {
        let row = ExpenseDB::from(expense);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let updated = diesel::update(
                    expenses::table
                        .filter(expenses::id.eq(&row.id))
                        .filter(expenses::user_id.eq(&row.user_id)),
                )
                .set((
                    expenses::amount.eq(row.amount),
                    expenses::category.eq(&row.category),
                    expenses::description.eq(&row.description),
                    expenses::date.eq(row.date),
                ))
                .returning(ExpenseDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(Expense::from(updated))
            })
            .await
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let expense_id = expense_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    expenses::table
                        .filter(expenses::id.eq(expense_id))
                        .filter(expenses::user_id.eq(user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
