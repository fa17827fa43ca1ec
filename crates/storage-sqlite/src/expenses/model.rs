//! Database models for expenses.

use budgify_core::expenses::Expense;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

#[derive(Insertable, Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: String,
    pub user_id: String,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Expense {
            id: db.id,
            user_id: db.user_id,
            amount: db.amount,
            category: db.category,
            description: db.description,
            date: db.date,
            created_at: db.created_at,
        }
    }
}

impl From<Expense> for ExpenseDB {
    fn from(domain: Expense) -> Self {
        ExpenseDB {
            id: domain.id,
            user_id: domain.user_id,
            amount: domain.amount,
            category: domain.category,
            description: domain.description,
            date: domain.date,
            created_at: domain.created_at,
        }
    }
}
