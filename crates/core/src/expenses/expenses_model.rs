//! Expense domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_DESCRIPTION_LENGTH;
use crate::errors::{Error, Result};
use crate::validation::{ensure_amount, ensure_label};

/// Domain model representing an expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    /// Day the expense was incurred, not when the record was created.
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn validate(&self) -> Result<()> {
        ensure_amount("amount", self.amount)?;
        ensure_label("category", &self.category)?;
        if let Some(description) = &self.description {
            ensure_description(description)?;
        }
        Ok(())
    }

    /// Trims labels and turns a blank description into `None`.
    pub fn normalized(self) -> Self {
        NewExpense {
            amount: self.amount,
            category: self.category.trim().to_string(),
            description: clean_description(self.description),
            date: self.date,
        }
    }
}

/// Partial update for an expense. Omitted fields keep their stored value;
/// an empty description clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ExpenseUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(amount) = self.amount {
            ensure_amount("amount", amount)?;
        }
        if let Some(category) = &self.category {
            ensure_label("category", category)?;
        }
        if let Some(description) = &self.description {
            ensure_description(description)?;
        }
        Ok(())
    }

    pub fn apply_to(self, mut expense: Expense) -> Expense {
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(category) = self.category {
            expense.category = category.trim().to_string();
        }
        if self.description.is_some() {
            expense.description = clean_description(self.description);
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
        expense
    }
}

fn ensure_description(description: &str) -> Result<()> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(Error::invalid_input(format!(
            "description must be at most {} characters",
            MAX_DESCRIPTION_LENGTH
        )));
    }
    Ok(())
}

fn clean_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}
