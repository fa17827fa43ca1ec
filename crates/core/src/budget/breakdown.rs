//! Per-category and per-day spending of one month.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::month::BudgetMonth;
use crate::expenses::Expense;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailySpending {
    pub day: u32,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingBreakdown {
    pub year: i32,
    pub month: u32,
    /// Ordered by category name.
    pub category_totals: BTreeMap<String, f64>,
    /// One row per calendar day, including days without spending.
    pub daily_spending: Vec<DailySpending>,
    pub transaction_count: usize,
}

pub fn breakdown(expenses: &[Expense], month: BudgetMonth) -> SpendingBreakdown {
    let mut category_totals: BTreeMap<String, f64> = BTreeMap::new();
    let mut daily_spending: Vec<DailySpending> = (1..=month.days())
        .map(|day| DailySpending { day, amount: 0.0 })
        .collect();
    let mut transaction_count = 0;

    for expense in expenses.iter().filter(|e| month.contains(e.date)) {
        *category_totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        if let Some(slot) = daily_spending.get_mut(expense.date.day0() as usize) {
            slot.amount += expense.amount;
        }
        transaction_count += 1;
    }

    SpendingBreakdown {
        year: month.year(),
        month: month.month(),
        category_totals,
        daily_spending,
        transaction_count,
    }
}
