//! Monthly spending summary over expenses and prorated recurring costs.

use serde::{Deserialize, Serialize};

use super::month::BudgetMonth;
use crate::constants::MONTHS_PER_YEAR;
use crate::expenses::Expense;
use crate::recurring::{Frequency, RecurringCost};

/// Derived view of one user's month. Computed on every request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingSummary {
    pub total_spent: f64,
    /// Monthly equivalent of every active recurring cost.
    pub recurring_costs: f64,
    pub total_with_recurring: f64,
    pub budget_limit: f64,
    /// May be negative when the month is over budget.
    pub remaining: f64,
    pub percentage_used: f64,
    pub transaction_count: usize,
    pub is_over_budget: bool,
}

/// Sums of the recurring costs active in a month, split by frequency.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecurringTotals {
    pub monthly: f64,
    pub annual: f64,
}

impl RecurringTotals {
    /// Annual costs are spread flat over every month, not charged in their renewal month.
    pub fn monthly_equivalent(&self) -> f64 {
        self.monthly + self.annual / MONTHS_PER_YEAR
    }
}

/// A cost is active once its start date is on or before the first day of the month.
fn is_active(cost: &RecurringCost, month: BudgetMonth) -> bool {
    cost.start_date <= month.first_day()
}

pub fn recurring_totals(costs: &[RecurringCost], month: BudgetMonth) -> RecurringTotals {
    costs
        .iter()
        .filter(|cost| is_active(cost, month))
        .fold(RecurringTotals::default(), |mut totals, cost| {
            match cost.frequency {
                Frequency::Monthly => totals.monthly += cost.amount,
                Frequency::Annual => totals.annual += cost.amount,
            }
            totals
        })
}

/// Builds the summary for `month`. Inputs must already be scoped to one user;
/// expenses outside the month are ignored.
pub fn summarize(
    expenses: &[Expense],
    recurring_costs: &[RecurringCost],
    budget_limit: f64,
    month: BudgetMonth,
) -> SpendingSummary {
    let (total_spent, transaction_count) = expenses
        .iter()
        .filter(|expense| month.contains(expense.date))
        .fold((0.0, 0usize), |(sum, count), expense| {
            (sum + expense.amount, count + 1)
        });

    let recurring = recurring_totals(recurring_costs, month).monthly_equivalent();
    let total_with_recurring = total_spent + recurring;

    let percentage_used = if budget_limit > 0.0 {
        (total_with_recurring / budget_limit) * 100.0
    } else {
        0.0
    };

    SpendingSummary {
        total_spent,
        recurring_costs: recurring,
        total_with_recurring,
        budget_limit,
        remaining: budget_limit - total_with_recurring,
        percentage_used,
        transaction_count,
        is_over_budget: total_with_recurring > budget_limit,
    }
}
