use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::validation::ensure_amount;

/// Monthly spending limit of one user. A limit of 0 means no limit is tracked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetSetting {
    pub user_id: String,
    pub monthly_limit: f64,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSettingUpdate {
    pub monthly_limit: f64,
}

impl BudgetSettingUpdate {
    /// Negative or oversized limits never reach the aggregator.
    pub fn validate(&self) -> Result<()> {
        ensure_amount("monthly_limit", self.monthly_limit)
    }
}
