//! Recurring cost domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::validation::{ensure_amount, ensure_label};

/// How often a recurring cost is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
    Annual,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Annual => "annual",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = Error;

    /// Only the exact lowercase spellings are accepted.
    fn from_str(value: &str) -> Result<Self> {
        match value {
            "monthly" => Ok(Frequency::Monthly),
            "annual" => Ok(Frequency::Annual),
            _ => Err(Error::invalid_input("Frequency must be monthly or annual")),
        }
    }
}

/// Domain model representing a recurring cost
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringCost {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
    pub category: String,
    /// First day on which the cost counts towards a month.
    pub start_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a recurring cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecurringCost {
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
    pub category: String,
    pub start_date: NaiveDate,
}

impl NewRecurringCost {
    pub fn validate(&self) -> Result<()> {
        ensure_label("name", &self.name)?;
        ensure_amount("amount", self.amount)?;
        ensure_label("category", &self.category)?;
        Ok(())
    }

    pub fn normalized(self) -> Self {
        NewRecurringCost {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            ..self
        }
    }
}

/// Partial update for a recurring cost. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecurringCostUpdate {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub frequency: Option<Frequency>,
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
}

impl RecurringCostUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            ensure_label("name", name)?;
        }
        if let Some(amount) = self.amount {
            ensure_amount("amount", amount)?;
        }
        if let Some(category) = &self.category {
            ensure_label("category", category)?;
        }
        Ok(())
    }

    pub fn apply_to(self, mut cost: RecurringCost) -> RecurringCost {
        if let Some(name) = self.name {
            cost.name = name.trim().to_string();
        }
        if let Some(amount) = self.amount {
            cost.amount = amount;
        }
        if let Some(frequency) = self.frequency {
            cost.frequency = frequency;
        }
        if let Some(category) = self.category {
            cost.category = category.trim().to_string();
        }
        if let Some(start_date) = self.start_date {
            cost.start_date = start_date;
        }
        cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_parses_exact_values_only() {
        assert_eq!("monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!("annual".parse::<Frequency>().unwrap(), Frequency::Annual);
        for bad in ["Monthly", "yearly", "weekly", "", " annual"] {
            assert!(
                matches!(bad.parse::<Frequency>(), Err(Error::Validation(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn frequency_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Frequency::Annual).unwrap(),
            "\"annual\""
        );
        assert_eq!(Frequency::Monthly.to_string(), "monthly");
    }
}
