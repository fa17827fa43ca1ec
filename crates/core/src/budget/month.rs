use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use crate::errors::{Error, Result};

/// A calendar month, `month` on the 1..=12 scale. Only built through [`BudgetMonth::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BudgetMonth {
    year: i32,
    month: u32,
}

impl BudgetMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_input("month must be between 1 and 12"));
        }
        // Rejects years chrono cannot represent.
        NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| Error::invalid_input(format!("year {year} is out of range")))?;
        Ok(BudgetMonth { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        let first = self.first_day();
        first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Number of days in the month.
    pub fn days(&self) -> u32 {
        self.last_day().day()
    }

    /// Compares calendar components, not a day-count window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for BudgetMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
