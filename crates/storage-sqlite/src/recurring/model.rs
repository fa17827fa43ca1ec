//! Database models for recurring costs.

use budgify_core::recurring::{Frequency, RecurringCost};
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::errors::StorageError;

/// `frequency` is stored as its lowercase name and guarded by a CHECK constraint.
#[derive(Insertable, Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::recurring_costs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RecurringCostDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: f64,
    pub frequency: String,
    pub category: String,
    pub start_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl TryFrom<RecurringCostDB> for RecurringCost {
    type Error = StorageError;

    fn try_from(db: RecurringCostDB) -> Result<Self, Self::Error> {
        let frequency: Frequency = db.frequency.parse().map_err(|_| {
            StorageError::InvalidData(format!(
                "recurring cost {} has unknown frequency '{}'",
                db.id, db.frequency
            ))
        })?;
        Ok(RecurringCost {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            amount: db.amount,
            frequency,
            category: db.category,
            start_date: db.start_date,
            created_at: db.created_at,
        })
    }
}

impl From<RecurringCost> for RecurringCostDB {
    fn from(domain: RecurringCost) -> Self {
        RecurringCostDB {
            id: domain.id,
            user_id: domain.user_id,
            name: domain.name,
            amount: domain.amount,
            frequency: domain.frequency.as_str().to_string(),
            category: domain.category,
            start_date: domain.start_date,
            created_at: domain.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(frequency: &str) -> RecurringCostDB {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        RecurringCostDB {
            id: "r1".to_string(),
            user_id: "u1".to_string(),
            name: "Gym".to_string(),
            amount: 30.0,
            frequency: frequency.to_string(),
            category: "Health".to_string(),
            start_date: start,
            created_at: start.and_hms_opt(0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn known_frequency_converts() {
        let cost = RecurringCost::try_from(row("annual")).unwrap();
        assert_eq!(cost.frequency, Frequency::Annual);
        assert_eq!(RecurringCostDB::from(cost).frequency, "annual");
    }

    #[test]
    fn unknown_frequency_is_invalid_data() {
        let err = RecurringCost::try_from(row("weekly")).unwrap_err();
        assert!(matches!(err, StorageError::InvalidData(_)));
    }
}
