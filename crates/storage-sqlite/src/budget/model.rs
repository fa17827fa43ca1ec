use budgify_core::budget::BudgetSetting;
use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(
    Insertable, Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::budget_settings)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetSettingDB {
    pub user_id: String,
    pub monthly_limit: f64,
    pub updated_at: NaiveDateTime,
}

impl From<BudgetSettingDB> for BudgetSetting {
    fn from(db: BudgetSettingDB) -> Self {
        BudgetSetting {
            user_id: db.user_id,
            monthly_limit: db.monthly_limit,
            updated_at: db.updated_at,
        }
    }
}
