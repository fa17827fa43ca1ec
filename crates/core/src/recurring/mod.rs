//! Recurring costs module - fixed monthly or annual charges active from a start date.

mod recurring_model;
mod recurring_service;
mod recurring_traits;

pub use recurring_model::{Frequency, NewRecurringCost, RecurringCost, RecurringCostUpdate};
pub use recurring_service::RecurringCostService;
pub use recurring_traits::{RecurringCostRepositoryTrait, RecurringCostServiceTrait};
