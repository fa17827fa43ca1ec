/// Monthly limit assigned to every newly registered user ("no limit tracking")
pub const DEFAULT_MONTHLY_LIMIT: f64 = 0.0;

/// Divisor used to spread an annual recurring cost across months
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Maximum accepted length for free-text labels (category, name)
pub const MAX_LABEL_LENGTH: usize = 100;

/// Maximum accepted length for an expense description
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Largest accepted currency amount; keeps every monthly total finite
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;
