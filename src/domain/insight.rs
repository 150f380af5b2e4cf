use chrono::NaiveDate;

use super::{ExpenseCategory, Ledger};

/// Busiest trading windows. Entries carry no time of day, so this is a fixed pair.
pub const PEAK_HOURS: [&str; 2] = ["12:00-14:00", "19:00-21:00"];

pub fn peak_hours() -> [&'static str; 2] {
    PEAK_HOURS
}

/// True when any ingredients expense was recorded today.
pub fn rising_costs(ledger: &Ledger, today: NaiveDate) -> bool {
    ledger
        .expenses_on(today)
        .any(|e| e.category == ExpenseCategory::Ingredients)
}
