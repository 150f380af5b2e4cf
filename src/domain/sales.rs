use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cents, peak_hours};

pub type SalesEntryId = Uuid;

/// One business day's sales summary.
/// `total_sales` and `profit` are derived when the entry is created and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesEntry {
    pub id: SalesEntryId,
    /// Business day this entry summarizes (at most one entry per day)
    pub date: NaiveDate,
    pub cash_sales: Cents,
    pub online_sales: Cents,
    /// Always `cash_sales + online_sales`
    pub total_sales: Cents,
    /// Snapshot of the day's expense total taken when the entry was recorded
    pub expenses: Cents,
    /// `total_sales - expenses` at recording time
    pub profit: Cents,
    pub peak_hours: Vec<String>,
    pub recorded_at: DateTime<Utc>,
}

impl SalesEntry {
    /// Create a new sales entry. Amounts must already be validated by the caller.
    pub fn new(date: NaiveDate, cash_sales: Cents, online_sales: Cents, expenses: Cents) -> Self {
        let total_sales = cash_sales + online_sales;
        Self {
            id: Uuid::new_v4(),
            date,
            cash_sales,
            online_sales,
            total_sales,
            expenses,
            profit: total_sales - expenses,
            peak_hours: peak_hours().iter().map(|h| h.to_string()).collect(),
            recorded_at: Utc::now(),
        }
    }
}
