use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Average, Cents, ExpenseCategory};

/// Headline numbers for the current business day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodaySummary {
    pub date: NaiveDate,
    /// Zero until today's sales have been recorded
    pub total_sales: Cents,
    pub total_expenses: Cents,
    pub profit: Cents,
    pub sales_recorded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub average_daily_sales: Average,
    pub average_daily_profit: Average,
    pub rising_costs: bool,
    pub peak_hours: [String; 2],
}

/// Spend for one category on a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: Cents,
    pub count: usize,
}
