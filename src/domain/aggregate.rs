use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Cents, Ledger, SalesEntry};

/// Mean over the recorded sales days.
/// `has_data` is false when there are no sales entries; `value` is then 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Average {
    pub value: Cents,
    pub has_data: bool,
}

impl Average {
    pub const NO_DATA: Average = Average {
        value: 0,
        has_data: false,
    };

    fn of(values: impl Iterator<Item = Cents>) -> Self {
        // Accumulate wide: the mean of i64 values always fits back into i64
        let (sum, count) = values.fold((0i128, 0i128), |(sum, count), v| {
            (sum + i128::from(v), count + 1)
        });
        if count == 0 {
            return Self::NO_DATA;
        }
        Self {
            value: (sum / count) as Cents,
            has_data: true,
        }
    }
}

pub fn today_expense_total(ledger: &Ledger, today: NaiveDate) -> Cents {
    ledger.expense_total_on(today)
}

pub fn today_sales_entry(ledger: &Ledger, today: NaiveDate) -> Option<&SalesEntry> {
    ledger.sales_on(today)
}

pub fn average_daily_sales(ledger: &Ledger) -> Average {
    Average::of(ledger.list_sales().iter().map(|s| s.total_sales))
}

/// Averages the profit stored on each entry (the snapshot taken at recording time).
pub fn average_daily_profit(ledger: &Ledger) -> Average {
    Average::of(ledger.list_sales().iter().map(|s| s.profit))
}

/// Live profit for today: today's sales minus every expense recorded today so far.
/// Zero when today's sales have not been recorded yet.
pub fn today_profit(ledger: &Ledger, today: NaiveDate) -> Cents {
    match today_sales_entry(ledger, today) {
        Some(entry) => entry.total_sales - today_expense_total(ledger, today),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpenseCategory;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_averages_without_data() {
        let ledger = Ledger::new();
        assert_eq!(average_daily_sales(&ledger), Average::NO_DATA);
        assert_eq!(average_daily_profit(&ledger), Average::NO_DATA);
    }

    #[test]
    fn test_average_daily_sales() {
        let mut ledger = Ledger::new();
        ledger
            .add_sales_entry(today().pred_opt().unwrap(), 920000, 280000)
            .unwrap();
        ledger.add_sales_entry(today(), 850000, 320000).unwrap();

        let avg = average_daily_sales(&ledger);
        assert!(avg.has_data);
        assert_eq!(avg.value, 1185000);
    }

    #[test]
    fn test_average_of_extreme_values() {
        let avg = Average::of([i64::MAX, i64::MAX, i64::MAX].into_iter());
        assert_eq!(avg.value, i64::MAX);

        let avg = Average::of([i64::MIN, i64::MAX].into_iter());
        assert_eq!(avg.value, 0);
    }

    #[test]
    fn test_average_truncates() {
        let mut ledger = Ledger::new();
        ledger.add_sales_entry(today(), 1, 0).unwrap();
        ledger
            .add_sales_entry(today().pred_opt().unwrap(), 0, 0)
            .unwrap();

        assert_eq!(average_daily_sales(&ledger).value, 0);
    }

    #[test]
    fn test_average_daily_profit_uses_snapshots() {
        let mut ledger = Ledger::new();
        ledger
            .add_expense_entry(today(), ExpenseCategory::Rent, "Rent", 200000, None)
            .unwrap();
        ledger.add_sales_entry(today(), 500000, 0).unwrap();
        ledger
            .add_sales_entry(today().pred_opt().unwrap(), 100000, 0)
            .unwrap();

        // (300000 + 100000) / 2
        assert_eq!(average_daily_profit(&ledger).value, 200000);
    }

    #[test]
    fn test_today_profit() {
        let mut ledger = Ledger::new();
        assert_eq!(today_profit(&ledger, today()), 0);

        ledger
            .add_expense_entry(today(), ExpenseCategory::Other, "Gas", 95000, None)
            .unwrap();
        // No sales yet, so no profit even though money went out
        assert_eq!(today_profit(&ledger, today()), 0);

        ledger.add_sales_entry(today(), 500000, 0).unwrap();
        ledger
            .add_expense_entry(today(), ExpenseCategory::Other, "Ice", 5000, None)
            .unwrap();

        assert_eq!(today_expense_total(&ledger, today()), 100000);
        assert_eq!(today_profit(&ledger, today()), 400000);
    }
}
