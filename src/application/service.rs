use chrono::{Days, NaiveDate};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::{
    Clock, ExpenseCategory, ExpenseEntry, Ledger, SalesEntry, SystemClock, average_daily_profit,
    average_daily_sales, peak_hours, rising_costs, today_expense_total, today_profit,
    today_sales_entry,
};

use super::{AddExpenseCommand, AddSalesCommand, AppError, CategoryTotal, Insights, TodaySummary};

/// Application service providing high-level operations for the ledger.
/// This is the primary interface for any client (CLI, API, TUI, etc.).
///
/// The ledger sits behind a single lock so that recording a sales entry
/// (which reads the day's expense total) never interleaves with an expense insert.
pub struct LedgerService {
    ledger: Mutex<Ledger>,
    clock: Box<dyn Clock>,
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new(SystemClock::default())
    }
}

impl LedgerService {
    /// Create a new service with an empty ledger.
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self::with_ledger(Ledger::new(), clock)
    }

    pub fn with_ledger(ledger: Ledger, clock: impl Clock + 'static) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            clock: Box::new(clock),
        }
    }

    /// The business day new entries are recorded against.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // ========================
    // Commands
    // ========================

    /// Record today's sales.
    pub async fn record_sales(&self, cmd: AddSalesCommand) -> Result<SalesEntry, AppError> {
        let today = self.today();
        let mut ledger = self.ledger.lock().await;

        match ledger.add_sales_entry(today, cmd.cash_sales, cmd.online_sales) {
            Ok(entry) => {
                info!(
                    date = %entry.date,
                    total_sales = entry.total_sales,
                    expenses = entry.expenses,
                    profit = entry.profit,
                    "sales recorded"
                );
                Ok(entry)
            }
            Err(err) => {
                warn!(date = %today, %err, "sales rejected");
                Err(err.into())
            }
        }
    }

    /// Record an expense against today.
    pub async fn record_expense(&self, cmd: AddExpenseCommand) -> Result<ExpenseEntry, AppError> {
        let today = self.today();
        let mut ledger = self.ledger.lock().await;

        match ledger.add_expense_entry(
            today,
            cmd.category,
            &cmd.item,
            cmd.amount,
            cmd.description,
        ) {
            Ok(entry) => {
                info!(
                    date = %entry.date,
                    category = %entry.category,
                    item = %entry.item,
                    amount = entry.amount,
                    "expense recorded"
                );
                Ok(entry)
            }
            Err(err) => {
                warn!(date = %today, %err, "expense rejected");
                Err(err.into())
            }
        }
    }

    /// Load the sample day shown on a fresh dashboard: four expenses today,
    /// plus yesterday's sales.
    ///
    /// Today's sales are left out: only one sales entry is allowed per day, so a
    /// seeded one would block the user from recording their real takings.
    pub async fn seed_demo(&self) -> Result<(), AppError> {
        let today = self.today();
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        let mut ledger = self.ledger.lock().await;

        ledger.add_sales_entry(yesterday, 920000, 280000)?;

        let samples = [
            (ExpenseCategory::Ingredients, "Spices", 55000, "Various spices"),
            (ExpenseCategory::Other, "Gas Cylinder", 95000, "LPG refill"),
            (ExpenseCategory::Ingredients, "Vegetables", 80000, "Mixed vegetables"),
            (ExpenseCategory::Ingredients, "Paneer", 120000, "20 kg fresh paneer"),
        ];
        for (category, item, amount, description) in samples {
            ledger.add_expense_entry(today, category, item, amount, Some(description.into()))?;
        }

        info!(%today, "demo data loaded");
        Ok(())
    }

    // ========================
    // Queries
    // ========================

    /// All sales entries, most recent first.
    pub async fn list_sales(&self) -> Vec<SalesEntry> {
        self.ledger.lock().await.list_sales().to_vec()
    }

    /// All expense entries, most recent first.
    pub async fn list_expenses(&self) -> Vec<ExpenseEntry> {
        self.ledger.lock().await.list_expenses().to_vec()
    }

    pub async fn expenses_on(&self, date: NaiveDate) -> Vec<ExpenseEntry> {
        self.ledger.lock().await.expenses_on(date).cloned().collect()
    }

    pub async fn today_sales(&self) -> Option<SalesEntry> {
        let today = self.today();
        today_sales_entry(&*self.ledger.lock().await, today).cloned()
    }

    pub async fn today_summary(&self) -> TodaySummary {
        let today = self.today();
        let ledger = self.ledger.lock().await;
        let sales = today_sales_entry(&ledger, today);

        TodaySummary {
            date: today,
            total_sales: sales.map(|s| s.total_sales).unwrap_or(0),
            total_expenses: today_expense_total(&ledger, today),
            profit: today_profit(&ledger, today),
            sales_recorded: sales.is_some(),
        }
    }

    pub async fn insights(&self) -> Insights {
        let today = self.today();
        let ledger = self.ledger.lock().await;

        Insights {
            average_daily_sales: average_daily_sales(&ledger),
            average_daily_profit: average_daily_profit(&ledger),
            rising_costs: rising_costs(&ledger, today),
            peak_hours: peak_hours().map(String::from),
        }
    }

    /// Spend per category on `date`, largest first.
    pub async fn expense_breakdown(&self, date: NaiveDate) -> Vec<CategoryTotal> {
        let ledger = self.ledger.lock().await;
        let mut totals: HashMap<ExpenseCategory, CategoryTotal> = HashMap::new();

        for expense in ledger.expenses_on(date) {
            let entry = totals
                .entry(expense.category)
                .or_insert_with(|| CategoryTotal {
                    category: expense.category,
                    total: 0,
                    count: 0,
                });
            entry.total = entry.total.saturating_add(expense.amount);
            entry.count += 1;
        }

        let mut totals: Vec<_> = totals.into_values().collect();
        totals.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.as_str().cmp(b.category.as_str()))
        });
        totals
    }

    /// Copy of the whole ledger, for export.
    pub async fn snapshot(&self) -> Ledger {
        self.ledger.lock().await.clone()
    }
}
