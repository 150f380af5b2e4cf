use chrono::NaiveDate;

use super::{
    Cents, ExpenseCategory, ExpenseEntry, SalesEntry, ValidationError, validate_expense,
    validate_sales,
};

/// In-memory store for one session's sales and expense entries.
///
/// Both collections are append-only and kept most-recent-first.
/// Entries are never edited or removed once recorded.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    sales: Vec<SalesEntry>,
    expenses: Vec<ExpenseEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the sales summary for `date`.
    ///
    /// The day's expenses are snapshotted into the entry; expenses recorded later
    /// for the same day do not change it. A second entry for the same day is rejected.
    pub fn add_sales_entry(
        &mut self,
        date: NaiveDate,
        cash_sales: Cents,
        online_sales: Cents,
    ) -> Result<SalesEntry, LedgerError> {
        validate_sales(cash_sales, online_sales)?;
        if self.sales_on(date).is_some() {
            return Err(LedgerError::SalesAlreadyRecorded(date));
        }

        let expenses = self.expense_total_on(date);
        let entry = SalesEntry::new(date, cash_sales, online_sales, expenses);
        self.sales.insert(0, entry.clone());
        Ok(entry)
    }

    /// Record a single expense for `date`.
    pub fn add_expense_entry(
        &mut self,
        date: NaiveDate,
        category: ExpenseCategory,
        item: &str,
        amount: Cents,
        description: Option<String>,
    ) -> Result<ExpenseEntry, LedgerError> {
        validate_expense(item, amount)?;

        let mut entry = ExpenseEntry::new(date, category, item.trim(), amount);
        if let Some(desc) = description.filter(|d| !d.trim().is_empty()) {
            entry = entry.with_description(desc);
        }
        self.expenses.insert(0, entry.clone());
        Ok(entry)
    }

    /// All sales entries, most recent first.
    pub fn list_sales(&self) -> &[SalesEntry] {
        &self.sales
    }

    /// All expense entries, most recent first.
    pub fn list_expenses(&self) -> &[ExpenseEntry] {
        &self.expenses
    }

    pub fn expenses_on(&self, date: NaiveDate) -> impl Iterator<Item = &ExpenseEntry> + '_ {
        self.expenses.iter().filter(move |e| e.date == date)
    }

    pub fn sales_on(&self, date: NaiveDate) -> Option<&SalesEntry> {
        self.sales.iter().find(|s| s.date == date)
    }

    /// Saturates rather than overflowing on absurdly long days.
    pub fn expense_total_on(&self, date: NaiveDate) -> Cents {
        self.expenses_on(date)
            .fold(0, |total: Cents, e| total.saturating_add(e.amount))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    Validation(ValidationError),
    SalesAlreadyRecorded(NaiveDate),
}

impl From<ValidationError> for LedgerError {
    fn from(err: ValidationError) -> Self {
        LedgerError::Validation(err)
    }
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::Validation(err) => write!(f, "{}", err),
            LedgerError::SalesAlreadyRecorded(date) => {
                write!(f, "Sales for {} have already been recorded", date)
            }
        }
    }
}

impl std::error::Error for LedgerError {}
