// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use bahi::application::{AddExpenseCommand, AddSalesCommand, LedgerService};
use bahi::domain::{Cents, ExpenseCategory, FixedClock};
use chrono::NaiveDate;

/// The business day every test service is pinned to
pub fn test_day() -> NaiveDate {
    parse_date("2024-03-09")
}

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Helper to create a test service whose "today" is `test_day()`
pub fn test_service() -> LedgerService {
    LedgerService::new(FixedClock(test_day()))
}

pub async fn add_expense(
    service: &LedgerService,
    category: ExpenseCategory,
    item: &str,
    amount: Cents,
) -> Result<()> {
    let cmd = AddExpenseCommand::new(category, item, amount, None)?;
    service.record_expense(cmd).await?;
    Ok(())
}

pub async fn add_sales(service: &LedgerService, cash: Cents, online: Cents) -> Result<()> {
    service.record_sales(AddSalesCommand::new(cash, online)?).await?;
    Ok(())
}

/// Test fixture: the four expenses from a typical day at the counter
pub struct SampleDay;

impl SampleDay {
    /// Paneer 1200, Vegetables 800, Gas Cylinder 950, Spices 550 (3500 in total)
    pub async fn record_expenses(service: &LedgerService) -> Result<()> {
        add_expense(service, ExpenseCategory::Ingredients, "Paneer", 120000).await?;
        add_expense(service, ExpenseCategory::Ingredients, "Vegetables", 80000).await?;
        add_expense(service, ExpenseCategory::Other, "Gas Cylinder", 95000).await?;
        add_expense(service, ExpenseCategory::Ingredients, "Spices", 55000).await?;
        Ok(())
    }
}
