use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::LedgerService;
use crate::domain::{ExpenseEntry, SalesEntry};

/// Session snapshot for full export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub sales: Vec<SalesEntry>,
    pub expenses: Vec<ExpenseEntry>,
}

/// Exporter for converting ledger data to various formats
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export sales entries to CSV format
    pub async fn export_sales_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let sales = self.service.list_sales().await;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "id",
            "date",
            "cash_sales",
            "online_sales",
            "total_sales",
            "expenses",
            "profit",
            "peak_hours",
        ])?;

        for entry in &sales {
            csv_writer.write_record([
                entry.id.to_string(),
                entry.date.to_string(),
                entry.cash_sales.to_string(),
                entry.online_sales.to_string(),
                entry.total_sales.to_string(),
                entry.expenses.to_string(),
                entry.profit.to_string(),
                entry.peak_hours.join(";"),
            ])?;
        }

        csv_writer.flush()?;
        Ok(sales.len())
    }

    /// Export expense entries to CSV format
    pub async fn export_expenses_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let expenses = self.service.list_expenses().await;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "date", "category", "item", "amount", "description"])?;

        for expense in &expenses {
            csv_writer.write_record([
                expense.id.to_string(),
                expense.date.to_string(),
                expense.category.as_str().to_string(),
                expense.item.clone(),
                expense.amount.to_string(),
                expense.description.clone().unwrap_or_default(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(expenses.len())
    }

    /// Export the whole session as a JSON snapshot
    pub async fn export_full_json<W: Write>(&self, mut writer: W) -> Result<LedgerSnapshot> {
        let ledger = self.service.snapshot().await;

        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            sales: ledger.list_sales().to_vec(),
            expenses: ledger.list_expenses().to_vec(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
