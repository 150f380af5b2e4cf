use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::application::{
    ExpenseForm, LedgerService, SalesForm, build_expense_command, build_sales_command,
};
use crate::domain::{Average, Cents, DayBoundary, SystemClock, format_cents};

/// Bahi - Sales & Expense Ledger
#[derive(Parser)]
#[command(name = "bahi")]
#[command(about = "Track a small food business's daily sales, expenses and profit")]
#[command(version)]
pub struct Cli {
    /// Currency symbol used when printing amounts
    #[arg(long, env = "BAHI_CURRENCY", default_value = "₹")]
    pub currency: String,

    /// When the business day rolls over: utc, local
    #[arg(long, env = "BAHI_DAY_BOUNDARY", default_value = "utc")]
    pub day_boundary: String,

    /// Start the session with sample data
    #[arg(long)]
    pub demo: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(name = "bahi", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Record today's sales (blank or unreadable amounts count as zero)
    Sales {
        /// Cash takings (e.g., "8500" or "8500.00")
        #[arg(long, allow_hyphen_values = true)]
        cash: Option<String>,

        /// UPI/card takings
        #[arg(long, allow_hyphen_values = true)]
        online: Option<String>,
    },

    /// Record an expense for today
    Expense {
        /// What was bought (e.g., "Paneer")
        item: String,

        /// Amount spent
        #[arg(allow_hyphen_values = true)]
        amount: Option<String>,

        /// Category: ingredients, equipment, rent, other
        #[arg(short, long)]
        category: Option<String>,

        /// Free-text note
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Show today's sales, expenses and profit
    Today,

    /// List recorded sales days
    History,

    /// List recorded expenses
    Expenses,

    /// Show averages, cost warnings and peak hours
    Insights,

    /// Export data to CSV or JSON
    Export {
        /// What to export: sales, expenses, full
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let boundary = DayBoundary::from_str(&self.day_boundary).with_context(|| {
            format!(
                "Invalid day boundary '{}'. Valid values: utc, local",
                self.day_boundary
            )
        })?;

        let service = LedgerService::new(SystemClock::new(boundary));
        if self.demo {
            service
                .seed_demo()
                .await
                .context("Failed to load demo data")?;
        }

        Session::new(service, self.currency).run().await
    }
}

/// Split a session line into arguments, honouring double quotes.
/// Example: `expense "Gas Cylinder" 950` -> ["expense", "Gas Cylinder", "950"]
pub fn split_args(line: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        anyhow::bail!("Unterminated quote");
    }
    if has_token {
        args.push(current);
    }
    Ok(args)
}

/// Whether the session keeps reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    service: LedgerService,
    currency: String,
}

impl Session {
    pub fn new(service: LedgerService, currency: impl Into<String>) -> Self {
        Self {
            service,
            currency: currency.into(),
        }
    }

    pub fn service(&self) -> &LedgerService {
        &self.service
    }

    async fn run(&self) -> Result<()> {
        let interactive = std::io::stdin().is_terminal();
        if interactive {
            println!(
                "Recording for {}. Type 'help' for commands, 'quit' to leave.",
                self.service.today()
            );
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            if interactive {
                print!("> ");
                std::io::stdout().flush()?;
            }

            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                break;
            };

            if self.handle_line(&line).await == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Run one input line. Failures are reported on stderr and never end the session.
    pub async fn handle_line(&self, line: &str) -> Flow {
        let args = match split_args(line) {
            Ok(args) if args.is_empty() => return Flow::Continue,
            Ok(args) => args,
            Err(err) => {
                eprintln!("Error: {}", err);
                return Flow::Continue;
            }
        };

        let parsed = match SessionLine::try_parse_from(args) {
            Ok(parsed) => parsed,
            Err(err) => {
                // Also covers `help`, which clap reports as an "error"
                if let Err(io_err) = err.print() {
                    warn!(%io_err, "failed to print usage");
                }
                return Flow::Continue;
            }
        };

        if parsed.command == Commands::Quit {
            return Flow::Quit;
        }
        if let Err(err) = self.execute(parsed.command).await {
            eprintln!("Error: {:#}", err);
        }
        Flow::Continue
    }

    fn money(&self, cents: Cents) -> String {
        format!("{}{}", self.currency, format_cents(cents))
    }

    pub async fn execute(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Sales { cash, online } => {
                let cmd = build_sales_command(&SalesForm {
                    cash_sales: cash,
                    online_sales: online,
                })?;
                let entry = self.service.record_sales(cmd).await?;
                println!("Sales recorded for {}", entry.date);
                println!("  Total sales: {}", self.money(entry.total_sales));
                println!("  Expenses:    {}", self.money(entry.expenses));
                println!("  Profit:      {}", self.money(entry.profit));
            }

            Commands::Expense {
                item,
                amount,
                category,
                description,
            } => {
                let cmd = build_expense_command(&ExpenseForm {
                    category,
                    item,
                    amount,
                    description,
                })?;
                let expense = self.service.record_expense(cmd).await?;
                println!(
                    "Expense recorded: {} added for {} ({})",
                    self.money(expense.amount),
                    expense.item,
                    expense.category
                );
            }

            Commands::Today => {
                let summary = self.service.today_summary().await;
                println!("Today ({})", summary.date);
                println!("  Sales:    {}", self.money(summary.total_sales));
                println!("  Expenses: {}", self.money(summary.total_expenses));
                println!("  Profit:   {}", self.money(summary.profit));
                if !summary.sales_recorded {
                    println!("  (sales not recorded yet)");
                }

                let breakdown = self.service.expense_breakdown(summary.date).await;
                if !breakdown.is_empty() {
                    println!();
                    for line in breakdown {
                        println!(
                            "  {:<12} {:>12} ({} item{})",
                            line.category.as_str(),
                            self.money(line.total),
                            line.count,
                            if line.count == 1 { "" } else { "s" }
                        );
                    }
                }
            }

            Commands::History => {
                let sales = self.service.list_sales().await;
                if sales.is_empty() {
                    println!("No sales recorded.");
                } else {
                    println!(
                        "{:<12} {:>12} {:>12} {:>12} {:>12} {:>12}",
                        "DATE", "CASH", "ONLINE", "TOTAL", "EXPENSES", "PROFIT"
                    );
                    println!("{}", "-".repeat(77));
                    for entry in sales {
                        println!(
                            "{:<12} {:>12} {:>12} {:>12} {:>12} {:>12}",
                            entry.date.to_string(),
                            format_cents(entry.cash_sales),
                            format_cents(entry.online_sales),
                            format_cents(entry.total_sales),
                            format_cents(entry.expenses),
                            format_cents(entry.profit)
                        );
                    }
                }
            }

            Commands::Expenses => {
                let expenses = self.service.list_expenses().await;
                if expenses.is_empty() {
                    println!("No expenses recorded.");
                } else {
                    println!(
                        "{:<12} {:<12} {:<20} {:>12}  {}",
                        "DATE", "CATEGORY", "ITEM", "AMOUNT", "DESCRIPTION"
                    );
                    println!("{}", "-".repeat(72));
                    for expense in expenses {
                        println!(
                            "{:<12} {:<12} {:<20} {:>12}  {}",
                            expense.date.to_string(),
                            expense.category.as_str(),
                            expense.item,
                            format_cents(expense.amount),
                            expense.description.as_deref().unwrap_or("")
                        );
                    }
                }
            }

            Commands::Insights => {
                let insights = self.service.insights().await;
                let average = |avg: Average| {
                    if avg.has_data {
                        self.money(avg.value)
                    } else {
                        "n/a".to_string()
                    }
                };

                println!("Average daily sales:  {}", average(insights.average_daily_sales));
                println!("Average daily profit: {}", average(insights.average_daily_profit));
                if insights.rising_costs {
                    println!("Ingredient costs are rising");
                } else {
                    println!("Costs look stable");
                }
                println!("Peak hours:           {}", insights.peak_hours.join(", "));
            }

            Commands::Export {
                export_type,
                output,
            } => {
                run_export_command(&self.service, &export_type, output.as_deref()).await?;
            }

            Commands::Quit => {}
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportKind {
    Sales,
    Expenses,
    Full,
}

impl ExportKind {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sales" => Some(ExportKind::Sales),
            "expenses" => Some(ExportKind::Expenses),
            "full" => Some(ExportKind::Full),
            _ => None,
        }
    }
}

async fn run_export_command(
    service: &LedgerService,
    export_type: &str,
    output: Option<&str>,
) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;
    use std::io::stdout;

    // Checked before any output file is created
    let kind = ExportKind::from_str(export_type).with_context(|| {
        format!(
            "Invalid export type '{}'. Valid types: sales, expenses, full",
            export_type
        )
    })?;

    let exporter = Exporter::new(service);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    match kind {
        ExportKind::Sales => {
            let count = exporter.export_sales_csv(writer).await?;
            if output.is_some() {
                eprintln!("Exported {} sales entries", count);
            }
        }
        ExportKind::Expenses => {
            let count = exporter.export_expenses_csv(writer).await?;
            if output.is_some() {
                eprintln!("Exported {} expenses", count);
            }
        }
        ExportKind::Full => {
            let snapshot = exporter.export_full_json(writer).await?;
            if output.is_some() {
                eprintln!(
                    "Exported session: {} sales entries, {} expenses",
                    snapshot.sales.len(),
                    snapshot.expenses.len()
                );
            } else {
                println!();
            }
        }
    }

    Ok(())
}
