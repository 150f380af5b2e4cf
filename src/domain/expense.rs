use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Cents;

pub type ExpenseEntryId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    /// Raw food, spices, produce
    Ingredients,
    /// Utensils, appliances, repairs
    Equipment,
    Rent,
    /// Gas, utilities and anything else
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Ingredients,
        ExpenseCategory::Equipment,
        ExpenseCategory::Rent,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Ingredients => "ingredients",
            ExpenseCategory::Equipment => "equipment",
            ExpenseCategory::Rent => "rent",
            ExpenseCategory::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ingredients" => Some(ExpenseCategory::Ingredients),
            "equipment" => Some(ExpenseCategory::Equipment),
            "rent" => Some(ExpenseCategory::Rent),
            "other" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single spend recorded against a business day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: ExpenseEntryId,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    /// Short label, never empty
    pub item: String,
    /// Amount in cents (always positive)
    pub amount: Cents,
    pub description: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl ExpenseEntry {
    /// Create a new expense. Item and amount must already be validated by the caller.
    pub fn new(
        date: NaiveDate,
        category: ExpenseCategory,
        item: impl Into<String>,
        amount: Cents,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            category,
            item: item.into(),
            amount,
            description: None,
            recorded_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing_is_case_insensitive() {
        assert_eq!(
            ExpenseCategory::from_str("Ingredients"),
            Some(ExpenseCategory::Ingredients)
        );
        assert_eq!(
            ExpenseCategory::from_str(" RENT "),
            Some(ExpenseCategory::Rent)
        );
        assert_eq!(ExpenseCategory::from_str("fuel"), None);
    }

    #[test]
    fn test_category_roundtrip() {
        for category in ExpenseCategory::ALL {
            assert_eq!(ExpenseCategory::from_str(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_with_description() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let expense = ExpenseEntry::new(date, ExpenseCategory::Other, "Gas Cylinder", 95000)
            .with_description("LPG refill");

        assert_eq!(expense.item, "Gas Cylinder");
        assert_eq!(expense.description.as_deref(), Some("LPG refill"));
    }
}
