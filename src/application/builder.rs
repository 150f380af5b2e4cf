//! Turns raw form input into typed, validated commands.
//!
//! Sales fields are permissive: blank or unparsable input counts as zero.
//! Expense item and amount are mandatory.

use tracing::debug;

use crate::domain::{
    Cents, ExpenseCategory, ValidationError, parse_cents, validate_expense, validate_sales,
};

/// Raw sales form, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct SalesForm {
    pub cash_sales: Option<String>,
    pub online_sales: Option<String>,
}

/// Raw expense form, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    /// Defaults to ingredients when omitted
    pub category: Option<String>,
    pub item: String,
    pub amount: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddSalesCommand {
    pub cash_sales: Cents,
    pub online_sales: Cents,
}

impl AddSalesCommand {
    pub fn new(cash_sales: Cents, online_sales: Cents) -> Result<Self, ValidationError> {
        validate_sales(cash_sales, online_sales)?;
        Ok(Self {
            cash_sales,
            online_sales,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExpenseCommand {
    pub category: ExpenseCategory,
    pub item: String,
    pub amount: Cents,
    pub description: Option<String>,
}

impl AddExpenseCommand {
    pub fn new(
        category: ExpenseCategory,
        item: impl Into<String>,
        amount: Cents,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        let item: String = item.into();
        let item = item.trim().to_string();
        validate_expense(&item, amount)?;
        Ok(Self {
            category,
            item,
            amount,
            description: description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        })
    }
}

pub fn build_sales_command(form: &SalesForm) -> Result<AddSalesCommand, ValidationError> {
    let cash_sales = lenient_amount("cash sales", form.cash_sales.as_deref());
    let online_sales = lenient_amount("online sales", form.online_sales.as_deref());
    AddSalesCommand::new(cash_sales, online_sales)
}

pub fn build_expense_command(form: &ExpenseForm) -> Result<AddExpenseCommand, ValidationError> {
    let category = match form.category.as_deref().map(str::trim) {
        None | Some("") => ExpenseCategory::Ingredients,
        Some(raw) => ExpenseCategory::from_str(raw)
            .ok_or_else(|| ValidationError::UnknownCategory(raw.to_string()))?,
    };

    if form.item.trim().is_empty() {
        return Err(ValidationError::MissingItem);
    }

    let raw_amount = match form.amount.as_deref().map(str::trim) {
        None | Some("") => return Err(ValidationError::MissingAmount),
        Some(raw) => raw,
    };
    let amount = parse_cents(raw_amount).map_err(|_| ValidationError::InvalidAmount {
        field: "expense amount",
        input: raw_amount.to_string(),
    })?;

    AddExpenseCommand::new(category, form.item.as_str(), amount, form.description.clone())
}

fn lenient_amount(field: &str, input: Option<&str>) -> Cents {
    let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0;
    };
    match parse_cents(raw) {
        Ok(cents) => cents,
        Err(err) => {
            debug!(field, input = raw, %err, "unparsable sales amount treated as zero");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales_form(cash: Option<&str>, online: Option<&str>) -> SalesForm {
        SalesForm {
            cash_sales: cash.map(String::from),
            online_sales: online.map(String::from),
        }
    }

    fn expense_form(item: &str, amount: Option<&str>) -> ExpenseForm {
        ExpenseForm {
            item: item.to_string(),
            amount: amount.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_sales_form() {
        let cmd = build_sales_command(&sales_form(Some("8500"), Some("3200.50"))).unwrap();
        assert_eq!(cmd.cash_sales, 850000);
        assert_eq!(cmd.online_sales, 320050);
    }

    #[test]
    fn test_sales_form_is_lenient() {
        let cmd = build_sales_command(&sales_form(None, Some("lots"))).unwrap();
        assert_eq!(cmd, AddSalesCommand::new(0, 0).unwrap());

        let cmd = build_sales_command(&sales_form(Some("  "), Some("12"))).unwrap();
        assert_eq!(cmd.cash_sales, 0);
        assert_eq!(cmd.online_sales, 1200);
    }

    #[test]
    fn test_sales_form_rejects_negative() {
        let result = build_sales_command(&sales_form(Some("-5"), None));
        assert!(matches!(
            result,
            Err(ValidationError::NegativeSales {
                field: "cash sales",
                amount: -500
            })
        ));
    }

    #[test]
    fn test_oversized_amounts_rejected() {
        let huge = "92233720368547758";

        assert!(matches!(
            build_sales_command(&sales_form(Some(huge), Some(huge))),
            Err(ValidationError::AmountTooLarge { .. })
        ));
        assert!(matches!(
            build_expense_command(&expense_form("Paneer", Some(huge))),
            Err(ValidationError::AmountTooLarge { .. })
        ));
    }

    #[test]
    fn test_expense_form() {
        let form = ExpenseForm {
            category: Some("Other".to_string()),
            item: " Gas Cylinder ".to_string(),
            amount: Some("950".to_string()),
            description: Some("LPG refill".to_string()),
        };
        let cmd = build_expense_command(&form).unwrap();

        assert_eq!(cmd.category, ExpenseCategory::Other);
        assert_eq!(cmd.item, "Gas Cylinder");
        assert_eq!(cmd.amount, 95000);
        assert_eq!(cmd.description.as_deref(), Some("LPG refill"));
    }

    #[test]
    fn test_expense_form_defaults_to_ingredients() {
        let cmd = build_expense_command(&expense_form("Paneer", Some("1200"))).unwrap();
        assert_eq!(cmd.category, ExpenseCategory::Ingredients);
        assert_eq!(cmd.description, None);
    }

    #[test]
    fn test_expense_form_required_fields() {
        assert_eq!(
            build_expense_command(&expense_form("", Some("1200"))),
            Err(ValidationError::MissingItem)
        );
        assert_eq!(
            build_expense_command(&expense_form("Paneer", None)),
            Err(ValidationError::MissingAmount)
        );
        assert!(matches!(
            build_expense_command(&expense_form("Paneer", Some("0"))),
            Err(ValidationError::NonPositiveAmount { .. })
        ));
        assert!(matches!(
            build_expense_command(&expense_form("Paneer", Some("-10"))),
            Err(ValidationError::NonPositiveAmount { .. })
        ));
        assert!(matches!(
            build_expense_command(&expense_form("Paneer", Some("abc"))),
            Err(ValidationError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_expense_form_unknown_category() {
        let form = ExpenseForm {
            category: Some("Marketing".to_string()),
            ..expense_form("Flyers", Some("300"))
        };
        assert_eq!(
            build_expense_command(&form),
            Err(ValidationError::UnknownCategory("Marketing".to_string()))
        );
    }
}
