use std::fmt;

use super::{Cents, format_cents};

/// Largest single amount accepted (₹1,000,000,000.00).
/// Keeps totals and averages far away from `i64` overflow.
pub const MAX_AMOUNT: Cents = 100_000_000_000;

/// Rejected input. Raised before any ledger mutation takes place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingItem,
    MissingAmount,
    InvalidAmount {
        field: &'static str,
        input: String,
    },
    NonPositiveAmount {
        field: &'static str,
        amount: Cents,
    },
    NegativeSales {
        field: &'static str,
        amount: Cents,
    },
    AmountTooLarge {
        field: &'static str,
        amount: Cents,
    },
    UnknownCategory(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingItem => write!(f, "expense item is required"),
            ValidationError::MissingAmount => write!(f, "expense amount is required"),
            ValidationError::InvalidAmount { field, input } => {
                write!(f, "{} '{}' is not a valid amount", field, input)
            }
            ValidationError::NonPositiveAmount { field, amount } => {
                write!(f, "{} must be positive (got {} cents)", field, amount)
            }
            ValidationError::NegativeSales { field, amount } => {
                write!(f, "{} cannot be negative (got {} cents)", field, amount)
            }
            ValidationError::AmountTooLarge { field, amount } => write!(
                f,
                "{} of {} exceeds the limit of {}",
                field,
                format_cents(*amount),
                format_cents(MAX_AMOUNT)
            ),
            ValidationError::UnknownCategory(category) => write!(
                f,
                "unknown expense category '{}' (expected ingredients, equipment, rent or other)",
                category
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check the amounts of a sales entry.
pub fn validate_sales(cash_sales: Cents, online_sales: Cents) -> Result<(), ValidationError> {
    if cash_sales < 0 {
        return Err(ValidationError::NegativeSales {
            field: "cash sales",
            amount: cash_sales,
        });
    }
    if online_sales < 0 {
        return Err(ValidationError::NegativeSales {
            field: "online sales",
            amount: online_sales,
        });
    }
    check_ceiling("cash sales", cash_sales)?;
    check_ceiling("online sales", online_sales)
}

fn check_ceiling(field: &'static str, amount: Cents) -> Result<(), ValidationError> {
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge { field, amount });
    }
    Ok(())
}

/// Check the mandatory fields of an expense.
pub fn validate_expense(item: &str, amount: Cents) -> Result<(), ValidationError> {
    if item.trim().is_empty() {
        return Err(ValidationError::MissingItem);
    }
    if amount <= 0 {
        return Err(ValidationError::NonPositiveAmount {
            field: "expense amount",
            amount,
        });
    }
    check_ceiling("expense amount", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sales() {
        assert!(validate_sales(0, 0).is_ok());
        assert!(validate_sales(850000, 320000).is_ok());
        assert!(matches!(
            validate_sales(-1, 0),
            Err(ValidationError::NegativeSales {
                field: "cash sales",
                ..
            })
        ));
        assert!(matches!(
            validate_sales(0, -1),
            Err(ValidationError::NegativeSales {
                field: "online sales",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_expense() {
        assert!(validate_expense("Paneer", 120000).is_ok());
        assert_eq!(
            validate_expense("   ", 120000),
            Err(ValidationError::MissingItem)
        );
        assert!(matches!(
            validate_expense("Paneer", 0),
            Err(ValidationError::NonPositiveAmount { amount: 0, .. })
        ));
        assert!(validate_expense("Paneer", -5).is_err());
    }

    #[test]
    fn test_amount_ceiling() {
        assert!(validate_sales(MAX_AMOUNT, MAX_AMOUNT).is_ok());
        assert!(validate_expense("Paneer", MAX_AMOUNT).is_ok());

        assert_eq!(
            validate_sales(0, MAX_AMOUNT + 1),
            Err(ValidationError::AmountTooLarge {
                field: "online sales",
                amount: MAX_AMOUNT + 1
            })
        );
        assert!(matches!(
            validate_sales(92233720368547758, 92233720368547758),
            Err(ValidationError::AmountTooLarge {
                field: "cash sales",
                ..
            })
        ));
        assert!(matches!(
            validate_expense("Paneer", 92233720368547758),
            Err(ValidationError::AmountTooLarge { .. })
        ));
    }
}
