//! Expense model
//!
//! A single dated, categorized expense. Expenses are validated once at
//! construction and are immutable afterwards.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One recorded expense
///
/// The date is kept as text in `YYYY-MM-DD` form and compared
/// lexicographically, which orders correctly only while dates are
/// zero-padded and fixed-width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    date: String,
    amount: f64,
    category: String,
}

impl Expense {
    /// Create a validated expense
    pub fn new(
        date: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Result<Self, ExpenseValidationError> {
        let date = date.into();
        let category = category.into();

        Self::validate_fields(&date, amount, &category)?;

        Ok(Self {
            date,
            amount,
            category,
        })
    }

    /// Check the expense invariants without constructing anything
    pub fn validate_fields(
        date: &str,
        amount: f64,
        category: &str,
    ) -> Result<(), ExpenseValidationError> {
        if date.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDate);
        }

        if amount.is_nan() {
            return Err(ExpenseValidationError::InvalidAmount);
        }

        if amount < 0.0 {
            return Err(ExpenseValidationError::NegativeAmount(amount));
        }

        if category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        Ok(())
    }

    /// The date, exactly as supplied
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The amount spent
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The category label, exactly as supplied
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Compare two expenses by date (lexicographic)
    pub fn cmp_by_date(a: &Expense, b: &Expense) -> Ordering {
        a.date.cmp(&b.date)
    }

    /// Compare two expenses by amount
    pub fn cmp_by_amount(a: &Expense, b: &Expense) -> Ordering {
        a.amount.total_cmp(&b.amount)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expense [Date: {}, Amount: ${:.2}, Category: {}]",
            self.date, self.amount, self.category
        )
    }
}

/// Total orders over expenses, usable with any `sort_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseOrder {
    /// Lexicographic order on the date string
    #[default]
    ByDate,
    /// Numeric order on the amount
    ByAmount,
}

impl ExpenseOrder {
    /// Compare two expenses under this order
    pub fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        match self {
            Self::ByDate => Expense::cmp_by_date(a, b),
            Self::ByAmount => Expense::cmp_by_amount(a, b),
        }
    }
}

impl FromStr for ExpenseOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::ByDate),
            "amount" => Ok(Self::ByAmount),
            other => Err(format!("Unknown sort order '{}' (use date or amount)", other)),
        }
    }
}

impl fmt::Display for ExpenseOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByDate => write!(f, "date"),
            Self::ByAmount => write!(f, "amount"),
        }
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyDate,
    NegativeAmount(f64),
    InvalidAmount,
    EmptyCategory,
}

impl ExpenseValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyDate => "date",
            Self::NegativeAmount(_) | Self::InvalidAmount => "amount",
            Self::EmptyCategory => "category",
        }
    }
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDate => write!(f, "Date cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative (got {})", amount)
            }
            Self::InvalidAmount => write!(f, "Amount must be a number"),
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new("2024-01-02", 75.5, "Transport").unwrap();
        assert_eq!(expense.date(), "2024-01-02");
        assert_eq!(expense.amount(), 75.5);
        assert_eq!(expense.category(), "Transport");
    }

    #[test]
    fn test_zero_amount_is_valid() {
        assert!(Expense::new("2024-01-01", 0.0, "Gift").is_ok());
    }

    #[test]
    fn test_fields_kept_verbatim() {
        let expense = Expense::new(" 2024-01-01", 1.0, "Food ").unwrap();
        assert_eq!(expense.date(), " 2024-01-01");
        assert_eq!(expense.category(), "Food ");
    }

    #[test]
    fn test_empty_date_rejected() {
        assert_eq!(
            Expense::new("", 50.0, "Food"),
            Err(ExpenseValidationError::EmptyDate)
        );
        assert_eq!(
            Expense::new("   ", 50.0, "Food"),
            Err(ExpenseValidationError::EmptyDate)
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = Expense::new("2024-01-01", -10.0, "Food").unwrap_err();
        assert_eq!(err, ExpenseValidationError::NegativeAmount(-10.0));
        assert_eq!(err.field(), "amount");
    }

    #[test]
    fn test_nan_amount_rejected() {
        assert_eq!(
            Expense::new("2024-01-01", f64::NAN, "Food"),
            Err(ExpenseValidationError::InvalidAmount)
        );
    }

    #[test]
    fn test_empty_category_rejected() {
        let err = Expense::new("2024-01-01", 50.0, " \t").unwrap_err();
        assert_eq!(err, ExpenseValidationError::EmptyCategory);
        assert_eq!(err.field(), "category");
    }

    #[test]
    fn test_display() {
        let expense = Expense::new("2024-01-03", 100.0, "Groceries").unwrap();
        assert_eq!(
            expense.to_string(),
            "Expense [Date: 2024-01-03, Amount: $100.00, Category: Groceries]"
        );

        let expense = Expense::new("2024-01-03", 7.456, "Coffee").unwrap();
        assert_eq!(
            expense.to_string(),
            "Expense [Date: 2024-01-03, Amount: $7.46, Category: Coffee]"
        );
    }

    #[test]
    fn test_sort_orders() {
        let mut expenses = vec![
            Expense::new("2024-01-03", 100.0, "Groceries").unwrap(),
            Expense::new("2024-01-01", 50.0, "Food").unwrap(),
            Expense::new("2024-01-02", 75.0, "Transport").unwrap(),
        ];

        expenses.sort_by(|a, b| ExpenseOrder::ByDate.compare(a, b));
        let dates: Vec<_> = expenses.iter().map(|e| e.date()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);

        expenses.sort_by(Expense::cmp_by_amount);
        let amounts: Vec<_> = expenses.iter().map(|e| e.amount()).collect();
        assert_eq!(amounts, vec![50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_order_from_str() {
        assert_eq!("date".parse::<ExpenseOrder>(), Ok(ExpenseOrder::ByDate));
        assert_eq!("AMOUNT".parse::<ExpenseOrder>(), Ok(ExpenseOrder::ByAmount));
        assert!("payee".parse::<ExpenseOrder>().is_err());
    }
}
