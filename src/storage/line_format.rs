//! Line-oriented record format
//!
//! Each expense is stored on its own line as `<date>,<amount>,<category>`.
//! There is no header, no quoting and no escaping: a field containing a
//! comma will not survive a round trip. Trailing empty fields are dropped
//! before the fields are counted, so `2024-01-01,5,Tea,` is a valid line.

use std::fmt;

use crate::models::{Expense, ExpenseValidationError};

/// Field delimiter
pub const DELIMITER: char = ',';

/// Number of fields in a well-formed line
pub const FIELD_COUNT: usize = 3;

/// Encode an expense as a single line (without the trailing newline)
///
/// The amount uses the default `f64` formatting, which is the shortest text
/// that parses back to the same value.
pub fn encode_line(expense: &Expense) -> String {
    format!(
        "{}{}{}{}{}",
        expense.date(),
        DELIMITER,
        expense.amount(),
        DELIMITER,
        expense.category()
    )
}

/// Parse a single line into an expense
pub fn parse_line(line: &str) -> Result<Expense, LineParseError> {
    let mut fields: Vec<&str> = line.split(DELIMITER).collect();
    while fields.last() == Some(&"") {
        fields.pop();
    }
    if fields.len() != FIELD_COUNT {
        return Err(LineParseError::FieldCount(fields.len()));
    }

    let amount: f64 = fields[1]
        .trim()
        .parse()
        .map_err(|_| LineParseError::InvalidAmount(fields[1].to_string()))?;

    Expense::new(fields[0], amount, fields[2]).map_err(LineParseError::Invalid)
}

/// Why a line could not be turned into an expense
#[derive(Debug, Clone, PartialEq)]
pub enum LineParseError {
    /// The line did not split into exactly three fields
    FieldCount(usize),
    /// The amount field is not a number
    InvalidAmount(String),
    /// The fields parsed but describe an invalid expense
    Invalid(ExpenseValidationError),
    /// The line is not valid UTF-8; holds the byte offset of the bad sequence
    Encoding(usize),
}

impl fmt::Display for LineParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount(found) => write!(
                f,
                "Expected {} comma-separated fields, found {}",
                FIELD_COUNT, found
            ),
            Self::InvalidAmount(text) => write!(f, "Invalid amount '{}'", text),
            Self::Invalid(err) => write!(f, "Invalid expense: {}", err),
            Self::Encoding(offset) => {
                write!(f, "Line is not valid UTF-8 (bad byte at offset {})", offset)
            }
        }
    }
}

impl std::error::Error for LineParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}
