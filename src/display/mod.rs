//! Display formatting for CLI output
//!
//! Provides formatting utilities for rendering expenses and reports in the
//! terminal.

pub mod expense;
pub mod report;

pub use expense::{format_amount, format_expense_lines, format_expense_table};
pub use report::{format_category_summary, format_share, separator};
