//! Expense display formatting
//!
//! Formats expenses for terminal output as an indexed table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;

/// One table row
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Format expenses as a table, numbering rows from zero
///
/// `indices` supplies the ledger position of each row; pass `None` to number
/// the rows sequentially.
pub fn format_expense_table(expenses: &[Expense], indices: Option<&[usize]>) -> String {
    if expenses.is_empty() {
        return "No expenses to display.\n".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, expense)| ExpenseRow {
        index: indices.and_then(|idx| idx.get(i).copied()).unwrap_or(i),
        date: expense.date().to_string(),
        amount: format_amount(expense.amount()),
        category: expense.category().to_string(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format expenses one per line using their `Display` form
pub fn format_expense_lines(expenses: &[Expense]) -> String {
    let mut output = String::new();
    for expense in expenses {
        output.push_str(&expense.to_string());
        output.push('\n');
    }
    output
}

/// Format an amount with a dollar sign and two decimals
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}
