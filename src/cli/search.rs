//! Search CLI commands

use clap::Subcommand;

use crate::display::format_expense_lines;
use crate::error::TrackerResult;

use super::context::Session;

/// Search subcommands
#[derive(Subcommand)]
pub enum SearchCommands {
    /// Expenses on an exact date
    Date {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Expenses in an exact category (case-sensitive)
    Category {
        /// Category name
        category: String,
    },
    /// Expenses with an exact amount
    Amount {
        /// Amount to match
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },
}

/// Handle a search command
pub fn handle_search_command(session: &Session, cmd: SearchCommands) -> TrackerResult<()> {
    let (description, results) = match cmd {
        SearchCommands::Date { date } => {
            let results = session.ledger.find_by_date(&date);
            (format!("on {}", date), results)
        }
        SearchCommands::Category { category } => {
            let results = session.ledger.find_by_category(&category);
            (format!("in category '{}'", category), results)
        }
        SearchCommands::Amount { amount } => {
            let results = session.ledger.find_by_amount(amount);
            (format!("with amount {}", amount), results)
        }
    };

    if results.is_empty() {
        println!("No expenses found {}.", description);
        return Ok(());
    }

    println!("Expenses {}:", description);
    print!("{}", format_expense_lines(&results));
    Ok(())
}
