//! Report CLI commands

use clap::Subcommand;

use crate::display::{format_amount, format_category_summary, format_expense_lines};
use crate::error::TrackerResult;

use super::context::Session;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Total spent in one category
    Category {
        /// Category name
        category: String,
    },
    /// Expenses between two dates, inclusive
    Range {
        /// Start date (YYYY-MM-DD)
        start: String,
        /// End date (YYYY-MM-DD)
        end: String,
    },
    /// Totals for every category
    Summary,
}

/// Handle a report command
pub fn handle_report_command(session: &Session, cmd: ReportCommands) -> TrackerResult<()> {
    match cmd {
        ReportCommands::Category { category } => {
            let total = session.ledger.total_by_category(&category);
            println!(
                "Total expenses for category '{}': {}",
                category,
                format_amount(total)
            );
        }

        ReportCommands::Range { start, end } => {
            let results = session.ledger.in_date_range(&start, &end);
            if results.is_empty() {
                println!("No expenses found in the specified date range.");
            } else {
                println!("Expenses from {} to {}:", start, end);
                print!("{}", format_expense_lines(&results));
            }
        }

        ReportCommands::Summary => {
            let totals = session.ledger.category_totals();
            print!(
                "{}",
                format_category_summary(&totals, session.ledger.total_amount())
            );
        }
    }

    Ok(())
}
