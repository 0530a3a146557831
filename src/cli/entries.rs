//! Expense entry CLI commands
//!
//! Adding, listing, deleting and totalling expenses in the working ledger.

use crate::audit::AuditEntry;
use crate::display::{format_amount, format_expense_table};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseOrder};

use super::context::Session;

/// Add an expense and save the working ledger
pub fn handle_add_command(
    session: &mut Session,
    date: &str,
    amount: f64,
    category: &str,
) -> TrackerResult<()> {
    let expense = session.ledger.add(date, amount, category)?.clone();
    let index = session.ledger.len() - 1;

    session.persist()?;
    session.audit(AuditEntry::add(index, &expense))?;

    println!("Expense added successfully!");
    println!("  [{}] {}", index, expense);
    Ok(())
}

/// List every expense, optionally sorted
pub fn handle_list_command(session: &Session, sort: Option<ExpenseOrder>) -> TrackerResult<()> {
    let order = sort.or_else(|| session.settings().list_order.expense_order());

    let mut rows: Vec<(usize, Expense)> = session.ledger.view().cloned().enumerate().collect();
    if let Some(order) = order {
        rows.sort_by(|(_, a), (_, b)| order.compare(a, b));
    }

    let (indices, expenses): (Vec<usize>, Vec<Expense>) = rows.into_iter().unzip();
    print!("{}", format_expense_table(&expenses, Some(indices.as_slice())));

    if !expenses.is_empty() {
        println!(
            "{} expenses, total {}",
            expenses.len(),
            format_amount(session.ledger.total_amount())
        );
    }
    Ok(())
}

/// Delete the expense at a zero-based index
pub fn handle_delete_command(session: &mut Session, index: i64) -> TrackerResult<()> {
    let removed = session
        .ledger
        .remove_at(index)
        .ok_or(TrackerError::IndexOutOfRange {
            index,
            len: session.ledger.len(),
        })?;

    session.persist()?;
    // remove_at only succeeds for non-negative indices
    session.audit(AuditEntry::delete(index as usize, &removed))?;

    println!("Deleted: {}", removed);
    Ok(())
}

/// Print the grand total
pub fn handle_total_command(session: &Session) -> TrackerResult<()> {
    println!(
        "Total expenses: {}",
        format_amount(session.ledger.total_amount())
    );
    Ok(())
}
