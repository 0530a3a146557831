//! The expense ledger
//!
//! An ordered, in-memory collection of expenses. Insertion order is
//! significant: it is the display order and the index space for positional
//! deletes. All queries are linear scans that preserve insertion order and
//! hand back copies, never references the caller could mutate through.
//!
//! The ledger is single-threaded by construction: every mutation takes
//! `&mut self`, so sharing one across threads needs an external lock.

mod persistence;

pub use persistence::LoadReport;

use crate::models::{Expense, ExpenseOrder, ExpenseValidationError};

/// Ordered collection of validated expenses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    entries: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the ledger has no expenses
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every expense
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Validate and append a new expense
    ///
    /// On a validation failure the ledger is left unchanged.
    pub fn add(
        &mut self,
        date: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Result<&Expense, ExpenseValidationError> {
        let expense = Expense::new(date, amount, category)?;
        self.entries.push(expense);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Iterate over the expenses in insertion order
    pub fn view(&self) -> impl Iterator<Item = &Expense> + '_ {
        self.entries.iter()
    }

    /// Get the expense at a position
    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.entries.get(index)
    }

    /// Delete the expense at a zero-based position
    ///
    /// Returns `false` and leaves the ledger untouched when the index is
    /// negative or past the end.
    pub fn delete_at(&mut self, index: i64) -> bool {
        self.remove_at(index).is_some()
    }

    /// Remove and return the expense at a zero-based position
    pub fn remove_at(&mut self, index: i64) -> Option<Expense> {
        let index = usize::try_from(index).ok()?;
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Sum of all amounts, accumulated in insertion order
    pub fn total_amount(&self) -> f64 {
        self.entries.iter().map(Expense::amount).sum()
    }

    /// Expenses whose date equals `date` exactly
    pub fn find_by_date(&self, date: &str) -> Vec<Expense> {
        self.filter(|e| e.date() == date)
    }

    /// Expenses whose category equals `category` exactly
    pub fn find_by_category(&self, category: &str) -> Vec<Expense> {
        self.filter(|e| e.category() == category)
    }

    /// Expenses whose amount equals `amount` exactly
    ///
    /// No tolerance is applied: `0.1 + 0.2` does not match `0.3`.
    #[allow(clippy::float_cmp)]
    pub fn find_by_amount(&self, amount: f64) -> Vec<Expense> {
        self.filter(|e| e.amount() == amount)
    }

    /// Sum of amounts for one category, `0.0` if nothing matches
    pub fn total_by_category(&self, category: &str) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.category() == category)
            .map(Expense::amount)
            .sum()
    }

    /// Expenses with `start <= date <= end`, compared as strings
    pub fn in_date_range(&self, start: &str, end: &str) -> Vec<Expense> {
        self.filter(|e| e.date() >= start && e.date() <= end)
    }

    /// A sorted copy of the expenses; the ledger's own order is unchanged
    pub fn sorted(&self, order: ExpenseOrder) -> Vec<Expense> {
        let mut expenses = self.entries.clone();
        expenses.sort_by(|a, b| order.compare(a, b));
        expenses
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for expense in &self.entries {
            if !seen.iter().any(|c| c == expense.category()) {
                seen.push(expense.category().to_string());
            }
        }
        seen
    }

    /// Per-category totals in first-seen category order
    pub fn category_totals(&self) -> Vec<(String, f64)> {
        self.categories()
            .into_iter()
            .map(|category| {
                let total = self.total_by_category(&category);
                (category, total)
            })
            .collect()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Expense>
    where
        F: Fn(&Expense) -> bool,
    {
        self.entries
            .iter()
            .filter(|e| predicate(*e))
            .cloned()
            .collect()
    }
}
