//! Core data models for the expense tracker
//!
//! This module contains the value types recorded by the ledger.

pub mod expense;

pub use expense::{Expense, ExpenseOrder, ExpenseValidationError};
