//! Expense Tracker - personal expense ledger
//!
//! This library keeps dated, categorized expenses in an ordered in-memory
//! ledger, answers queries and totals over them, and saves/loads the ledger
//! as a plain `<date>,<amount>,<category>` text file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: The `Expense` value type and its orderings
//! - `ledger`: The `Ledger` collection with queries, totals, save and load
//! - `storage`: Line format and atomic file I/O
//! - `audit`: Audit log and the diagnostic channel used while loading
//! - `config`: Configuration and path management
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expenses` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::audit::CollectingSink;
//! use expense_tracker::ledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.add("2024-01-01", 50.0, "Food").unwrap();
//! ledger.add("2024-01-02", 20.0, "Transport").unwrap();
//! assert_eq!(ledger.total_amount(), 70.0);
//!
//! let mut buffer = Vec::new();
//! ledger.save_to_writer(&mut buffer).unwrap();
//!
//! let mut restored = Ledger::new();
//! let mut diagnostics = CollectingSink::new();
//! restored.load_from_reader(buffer.as_slice(), &mut diagnostics).unwrap();
//! assert_eq!(restored, ledger);
//! assert!(diagnostics.is_empty());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
pub use ledger::{Ledger, LoadReport};
pub use models::{Expense, ExpenseOrder, ExpenseValidationError};
