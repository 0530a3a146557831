//! Audit entry data structures
//!
//! Defines the structure of audit log entries: operation types and the entry
//! format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sink::Diagnostic;
use crate::models::Expense;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// An expense was added
    Add,
    /// An expense was deleted
    Delete,
    /// The ledger was written to a file
    Save,
    /// The ledger was replaced from a file
    Load,
    /// A line was skipped during load
    SkipLine,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Save => write!(f, "SAVE"),
            Operation::Load => write!(f, "LOAD"),
            Operation::SkipLine => write!(f, "SKIP_LINE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Human-readable description of what happened
    pub detail: String,

    /// JSON representation of the affected expense, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create an entry with no attached expense
    pub fn new(operation: Operation, detail: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            detail: detail.into(),
            expense: None,
        }
    }

    /// Entry for an added expense
    pub fn add(index: usize, expense: &Expense) -> Self {
        Self::with_expense(Operation::Add, format!("index {}", index), expense)
    }

    /// Entry for a deleted expense
    pub fn delete(index: usize, expense: &Expense) -> Self {
        Self::with_expense(Operation::Delete, format!("index {}", index), expense)
    }

    /// Entry for a completed save
    pub fn save(path: &str, count: usize) -> Self {
        Self::new(
            Operation::Save,
            format!("{} expenses written to {}", count, path),
        )
    }

    /// Entry for a completed load
    pub fn load(path: &str, loaded: usize, skipped: usize) -> Self {
        Self::new(
            Operation::Load,
            format!(
                "{} expenses loaded from {} ({} lines skipped)",
                loaded, path, skipped
            ),
        )
    }

    /// Entry for a line skipped during load
    pub fn skip_line(diagnostic: &Diagnostic) -> Self {
        Self::new(Operation::SkipLine, diagnostic.to_string())
    }

    fn with_expense(operation: Operation, detail: String, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            detail,
            expense: serde_json::to_value(expense).ok(),
        }
    }

    /// Format this entry as a single human-readable line
    pub fn format_human_readable(&self) -> String {
        format!(
            "{} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.detail
        )
    }
}
