//! Audit logging and load diagnostics
//!
//! Records add, delete, save and load operations in an append-only audit
//! log, and carries the diagnostic channel the ledger uses to report lines
//! it skipped while loading.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single log entry with timestamp, operation and detail.
//! - `AuditLogger`: writes entries as line-delimited JSON (JSONL). It is also
//!   a `DiagnosticSink`, queueing one entry per skipped line.
//! - `DiagnosticSink`: the trait the ledger reports through. `CollectingSink`
//!   keeps diagnostics in memory, `NullSink` drops them, `Tee` fans out.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditLogger, CollectingSink, Tee};
//!
//! let mut logger = AuditLogger::new(audit_log_path);
//! let mut collected = CollectingSink::new();
//! let report = ledger.load(&path, &mut Tee::new(&mut collected, &mut logger))?;
//! logger.flush_pending()?;
//! ```

mod entry;
mod logger;
mod sink;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
pub use sink::{CollectingSink, Diagnostic, DiagnosticSink, NullSink, Tee};
