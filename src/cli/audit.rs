//! Audit log CLI command

use crate::audit::AuditLogger;
use crate::config::TrackerPaths;
use crate::error::TrackerResult;

/// Print audit log entries, oldest first
///
/// `limit` keeps only the most recent entries.
pub fn handle_audit_command(paths: &TrackerPaths, limit: Option<usize>) -> TrackerResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    if !logger.exists() {
        println!("No audit log at {}", logger.path().display());
        return Ok(());
    }

    let entries = match limit {
        Some(count) => logger.read_recent(count)?,
        None => logger.read_all()?,
    };

    if entries.is_empty() {
        println!("Audit log is empty.");
    }
    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
