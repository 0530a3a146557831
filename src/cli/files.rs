//! Save/load CLI commands and filename checks
//!
//! `save` copies the working ledger to a named file and `load` replaces the
//! working ledger from one. Both take plain file names relative to the
//! current directory.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::audit::AuditEntry;
use crate::error::{TrackerError, TrackerResult};
use crate::storage::is_regular_file;

use super::context::Session;

fn filename_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._-]+\.(txt|csv)$").expect("filename pattern is valid")
    })
}

/// Check a file name against the allow-list
///
/// Accepted names use letters, digits, `.`, `_` and `-` only and end in
/// `.txt` or `.csv`.
pub fn is_valid_filename(name: &str) -> bool {
    !name.trim().is_empty() && filename_pattern().is_match(name)
}

/// Like [`is_valid_filename`] but returns an error naming the file
pub fn validate_filename(name: &str) -> TrackerResult<()> {
    if is_valid_filename(name) {
        Ok(())
    } else {
        Err(TrackerError::InvalidFilename(name.to_string()))
    }
}

/// Write the working ledger to `filename`
pub fn handle_save_command(session: &mut Session, filename: &str) -> TrackerResult<()> {
    validate_filename(filename)?;

    session.ledger.save(filename)?;
    let count = session.ledger.len();
    session.audit(AuditEntry::save(filename, count))?;

    println!(
        "Saved {} expenses to {}",
        session.ledger.len(),
        filename
    );
    Ok(())
}

/// Replace the working ledger with the contents of `filename`
pub fn handle_load_command(session: &mut Session, filename: &str) -> TrackerResult<()> {
    validate_filename(filename)?;

    if !is_regular_file(filename) {
        return Err(TrackerError::file_not_found(filename));
    }

    // Drop diagnostics from opening the working file; only this load's matter
    session.take_diagnostics();

    let skipped = session.replace_from(Path::new(filename))?;
    for diagnostic in session.take_diagnostics() {
        eprintln!("Warning: {}", diagnostic);
    }

    session.persist()?;
    let loaded = session.ledger.len();
    session.audit(AuditEntry::load(filename, loaded, skipped))?;

    println!(
        "Loaded {} expenses from {}",
        session.ledger.len(),
        filename
    );
    if skipped > 0 {
        println!("{} malformed lines were skipped.", skipped);
    }
    Ok(())
}
