//! Saving and loading the ledger
//!
//! Files hold one `<date>,<amount>,<category>` line per expense. Loading is
//! tolerant: malformed lines are skipped and reported through the caller's
//! [`DiagnosticSink`], everything else is loaded.

use std::io::{BufRead, Write};
use std::path::Path;

use super::Ledger;
use crate::audit::{Diagnostic, DiagnosticSink};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;
use crate::storage::{encode_line, open_reader, parse_line, write_atomic, LineParseError};

/// Outcome of a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of expenses now in the ledger
    pub loaded: usize,
    /// Number of lines skipped with a diagnostic
    pub skipped: usize,
}

impl LoadReport {
    /// Check if every non-blank line was loaded
    pub fn is_clean(&self) -> bool {
        self.skipped == 0
    }
}

impl Ledger {
    /// Write every expense, in insertion order, one per line
    pub fn save_to_writer<W: Write>(&self, writer: &mut W) -> TrackerResult<()> {
        for expense in &self.entries {
            writeln!(writer, "{}", encode_line(expense))
                .map_err(|e| TrackerError::Io(format!("Failed to write expense: {}", e)))?;
        }
        Ok(())
    }

    /// Save the ledger to a file
    ///
    /// The file is replaced atomically, so a failed save leaves any previous
    /// contents in place.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> TrackerResult<()> {
        let path = path.as_ref();
        write_atomic(path, |writer| self.save_to_writer(writer)).map_err(|e| match e {
            TrackerError::Io(msg) => {
                TrackerError::Io(format!("Failed to save {}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Replace the ledger's contents with the expenses read from `reader`
    ///
    /// Blank lines are ignored. Lines with the wrong number of fields, a
    /// non-numeric amount, invalid values or bytes that are not UTF-8 are
    /// skipped and reported to `sink`. The new contents are swapped in only
    /// once the whole source has been read; on a read error the ledger keeps
    /// its previous contents.
    pub fn load_from_reader<R: BufRead>(
        &mut self,
        mut reader: R,
        sink: &mut dyn DiagnosticSink,
    ) -> TrackerResult<LoadReport> {
        let mut entries: Vec<Expense> = Vec::new();
        let mut skipped = 0;
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|e| {
                TrackerError::Io(format!("Failed to read line {}: {}", line_number + 1, e))
            })?;
            if read == 0 {
                break;
            }
            line_number += 1;
            strip_line_ending(&mut buf);

            let parsed = match std::str::from_utf8(&buf) {
                Ok(text) if text.trim().is_empty() => continue,
                Ok(text) => parse_line(text),
                Err(e) => Err(LineParseError::Encoding(e.valid_up_to())),
            };

            match parsed {
                Ok(expense) => entries.push(expense),
                Err(error) => {
                    skipped += 1;
                    sink.report(&Diagnostic {
                        line_number,
                        line: String::from_utf8_lossy(&buf).into_owned(),
                        error,
                    });
                }
            }
        }

        self.entries = entries;

        Ok(LoadReport {
            loaded: self.entries.len(),
            skipped,
        })
    }

    /// Replace the ledger's contents from a file
    pub fn load<P: AsRef<Path>>(
        &mut self,
        path: P,
        sink: &mut dyn DiagnosticSink,
    ) -> TrackerResult<LoadReport> {
        let reader = open_reader(path)?;
        self.load_from_reader(reader, sink)
    }
}

/// Remove a trailing `\n` or `\r\n`
fn strip_line_ending(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}
