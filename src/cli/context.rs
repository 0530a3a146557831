//! Per-invocation CLI context
//!
//! Every command runs against a working ledger file: it is loaded when the
//! session opens and written back by commands that change it. Lines skipped
//! while loading are queued in the audit log and only written together with
//! the entry of a command that changes something.

use std::path::{Path, PathBuf};

use crate::audit::{AuditEntry, AuditLogger, CollectingSink, Diagnostic, NullSink, Tee};
use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;
use crate::ledger::Ledger;
use crate::storage::is_regular_file;

use super::files::validate_filename;

/// Loaded state shared by the command handlers
pub struct Session {
    paths: TrackerPaths,
    settings: Settings,
    ledger_path: PathBuf,
    audit: Option<AuditLogger>,
    diagnostics: Vec<Diagnostic>,
    pub ledger: Ledger,
}

impl Session {
    /// Open the working ledger, creating an empty one if the file is missing
    ///
    /// `file` overrides the settings' default file name.
    pub fn open(
        paths: TrackerPaths,
        settings: Settings,
        file: Option<&str>,
    ) -> TrackerResult<Self> {
        paths.ensure_directories()?;

        let name = file.unwrap_or(settings.default_file.as_str());
        validate_filename(name)?;
        let ledger_path = paths.ledger_file(name);

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        let mut session = Self {
            paths,
            settings,
            ledger_path,
            audit,
            diagnostics: Vec::new(),
            ledger: Ledger::new(),
        };

        if is_regular_file(&session.ledger_path) {
            let path = session.ledger_path.clone();
            session.replace_from(&path)?;
        }

        Ok(session)
    }

    /// Replace the in-memory ledger from a file, collecting diagnostics
    ///
    /// Returns the number of lines skipped.
    pub fn replace_from(&mut self, path: &Path) -> TrackerResult<usize> {
        let mut collected = CollectingSink::new();

        let report = match self.audit.as_mut() {
            Some(logger) => self
                .ledger
                .load(path, &mut Tee::new(&mut collected, logger))?,
            None => self
                .ledger
                .load(path, &mut Tee::new(&mut collected, &mut NullSink))?,
        };

        self.diagnostics.extend(collected.into_inner());
        Ok(report.skipped)
    }

    /// Write the in-memory ledger back to the working file
    pub fn persist(&self) -> TrackerResult<()> {
        self.ledger.save(&self.ledger_path)
    }

    /// Append to the audit log if auditing is enabled
    ///
    /// Queued skipped-line entries are written first.
    pub fn audit(&mut self, entry: AuditEntry) -> TrackerResult<()> {
        match self.audit.as_mut() {
            Some(logger) => {
                logger.flush_pending()?;
                logger.log(&entry)
            }
            None => Ok(()),
        }
    }

    /// Lines skipped by every load in this session
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take the collected diagnostics, leaving none behind
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }
}
