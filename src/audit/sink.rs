//! Diagnostic reporting for ledger loads
//!
//! The ledger never prints. When a line is skipped during load it hands a
//! [`Diagnostic`] to whatever [`DiagnosticSink`] the caller supplied.

use std::fmt;

use crate::storage::LineParseError;

/// A non-fatal report about one skipped input line
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 1-based line number in the source
    pub line_number: usize,
    /// The raw line text
    pub line: String,
    /// Why the line was skipped
    pub error: LineParseError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Skipping line {}: {} ({:?})",
            self.line_number, self.error, self.line
        )
    }
}

/// Receiver for load diagnostics
pub trait DiagnosticSink {
    /// Report a skipped line
    fn report(&mut self, diagnostic: &Diagnostic);
}

/// Sink that keeps every diagnostic in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics received so far, in report order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: &Diagnostic) {}
}

/// Forwards every diagnostic to two sinks
pub struct Tee<'a> {
    first: &'a mut dyn DiagnosticSink,
    second: &'a mut dyn DiagnosticSink,
}

impl<'a> Tee<'a> {
    pub fn new(first: &'a mut dyn DiagnosticSink, second: &'a mut dyn DiagnosticSink) -> Self {
        Self { first, second }
    }
}

impl DiagnosticSink for Tee<'_> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.first.report(diagnostic);
        self.second.report(diagnostic);
    }
}
