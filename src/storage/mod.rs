//! Storage layer for the expense tracker
//!
//! Provides the plain-text record format and atomic file writes used by the
//! ledger's save and load operations.

pub mod file_io;
pub mod line_format;

pub use file_io::{is_regular_file, open_reader, write_atomic};
pub use line_format::{encode_line, parse_line, LineParseError};
