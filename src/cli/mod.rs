//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the ledger. All user-facing output lives here;
//! the ledger itself never prints.

pub mod audit;
pub mod context;
pub mod entries;
pub mod files;
pub mod report;
pub mod search;

pub use audit::handle_audit_command;
pub use context::Session;
pub use entries::{
    handle_add_command, handle_delete_command, handle_list_command, handle_total_command,
};
pub use files::{handle_load_command, handle_save_command, is_valid_filename, validate_filename};
pub use report::{handle_report_command, ReportCommands};
pub use search::{handle_search_command, SearchCommands};
