//! User settings for the expense tracker
//!
//! Persisted as pretty-printed JSON in `config.json`. Every field has a
//! default so older or hand-edited files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::ExpenseOrder;

/// Default ordering for `list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// The order expenses were added in
    #[default]
    Insertion,
    /// Sorted by date
    Date,
    /// Sorted by amount
    Amount,
}

impl ListOrder {
    /// The comparator to sort with, or `None` for insertion order
    pub fn expense_order(&self) -> Option<ExpenseOrder> {
        match self {
            Self::Insertion => None,
            Self::Date => Some(ExpenseOrder::ByDate),
            Self::Amount => Some(ExpenseOrder::ByAmount),
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Working ledger file inside the data directory
    #[serde(default = "default_file")]
    pub default_file: String,

    /// Whether mutating commands are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Ordering used by `list` when no `--sort` is given
    #[serde(default)]
    pub list_order: ListOrder,
}

fn default_file() -> String {
    "expenses.csv".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_file: default_file(),
            audit_enabled: default_audit_enabled(),
            list_order: ListOrder::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_file, "expenses.csv");
        assert!(settings.audit_enabled);
        assert_eq!(settings.list_order, ListOrder::Insertion);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_file = "2024.csv".into();
        settings.list_order = ListOrder::Amount;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_file, "2024.csv");
        assert_eq!(loaded.list_order, ListOrder::Amount);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"audit_enabled": false}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.audit_enabled);
        assert_eq!(loaded.default_file, "expenses.csv");
    }

    #[test]
    fn test_invalid_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(TrackerError::Config(_))
        ));
    }

    #[test]
    fn test_list_order_mapping() {
        assert_eq!(ListOrder::Insertion.expense_order(), None);
        assert_eq!(ListOrder::Date.expense_order(), Some(ExpenseOrder::ByDate));
    }
}
