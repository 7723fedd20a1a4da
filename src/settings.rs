//! Startup preferences loaded from a TOML file.

use crate::view::{SortOrder, ViewSettings};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User preferences for a session.
///
/// ```toml
/// sort_order = "ascending"
/// show_history = false
/// log_file = "tictactoe.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Initial order of the move list.
    #[serde(default)]
    #[getter(copy)]
    sort_order: SortOrder,

    /// Whether the move list starts visible.
    #[serde(default = "default_show_history")]
    #[getter(copy)]
    show_history: bool,

    /// Where tracing output is written while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_show_history() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::default(),
            show_history: default_show_history(),
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(
            sort_order = %settings.sort_order,
            show_history = settings.show_history,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Parses settings from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Forces oldest-first move order.
    pub fn with_ascending(self) -> Self {
        Self {
            sort_order: SortOrder::Ascending,
            ..self
        }
    }

    /// Starts with the move list hidden.
    pub fn with_hidden_history(self) -> Self {
        Self {
            show_history: false,
            ..self
        }
    }

    /// Overrides the log file.
    pub fn with_log_file(self, log_file: PathBuf) -> Self {
        Self { log_file, ..self }
    }

    /// Initial cosmetic settings for the view.
    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings::new(self.sort_order, self.show_history)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_parses_all_keys() {
        let settings = Settings::from_toml(
            "sort_order = \"ascending\"\nshow_history = false\nlog_file = \"game.log\"\n",
        )
        .unwrap();
        assert_eq!(settings.sort_order(), SortOrder::Ascending);
        assert!(!settings.show_history());
        assert_eq!(settings.log_file(), &PathBuf::from("game.log"));
    }

    #[test]
    fn test_unknown_sort_order_rejected() {
        let err = Settings::from_toml("sort_order = \"sideways\"").unwrap_err();
        assert!(err.message.contains("Failed to parse settings"));
    }

    #[test]
    fn test_overrides() {
        let view = Settings::default()
            .with_ascending()
            .with_hidden_history()
            .view_settings();
        assert_eq!(view, ViewSettings::new(SortOrder::Ascending, false));
    }
}
