//! Shared CLI plumbing: errors, exit codes, and input/output helpers.

use crate::config::Config;
use crate::models::KitchenConfig;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was read but rejected
    ValidationError = 1,
    /// Input could not be read or output could not be written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// File system or serialization failure
    Io,
    /// Rejected input
    Validation,
}

impl fmt::Display for CliErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "I/O error"),
            Self::Validation => write!(f, "validation error"),
        }
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CliError {
    /// Failure category, decides the exit code
    pub kind: CliErrorKind,
    /// Message shown to the user
    pub message: String,
}

impl CliError {
    /// File system or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Rejected input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Io => ExitCode::IoError,
            CliErrorKind::Validation => ExitCode::ValidationError,
        }
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the application config, falling back to defaults when the file
/// is missing.
pub fn load_app_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Reads and parses a kitchen config file.
pub fn load_kitchen(path: &Path) -> CliResult<KitchenConfig> {
    let source = fs::read_to_string(path).map_err(|e| {
        CliError::io(format!("Failed to read kitchen config {}: {e}", path.display()))
    })?;
    KitchenConfig::from_json_str(&source).map_err(|e| CliError::validation(format!("{e:#}")))
}

/// Serializes `value` as JSON, pretty-printed when requested.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<String> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::io("x").exit_code().code(), 2);
        assert_eq!(CliError::validation("x").exit_code().code(), 1);
        assert_eq!(ExitCode::Success.code(), 0);
    }

    #[test]
    fn test_error_display_is_message() {
        let err = CliError::validation("Validation failed");
        assert_eq!(err.to_string(), "Validation failed");
        assert_eq!(err.kind.to_string(), "validation error");
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&serde_json::json!({"a": 1}), false).unwrap();
        assert_eq!(json, r#"{"a":1}"#);
    }

    #[test]
    fn test_load_kitchen_missing_file_is_io_error() {
        let err = load_kitchen(Path::new("/nonexistent/kitchen.json")).unwrap_err();
        assert_eq!(err.kind, CliErrorKind::Io);
    }
}
