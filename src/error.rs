//! Error types for Strata
//!
//! Uses `thiserror` for library errors. Violations are never errors: they flow
//! through a `ReportSink`. These variants cover configuration and I/O only.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Strata operations
pub type StrataResult<T> = Result<T, StrataError>;

/// Main error type for Strata operations
#[derive(Error, Debug)]
pub enum StrataError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has wrongly typed values
    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Config file contains a key the schema does not know
    #[error("unknown configuration key '{key}' in {file}{}", .suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
    UnknownConfigKey {
        key: String,
        file: PathBuf,
        suggestion: Option<String>,
    },

    /// A layer list names the same layer twice
    #[error("rule '{rule}' lists layer '{layer}' more than once")]
    DuplicateLayer { rule: String, layer: String },

    /// Rule identifier not in the catalogue
    #[error("unknown rule '{name}'")]
    UnknownRule { name: String },
}
