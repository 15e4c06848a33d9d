//! Event types for `--json` output.

use std::path::Path;

use serde::Serialize;
use strata::application::Diagnostic;
use strata::config::Level;
use strata::domain::value_objects::{RuleId, Violation};

/// Emitted before any other event.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// One finding.
#[derive(Debug, Clone, Serialize)]
pub struct ViolationEvent<'a> {
    pub event: &'static str,
    pub rule: RuleId,
    pub level: Level,
    pub file: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    pub message_id: &'static str,
    pub message: String,
    pub data: &'a Violation,
}

impl<'a> ViolationEvent<'a> {
    pub fn new(diagnostic: &'a Diagnostic) -> Self {
        Self {
            event: "violation",
            rule: diagnostic.rule,
            level: diagnostic.level,
            file: diagnostic.location.path(),
            line: diagnostic.location.line,
            column: diagnostic.location.column,
            message_id: diagnostic.violation.message_id(),
            message: diagnostic.violation.to_string(),
            data: &diagnostic.violation,
        }
    }
}

/// Emitted last, with totals.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
}

/// Emitted when the command fails before producing results.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}
