//! Strata - layer and slice conformance engine for feature-sliced source trees
//!
//! Strata classifies source files and import specifiers into layer/slice
//! coordinates, forbids upward and cross-slice imports, and audits the
//! directory structure of the source root once per analysis session.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{CheckOptions, CheckUseCase, Diagnostic, Linter, Report};
pub use config::{Config, Level, Preset, RuleSet};
pub use domain::ports::{FileSystem, PatternMatcher, ReportSink};
pub use domain::services::{classify_import, classify_path, SessionGate, SessionRegistry};
pub use domain::value_objects::{Coordinate, LayerOrder, Location, RuleId, Violation};
pub use error::{StrataError, StrataResult};
pub use infrastructure::{scan_imports, GlobMatcher, LocalFs, MemoryFs, SourceWalker};
