//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod pattern_matcher;
pub mod report_sink;

pub use file_system::{EntryKind, FileSystem, FsError, FsResult};
pub use pattern_matcher::{PatternError, PatternMatcher};
pub use report_sink::ReportSink;
