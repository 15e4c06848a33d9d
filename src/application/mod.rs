//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (services, ports)
//! - Does NOT contain rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CheckUseCase` - Walk sources and run every enabled rule in one session
//! - `Linter` - Per-file entry point for hosts that drive the traversal themselves

pub mod check;
pub mod report;

pub use check::{CheckOptions, CheckUseCase, Linter};
pub use report::{Diagnostic, LevelSink, Report};
