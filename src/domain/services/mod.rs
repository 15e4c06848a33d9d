//! Domain Services
//!
//! The conformance engine itself: classification, the run-once gate,
//! structural audits and per-file import checks. Everything here talks to
//! the outside world only through the ports.

pub mod boundary;
pub mod classifier;
mod session_gate;
pub mod structure;

pub use boundary::{
    CrossSliceImports, CrossSliceImportsSettings, HigherLevelImports, HigherLevelImportsSettings,
    ImportCheck,
};
pub use classifier::{classify_import, classify_path, is_local_specifier};
pub use session_gate::{SessionGate, SessionId, SessionRegistry};
pub use structure::{
    AuditOutcome, LayerPublicApiSettings, LayerStructureSettings, PublicApiSettings, SrcSettings,
    StructuralAuditor, StructuralRule,
};
