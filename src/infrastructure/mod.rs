//! Infrastructure Layer
//!
//! Concrete implementations of domain ports, plus the host-side pieces
//! that feed the engine: walking the source tree and pulling import
//! specifiers out of source text.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `glob` - `PatternMatcher` on top of `globset`
//! - `source/` - Source walker and import scanner

pub mod fs;
pub mod glob;
pub mod source;

// Re-export for convenience
pub use fs::{LocalFs, MemoryFs};
pub use glob::GlobMatcher;
pub use source::{scan_imports, ImportRef, SourceWalker};
