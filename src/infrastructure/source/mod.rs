//! Host-side source handling: finding files and their import specifiers.

mod scanner;
mod walker;

pub use scanner::{scan_imports, ImportRef};
pub use walker::{SourceWalker, DEFAULT_EXTENSIONS};
