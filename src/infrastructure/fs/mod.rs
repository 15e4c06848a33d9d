//! File system infrastructure
//!
//! Implementations of the `FileSystem` port.

mod local;
mod memory;

pub use local::LocalFs;
pub use memory::MemoryFs;
