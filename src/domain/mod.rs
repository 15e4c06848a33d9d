//! Domain Layer
//!
//! This is the core of Strata - the layer/slice conformance rules without
//! direct I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (LayerOrder, Coordinate, RuleId, Violation)
//! - `services/` - Classifier, structural audits, import boundary checks, session gate
//! - `ports/` - Capabilities supplied by the host (filesystem, glob matching, report sink)
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - every filesystem access goes through the `FileSystem` port
//! 2. **Faults are values** - capabilities return `Result`s that call sites absorb explicitly
//! 3. **Violations are reports** - nothing in this layer signals a violation by error

pub mod ports;
pub mod services;
pub mod value_objects;
