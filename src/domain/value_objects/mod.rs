//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod coordinate;
mod ignore_patterns;
mod layer_order;
mod rule_id;
mod violation;

pub use coordinate::{Coordinate, Location};
pub use ignore_patterns::IgnorePatterns;
pub use layer_order::{DuplicateLayer, LayerOrder, DEFAULT_ISOLATED_LAYERS, DEFAULT_LAYERS};
pub use rule_id::{RuleId, RuleKind};
pub use violation::Violation;
