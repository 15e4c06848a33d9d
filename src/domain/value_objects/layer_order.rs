//! Layer order value object
//!
//! An ordered list of distinct layer names. Only relative position matters:
//! a lower index is a more peripheral layer (`app`), a higher index a more
//! central one (`shared`).

use std::fmt;

/// Five architectural layers plus the shared layer, most peripheral first.
pub const DEFAULT_LAYERS: &[&str] = &["app", "pages", "widgets", "features", "entities", "shared"];

/// Layers whose slices must not import each other.
pub const DEFAULT_ISOLATED_LAYERS: &[&str] = &["pages", "widgets", "features", "entities"];

/// Ordered, duplicate-free sequence of layer names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerOrder(Vec<String>);

/// Returned when a layer list names the same layer twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateLayer(pub String);

impl fmt::Display for DuplicateLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate layer '{}'", self.0)
    }
}

impl std::error::Error for DuplicateLayer {}

impl LayerOrder {
    /// Build an order from trimmed names, rejecting duplicates.
    pub fn new<I, S>(layers: I) -> Result<Self, DuplicateLayer>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = Vec::new();
        for layer in layers {
            let name = layer.as_ref().trim().to_string();
            if names.contains(&name) {
                return Err(DuplicateLayer(name));
            }
            names.push(name);
        }
        Ok(Self(names))
    }

    /// Position of `layer`, or `None` when it is not part of the order.
    pub fn position(&self, layer: &str) -> Option<usize> {
        self.0.iter().position(|l| l == layer)
    }

    pub fn contains(&self, layer: &str) -> bool {
        self.position(layer).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The default slice-isolation set.
    pub fn isolated() -> Self {
        Self(DEFAULT_ISOLATED_LAYERS.iter().map(|s| s.to_string()).collect())
    }
}

impl Default for LayerOrder {
    fn default() -> Self {
        Self(DEFAULT_LAYERS.iter().map(|s| s.to_string()).collect())
    }
}
