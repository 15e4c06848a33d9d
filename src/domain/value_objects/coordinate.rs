//! Layer/slice coordinates and report locations

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Position of a file or import inside the layered tree.
///
/// `slice` is `None` for layer-root files (`src/widgets/index.ts`) and for
/// imports that name only a layer (`shared`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    pub layer: String,
    pub slice: Option<String>,
}

impl Coordinate {
    pub fn new(layer: impl Into<String>, slice: Option<String>) -> Self {
        Self {
            layer: layer.into(),
            slice,
        }
    }

}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slice {
            Some(slice) => write!(f, "{}/{}", self.layer, slice),
            None => f.write_str(&self.layer),
        }
    }
}

/// Where a violation was detected: the analyzed file, plus the position of
/// the import specifier for boundary violations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Location {
    pub file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl Location {
    /// Whole-file location (structural audits report here).
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: path.into(),
            line: None,
            column: None,
        }
    }

    pub fn at(path: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: path.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(col)) => write!(f, "{}:{}:{}", self.file.display(), line, col),
            (Some(line), None) => write!(f, "{}:{}", self.file.display(), line),
            _ => write!(f, "{}", self.file.display()),
        }
    }
}
