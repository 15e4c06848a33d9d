//! Violation value object
//!
//! Each variant belongs to exactly one rule and carries the data its message
//! needs. `message_id` is the stable kind shared with the original rule set
//! (`invalidSrc`, `forbidden`, ...).

use std::fmt;

use serde::Serialize;

use super::RuleId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Source root is missing or not a directory.
    InvalidSrc { src: String },
    MissingRequired { name: String, src: String },
    NotAllowed {
        name: String,
        src: String,
        allowed: Vec<String>,
    },
    DeprecatedLayer { name: String },
    MissingPublicApi {
        layer: String,
        slice: String,
        filename: String,
    },
    InvalidPublicApi {
        layer: String,
        slice: String,
        file: String,
        filename: String,
    },
    LayerPublicApi { layer: String, filename: String },
    UiInApp { layer: String, segment: String },
    HigherLevelImport { imported: String, current: String },
    CrossSliceImport { import_path: String, layer: String },
}

impl Violation {
    pub fn rule(&self) -> RuleId {
        match self {
            Violation::InvalidSrc { .. }
            | Violation::MissingRequired { .. }
            | Violation::NotAllowed { .. } => RuleId::FsdLayers,
            Violation::DeprecatedLayer { .. } => RuleId::NoProcessesLayer,
            Violation::MissingPublicApi { .. } | Violation::InvalidPublicApi { .. } => {
                RuleId::PublicApi
            }
            Violation::LayerPublicApi { .. } => RuleId::NoLayerPublicApi,
            Violation::UiInApp { .. } => RuleId::NoUiInApp,
            Violation::HigherLevelImport { .. } => RuleId::NoHigherLevelImports,
            Violation::CrossSliceImport { .. } => RuleId::NoCrossSliceImports,
        }
    }

    pub fn message_id(&self) -> &'static str {
        match self {
            Violation::InvalidSrc { .. } => "invalidSrc",
            Violation::MissingRequired { .. } => "missingRequired",
            Violation::NotAllowed { .. } => "notAllowed",
            Violation::MissingPublicApi { .. } => "missingPublicApi",
            Violation::InvalidPublicApi { .. } => "invalidPublicApi",
            Violation::DeprecatedLayer { .. }
            | Violation::LayerPublicApi { .. }
            | Violation::UiInApp { .. }
            | Violation::HigherLevelImport { .. }
            | Violation::CrossSliceImport { .. } => "forbidden",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::InvalidSrc { src } => write!(
                f,
                "Source directory \"{src}\" does not exist or is not a directory."
            ),
            Violation::MissingRequired { name, src } => {
                write!(f, "Required FSD layer \"{name}\" is missing in {src}.")
            }
            Violation::NotAllowed { name, src, allowed } => write!(
                f,
                "FSD layer \"{name}\" is not allowed in {src}. Allowed: {}.",
                allowed.join(", ")
            ),
            Violation::DeprecatedLayer { name } => write!(
                f,
                "Do not use a `{name}` folder inside src (deprecated layer)."
            ),
            Violation::MissingPublicApi {
                layer,
                slice,
                filename,
            } => write!(
                f,
                "Slice \"{slice}\" in layer \"{layer}\" is missing a public API file ({filename})."
            ),
            Violation::InvalidPublicApi {
                layer,
                slice,
                file,
                filename,
            } => write!(
                f,
                "Slice \"{slice}\" in layer \"{layer}\" has an invalid public API file \"{file}\". Expected {filename}."
            ),
            Violation::LayerPublicApi { layer, filename } => write!(
                f,
                "Do not place a layer-level public API file \"{filename}\" inside layer \"{layer}\"."
            ),
            Violation::UiInApp { layer, segment } => write!(
                f,
                "Do not place \"{segment}\" segment inside the \"{layer}\" layer."
            ),
            Violation::HigherLevelImport { imported, current } => write!(
                f,
                "Import from higher layer \"{imported}\" is forbidden in \"{current}\" file."
            ),
            Violation::CrossSliceImport { import_path, layer } => write!(
                f,
                "Cross-slice import \"{import_path}\" is forbidden inside the same layer \"{layer}\"."
            ),
        }
    }
}
