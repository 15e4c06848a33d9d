//! Import boundary enforcer
//!
//! Per-file checks of import specifiers against the layer order
//! (`no-higher-level-imports`) and slice isolation (`no-cross-slice-imports`).
//!
//! A checker is prepared once per file. Preparation returns `None` when the
//! file is outside the modeled layers or ignored, in which case the file's
//! imports are never looked at. Evaluating a single import never fails: a
//! pattern fault only means the specifier is not exempt.

use std::path::Path;

use crate::domain::ports::{PatternMatcher, ReportSink};
use crate::domain::services::classifier::{classify_import, classify_path};
use crate::domain::services::structure::DEFAULT_SRC;
use crate::domain::value_objects::{
    Coordinate, IgnorePatterns, LayerOrder, Location, RuleId, Violation,
};

/// Settings for `no-higher-level-imports`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HigherLevelImportsSettings {
    pub src: String,
    pub layers: LayerOrder,
    /// Matched against the file path and against each specifier.
    pub ignore: IgnorePatterns,
}

impl Default for HigherLevelImportsSettings {
    fn default() -> Self {
        Self {
            src: DEFAULT_SRC.to_string(),
            layers: LayerOrder::default(),
            ignore: IgnorePatterns::empty(),
        }
    }
}

/// Settings for `no-cross-slice-imports`. `layers` is the isolation set,
/// its order is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossSliceImportsSettings {
    pub src: String,
    pub layers: LayerOrder,
    pub ignore: IgnorePatterns,
}

impl Default for CrossSliceImportsSettings {
    fn default() -> Self {
        Self {
            src: DEFAULT_SRC.to_string(),
            layers: LayerOrder::isolated(),
            ignore: IgnorePatterns::empty(),
        }
    }
}

/// Something that looks at every import of one file.
pub trait ImportCheck {
    fn rule(&self) -> RuleId;

    fn check_import(&self, specifier: &str, location: &Location, sink: &mut dyn ReportSink);
}

fn path_text(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// `no-higher-level-imports` prepared for one file.
pub struct HigherLevelImports<'a> {
    settings: &'a HigherLevelImportsSettings,
    matcher: &'a dyn PatternMatcher,
    current: String,
    position: usize,
}

impl<'a> HigherLevelImports<'a> {
    pub fn for_file(
        settings: &'a HigherLevelImportsSettings,
        matcher: &'a dyn PatternMatcher,
        path: &Path,
    ) -> Option<Self> {
        let text = path_text(path);
        if settings.ignore.is_ignored(&text, matcher) {
            tracing::trace!(file = %text, "file ignored by no-higher-level-imports");
            return None;
        }
        let Coordinate { layer, .. } = classify_path(&text, &settings.src)?;
        let position = settings.layers.position(&layer)?;
        Some(Self {
            settings,
            matcher,
            current: layer,
            position,
        })
    }
}

impl ImportCheck for HigherLevelImports<'_> {
    fn rule(&self) -> RuleId {
        RuleId::NoHigherLevelImports
    }

    fn check_import(&self, specifier: &str, location: &Location, sink: &mut dyn ReportSink) {
        if self.settings.ignore.is_ignored(specifier, self.matcher) {
            tracing::trace!(specifier, "import ignored");
            return;
        }
        let Some(imported) = classify_import(specifier, &self.settings.src) else {
            return;
        };
        let Some(imported_position) = self.settings.layers.position(&imported.layer) else {
            return;
        };

        if imported_position < self.position {
            tracing::trace!(specifier, current = %self.current, "upward import");
            sink.report(
                location,
                Violation::HigherLevelImport {
                    imported: imported.layer,
                    current: self.current.clone(),
                },
            );
        }
    }
}

/// `no-cross-slice-imports` prepared for one file that sits inside a slice.
pub struct CrossSliceImports<'a> {
    settings: &'a CrossSliceImportsSettings,
    matcher: &'a dyn PatternMatcher,
    layer: String,
    slice: String,
}

impl<'a> CrossSliceImports<'a> {
    pub fn for_file(
        settings: &'a CrossSliceImportsSettings,
        matcher: &'a dyn PatternMatcher,
        path: &Path,
    ) -> Option<Self> {
        let text = path_text(path);
        if settings.ignore.is_ignored(&text, matcher) {
            tracing::trace!(file = %text, "file ignored by no-cross-slice-imports");
            return None;
        }
        let Coordinate { layer, slice } = classify_path(&text, &settings.src)?;
        let slice = slice?;
        if !settings.layers.contains(&layer) {
            return None;
        }
        Some(Self {
            settings,
            matcher,
            layer,
            slice,
        })
    }
}

impl ImportCheck for CrossSliceImports<'_> {
    fn rule(&self) -> RuleId {
        RuleId::NoCrossSliceImports
    }

    fn check_import(&self, specifier: &str, location: &Location, sink: &mut dyn ReportSink) {
        if self.settings.ignore.is_ignored(specifier, self.matcher) {
            tracing::trace!(specifier, "import ignored");
            return;
        }
        let Some(Coordinate {
            layer,
            slice: Some(slice),
        }) = classify_import(specifier, &self.settings.src)
        else {
            return;
        };

        if layer == self.layer && slice != self.slice {
            tracing::trace!(specifier, layer = %self.layer, "cross-slice import");
            sink.report(
                location,
                Violation::CrossSliceImport {
                    import_path: specifier.to_string(),
                    layer,
                },
            );
        }
    }
}
