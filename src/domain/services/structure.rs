//! Structural auditor
//!
//! Whole-tree checks of the on-disk layout: which entries the source root may
//! and must contain, the deprecated `processes` layer, slice public entry
//! points, layer-root entry points, and `ui` inside `app`.
//!
//! Every audit is gated by the `SessionGate` and runs at most once per
//! session. Every filesystem call is individually fault tolerant: a failed
//! stat or listing skips that entry (or that sub-check) and is logged at
//! debug level, never propagated.

use std::path::{Path, PathBuf};

use crate::domain::ports::{EntryKind, FileSystem, PatternMatcher, ReportSink};
use crate::domain::services::SessionGate;
use crate::domain::value_objects::{IgnorePatterns, LayerOrder, Location, RuleId, Violation};

pub const DEFAULT_SRC: &str = "src";
pub const DEFAULT_PUBLIC_API_FILENAME: &str = "index.ts";
/// Base name of slice entry files, whatever the configured filename.
pub const PUBLIC_API_STEM: &str = "index";
pub const DEFAULT_ALLOWED_ENTRIES: &[&str] = &[
    "app", "pages", "widgets", "features", "entities", "shared", "main.ts",
];
pub const DEPRECATED_LAYER: &str = "processes";
pub const APP_LAYER: &str = "app";
pub const UI_SEGMENT: &str = "ui";

/// Settings for `fsd-layers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerStructureSettings {
    pub src: String,
    pub required: Vec<String>,
    pub allowed: Vec<String>,
    pub ignore: IgnorePatterns,
}

impl Default for LayerStructureSettings {
    fn default() -> Self {
        Self {
            src: DEFAULT_SRC.to_string(),
            required: Vec::new(),
            allowed: DEFAULT_ALLOWED_ENTRIES.iter().map(|s| s.to_string()).collect(),
            ignore: IgnorePatterns::empty(),
        }
    }
}

/// Settings for rules that only need the source root
/// (`no-processes-layer`, `no-ui-in-app`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrcSettings {
    pub src: String,
}

impl Default for SrcSettings {
    fn default() -> Self {
        Self {
            src: DEFAULT_SRC.to_string(),
        }
    }
}

/// Settings for `public-api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicApiSettings {
    pub src: String,
    pub layers: LayerOrder,
    pub filename: String,
    /// Matched against slice directory names.
    pub ignore: IgnorePatterns,
}

impl Default for PublicApiSettings {
    fn default() -> Self {
        Self {
            src: DEFAULT_SRC.to_string(),
            layers: LayerOrder::default(),
            filename: DEFAULT_PUBLIC_API_FILENAME.to_string(),
            ignore: IgnorePatterns::empty(),
        }
    }
}

/// Settings for `no-layer-public-api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerPublicApiSettings {
    pub src: String,
    pub filename: String,
    /// Matched against layer directory names.
    pub ignore: IgnorePatterns,
}

impl Default for LayerPublicApiSettings {
    fn default() -> Self {
        Self {
            src: DEFAULT_SRC.to_string(),
            filename: DEFAULT_PUBLIC_API_FILENAME.to_string(),
            ignore: IgnorePatterns::empty(),
        }
    }
}

/// One structural audit together with its settings.
#[derive(Debug, Clone, Copy)]
pub enum StructuralRule<'s> {
    Layers(&'s LayerStructureSettings),
    DeprecatedLayer(&'s SrcSettings),
    PublicApi(&'s PublicApiSettings),
    LayerPublicApi(&'s LayerPublicApiSettings),
    UiInApp(&'s SrcSettings),
}

impl StructuralRule<'_> {
    pub fn id(&self) -> RuleId {
        match self {
            StructuralRule::Layers(_) => RuleId::FsdLayers,
            StructuralRule::DeprecatedLayer(_) => RuleId::NoProcessesLayer,
            StructuralRule::PublicApi(_) => RuleId::PublicApi,
            StructuralRule::LayerPublicApi(_) => RuleId::NoLayerPublicApi,
            StructuralRule::UiInApp(_) => RuleId::NoUiInApp,
        }
    }
}

/// Gate state for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    Ran,
    Skipped,
}

/// Runs structural audits against a tree rooted at `base`.
pub struct StructuralAuditor<'a> {
    fs: &'a dyn FileSystem,
    matcher: &'a dyn PatternMatcher,
    base: PathBuf,
}

impl<'a> StructuralAuditor<'a> {
    /// `base` is the directory the configured `src` is resolved against.
    pub fn new(fs: &'a dyn FileSystem, matcher: &'a dyn PatternMatcher, base: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            matcher,
            base: base.into(),
        }
    }

    /// Run `rule` unless it already ran in this session.
    pub fn run_gated(
        &self,
        gate: &SessionGate,
        rule: StructuralRule<'_>,
        location: &Location,
        sink: &mut dyn ReportSink,
    ) -> AuditOutcome {
        if !gate.run_once(rule.id()) {
            return AuditOutcome::Skipped;
        }
        tracing::debug!(rule = %rule.id(), "running structural audit");
        self.run(rule, location, sink);
        AuditOutcome::Ran
    }

    /// Run `rule` unconditionally.
    pub fn run(&self, rule: StructuralRule<'_>, location: &Location, sink: &mut dyn ReportSink) {
        match rule {
            StructuralRule::Layers(s) => self.audit_layers(s, location, sink),
            StructuralRule::DeprecatedLayer(s) => self.audit_deprecated_layer(s, location, sink),
            StructuralRule::PublicApi(s) => self.audit_public_api(s, location, sink),
            StructuralRule::LayerPublicApi(s) => self.audit_layer_public_api(s, location, sink),
            StructuralRule::UiInApp(s) => self.audit_ui_in_app(s, location, sink),
        }
    }

    fn root(&self, src: &str) -> PathBuf {
        self.base.join(src)
    }

    fn list(&self, dir: &Path) -> Option<Vec<String>> {
        match self.fs.list_entries(dir) {
            Ok(entries) => Some(entries),
            Err(err) => {
                tracing::debug!(path = %dir.display(), error = %err, "cannot list directory, skipping");
                None
            }
        }
    }

    fn kind(&self, path: &Path) -> Option<EntryKind> {
        match self.fs.stat(path) {
            Ok(kind) => Some(kind),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "cannot stat entry, skipping");
                None
            }
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.kind(path) == Some(EntryKind::Directory)
    }

    /// Immediate subdirectories of `dir` whose names are not ignored.
    fn subdirectories(&self, dir: &Path, ignore: &IgnorePatterns) -> Vec<String> {
        self.list(dir)
            .unwrap_or_default()
            .into_iter()
            .filter(|name| !ignore.is_ignored(name, self.matcher))
            .filter(|name| self.is_dir(&dir.join(name)))
            .collect()
    }

    pub fn audit_layers(
        &self,
        settings: &LayerStructureSettings,
        location: &Location,
        sink: &mut dyn ReportSink,
    ) {
        let root = self.root(&settings.src);
        if !self.is_dir(&root) {
            if !settings.required.is_empty() || !settings.allowed.is_empty() {
                sink.report(
                    location,
                    Violation::InvalidSrc {
                        src: settings.src.clone(),
                    },
                );
            }
            return;
        }

        let Some(entries) = self.list(&root) else {
            return;
        };
        let present: Vec<String> = entries
            .into_iter()
            .filter(|name| !settings.ignore.is_ignored(name, self.matcher))
            .filter(|name| {
                matches!(
                    self.kind(&root.join(name)),
                    Some(EntryKind::File | EntryKind::Directory)
                )
            })
            .collect();

        for required in &settings.required {
            if !present.contains(required) {
                sink.report(
                    location,
                    Violation::MissingRequired {
                        name: required.clone(),
                        src: settings.src.clone(),
                    },
                );
            }
        }

        if settings.allowed.is_empty() {
            return;
        }
        for entry in present {
            if !settings.allowed.contains(&entry) {
                sink.report(
                    location,
                    Violation::NotAllowed {
                        name: entry,
                        src: settings.src.clone(),
                        allowed: settings.allowed.clone(),
                    },
                );
            }
        }
    }

    pub fn audit_deprecated_layer(
        &self,
        settings: &SrcSettings,
        location: &Location,
        sink: &mut dyn ReportSink,
    ) {
        let Some(entries) = self.list(&self.root(&settings.src)) else {
            return;
        };
        if entries.iter().any(|entry| entry == DEPRECATED_LAYER) {
            sink.report(
                location,
                Violation::DeprecatedLayer {
                    name: DEPRECATED_LAYER.to_string(),
                },
            );
        }
    }

    pub fn audit_public_api(
        &self,
        settings: &PublicApiSettings,
        location: &Location,
        sink: &mut dyn ReportSink,
    ) {
        let root = self.root(&settings.src);
        if !self.is_dir(&root) {
            // fsd-layers owns the missing-root diagnostic
            return;
        }

        for layer in settings.layers.iter() {
            let layer_path = root.join(layer);
            if !self.is_dir(&layer_path) {
                continue;
            }

            for slice in self.subdirectories(&layer_path, &settings.ignore) {
                let Some(contents) = self.list(&layer_path.join(&slice)) else {
                    continue;
                };

                if !contents.contains(&settings.filename) {
                    sink.report(
                        location,
                        Violation::MissingPublicApi {
                            layer: layer.to_string(),
                            slice: slice.clone(),
                            filename: settings.filename.clone(),
                        },
                    );
                }

                let strays = contents.iter().filter(|name| {
                    **name != settings.filename && file_stem(name) == PUBLIC_API_STEM
                });
                for file in strays {
                    sink.report(
                        location,
                        Violation::InvalidPublicApi {
                            layer: layer.to_string(),
                            slice: slice.clone(),
                            file: file.clone(),
                            filename: settings.filename.clone(),
                        },
                    );
                }
            }
        }
    }

    pub fn audit_layer_public_api(
        &self,
        settings: &LayerPublicApiSettings,
        location: &Location,
        sink: &mut dyn ReportSink,
    ) {
        let root = self.root(&settings.src);
        if !self.is_dir(&root) {
            return;
        }

        for layer in self.subdirectories(&root, &settings.ignore) {
            let entry = root.join(&layer).join(&settings.filename);
            if self.fs.is_file(&entry) {
                sink.report(
                    location,
                    Violation::LayerPublicApi {
                        layer,
                        filename: settings.filename.clone(),
                    },
                );
            }
        }
    }

    pub fn audit_ui_in_app(
        &self,
        settings: &SrcSettings,
        location: &Location,
        sink: &mut dyn ReportSink,
    ) {
        let app = self.root(&settings.src).join(APP_LAYER);
        if !self.is_dir(&app) {
            return;
        }
        let Some(entries) = self.list(&app) else {
            return;
        };
        let has_ui_dir = entries
            .iter()
            .any(|entry| entry == UI_SEGMENT && self.is_dir(&app.join(entry)));
        if has_ui_dir {
            sink.report(
                location,
                Violation::UiInApp {
                    layer: APP_LAYER.to_string(),
                    segment: UI_SEGMENT.to_string(),
                },
            );
        }
    }
}

/// Name without its last extension (`index.ts` -> `index`).
fn file_stem(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}
