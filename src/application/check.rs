//! Check Use Case
//!
//! Drives the engine over a set of source files: walk, read, scan imports,
//! then run the enabled structural audits (once per session) and boundary
//! checks for each file.

use std::path::{Path, PathBuf};

use crate::config::RuleSet;
use crate::domain::ports::{FileSystem, PatternMatcher, ReportSink};
use crate::domain::services::{
    CrossSliceImports, HigherLevelImports, ImportCheck, SessionGate, StructuralAuditor,
    StructuralRule,
};
use crate::domain::value_objects::{Location, RuleId};
use crate::infrastructure::source::{scan_imports, ImportRef, SourceWalker};

use super::report::{LevelSink, Report};

/// Per-file engine entry point.
///
/// Holds everything one analysis session shares: resolved rules, the
/// capabilities, and the session gate.
pub struct Linter<'a> {
    rules: &'a RuleSet,
    fs: &'a dyn FileSystem,
    matcher: &'a dyn PatternMatcher,
    gate: &'a SessionGate,
    base: PathBuf,
}

impl<'a> Linter<'a> {
    /// `base` is the project root: structural roots resolve against it and
    /// file paths are matched relative to it.
    pub fn new(
        rules: &'a RuleSet,
        fs: &'a dyn FileSystem,
        matcher: &'a dyn PatternMatcher,
        gate: &'a SessionGate,
        base: impl Into<PathBuf>,
    ) -> Self {
        Self {
            rules,
            fs,
            matcher,
            gate,
            base: base.into(),
        }
    }

    fn structural_rule(&self, rule: RuleId) -> Option<StructuralRule<'a>> {
        let rules = self.rules;
        Some(match rule {
            RuleId::FsdLayers => StructuralRule::Layers(&rules.layers),
            RuleId::NoProcessesLayer => StructuralRule::DeprecatedLayer(&rules.processes_layer),
            RuleId::PublicApi => StructuralRule::PublicApi(&rules.public_api),
            RuleId::NoLayerPublicApi => StructuralRule::LayerPublicApi(&rules.layer_public_api),
            RuleId::NoUiInApp => StructuralRule::UiInApp(&rules.ui_in_app),
            RuleId::NoHigherLevelImports | RuleId::NoCrossSliceImports => return None,
        })
    }

    /// Import checks that apply to `path`; empty when the file is outside
    /// the modeled layers or ignored.
    fn import_checks(&self, path: &Path) -> Vec<Box<dyn ImportCheck + 'a>> {
        let mut checks: Vec<Box<dyn ImportCheck + 'a>> = Vec::new();
        if self.rules.is_enabled(RuleId::NoHigherLevelImports) {
            if let Some(check) =
                HigherLevelImports::for_file(&self.rules.higher_level_imports, self.matcher, path)
            {
                checks.push(Box::new(check));
            }
        }
        if self.rules.is_enabled(RuleId::NoCrossSliceImports) {
            if let Some(check) =
                CrossSliceImports::for_file(&self.rules.cross_slice_imports, self.matcher, path)
            {
                checks.push(Box::new(check));
            }
        }
        checks
    }

    /// `path` relative to the project root, without a leading `./`.
    pub fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        let path = path.strip_prefix(&self.base).unwrap_or(path);
        path.strip_prefix(".").unwrap_or(path)
    }

    /// Run every enabled rule for one file.
    pub fn check_file(&self, path: &Path, imports: &[ImportRef], sink: &mut dyn ReportSink) {
        let path = self.relative(path);

        let auditor = StructuralAuditor::new(self.fs, self.matcher, &self.base);
        let file_location = Location::file(path);
        for rule in self.rules.enabled() {
            if let Some(structural) = self.structural_rule(rule) {
                auditor.run_gated(self.gate, structural, &file_location, sink);
            }
        }

        let checks = self.import_checks(path);
        if checks.is_empty() {
            return;
        }
        for import in imports {
            let location = Location::at(path, import.line, import.column);
            tracing::trace!(file = %path.display(), specifier = %import.specifier, "checking import");
            for check in &checks {
                check.check_import(&import.specifier, &location, sink);
            }
        }
    }
}

/// Options for the check operation
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Files or directories to analyze
    pub paths: Vec<PathBuf>,
    /// Project root
    pub base: PathBuf,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from(".")],
            base: PathBuf::from("."),
        }
    }
}

/// Check Use Case
///
/// Walks the requested paths and runs the linter over every source file
/// in one session.
pub struct CheckUseCase<'a> {
    rules: &'a RuleSet,
    walker: SourceWalker,
    fs: &'a dyn FileSystem,
    matcher: &'a dyn PatternMatcher,
}

impl<'a> CheckUseCase<'a> {
    pub fn new(
        rules: &'a RuleSet,
        walker: SourceWalker,
        fs: &'a dyn FileSystem,
        matcher: &'a dyn PatternMatcher,
    ) -> Self {
        Self {
            rules,
            walker,
            fs,
            matcher,
        }
    }

    /// Files the run would analyze.
    pub fn files(&self, options: &CheckOptions) -> Vec<PathBuf> {
        self.walker.walk(&options.paths)
    }

    /// Analyze `options.paths` with a fresh session gate.
    pub fn execute(&self, options: &CheckOptions) -> Report {
        let gate = SessionGate::new();
        let linter = Linter::new(self.rules, self.fs, self.matcher, &gate, &options.base);
        let root = std::fs::canonicalize(&options.base).ok();
        let mut report = Report::new();

        for file in self.files(options) {
            let imports = match self.fs.read_to_string(&file) {
                Ok(source) => scan_imports(&source),
                Err(err) => {
                    tracing::debug!(path = %file.display(), error = %err, "cannot read source, checking structure only");
                    Vec::new()
                }
            };
            report.files_checked += 1;
            let mut sink = LevelSink::new(self.rules, &mut report);
            let rooted = root.as_deref().and_then(|root| under_root(root, &file));
            linter.check_file(rooted.as_deref().unwrap_or(&file), &imports, &mut sink);
        }

        tracing::info!(
            files = report.files_checked,
            errors = report.errors(),
            warnings = report.warnings(),
            "check finished"
        );
        report
    }
}

/// `file` relative to the canonical project `root`. Absolute paths and `..`
/// segments resolve; the file name itself is kept even if it is a symlink.
fn under_root(root: &Path, file: &Path) -> Option<PathBuf> {
    let parent = file
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let resolved = std::fs::canonicalize(parent).ok()?.join(file.file_name()?);
    resolved.strip_prefix(root).ok().map(Path::to_path_buf)
}
