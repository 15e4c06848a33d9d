//! Collected findings of one run

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::{Level, RuleSet};
use crate::domain::ports::ReportSink;
use crate::domain::value_objects::{Location, RuleId, Violation};

/// A violation together with the rule and severity it was reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule: RuleId,
    pub level: Level,
    pub location: Location,
    pub violation: Violation,
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
    pub files_checked: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> usize {
        self.count(Level::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(Level::Warn)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }

    /// No error-level findings.
    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics grouped by file, files sorted, each group in position order.
    pub fn by_file(&self) -> BTreeMap<&Path, Vec<&Diagnostic>> {
        let mut groups: BTreeMap<&Path, Vec<&Diagnostic>> = BTreeMap::new();
        for diagnostic in &self.diagnostics {
            groups
                .entry(diagnostic.location.path())
                .or_default()
                .push(diagnostic);
        }
        for group in groups.values_mut() {
            group.sort_by_key(|d| (d.location.line, d.location.column));
        }
        groups
    }
}

/// `ReportSink` that stamps each violation with its rule's configured level.
pub struct LevelSink<'r> {
    rules: &'r RuleSet,
    report: &'r mut Report,
}

impl<'r> LevelSink<'r> {
    pub fn new(rules: &'r RuleSet, report: &'r mut Report) -> Self {
        Self { rules, report }
    }
}

impl ReportSink for LevelSink<'_> {
    fn report(&mut self, location: &Location, violation: Violation) {
        let rule = violation.rule();
        let level = self.rules.level(rule);
        if !level.is_enabled() {
            return;
        }
        self.report.push(Diagnostic {
            rule,
            level,
            location: location.clone(),
            violation,
        });
    }
}
