//! Scenario: import boundaries between layers and slices

use strata::config::{Level, RuleSet};
use strata::domain::value_objects::{IgnorePatterns, RuleId, RuleKind, Violation};

use crate::common::*;

/// Only the two import rules, so structural findings stay out of the way.
fn boundary_rules() -> RuleSet {
    let mut rules = RuleSet::default();
    for rule in RuleId::ALL {
        if rule.kind() == RuleKind::Structural {
            rules.set_level(rule, Level::Off);
        }
    }
    rules
}

fn specifiers(report: &strata::Report, rule: RuleId) -> Vec<String> {
    report
        .diagnostics()
        .iter()
        .filter(|d| d.rule == rule)
        .map(|d| match &d.violation {
            Violation::HigherLevelImport { imported, .. } => imported.clone(),
            Violation::CrossSliceImport { import_path, .. } => import_path.clone(),
            other => panic!("unexpected violation {other:?}"),
        })
        .collect()
}

/// SCENARIO: a feature reaches up into widgets and down into entities/shared
#[test]
fn scenario_upward_imports_are_forbidden() {
    let env = TestEnv::new();
    env.write(
        "src/features/auth/model.ts",
        "import { Header } from 'widgets/header'\n\
         import { User } from 'entities/user'\n\
         import { Button } from 'shared/ui'\n\
         import { Page } from 'src/pages/home'\n",
    );

    let report = env.check(&boundary_rules());

    assert_eq!(
        specifiers(&report, RuleId::NoHigherLevelImports),
        vec!["widgets", "pages"]
    );
    let lines: Vec<_> = report.diagnostics().iter().map(|d| d.location.line).collect();
    assert_eq!(lines, vec![Some(1), Some(4)]);
}

/// SCENARIO: slices of one layer stay isolated
#[test]
fn scenario_cross_slice_isolation() {
    let env = TestEnv::new();
    env.write(
        "src/widgets/own/ui.ts",
        "import { Card } from 'widgets/other/ui'\n\
         import { model } from 'widgets/own/model'\n\
         import { User } from 'entities/user'\n\
         import { Layout } from 'widgets'\n",
    );

    let report = env.check(&boundary_rules());

    assert_eq!(
        specifiers(&report, RuleId::NoCrossSliceImports),
        vec!["widgets/other/ui"]
    );
    assert!(specifiers(&report, RuleId::NoHigherLevelImports).is_empty());
}

/// SCENARIO: an ignore pattern exempts one sibling slice
#[test]
fn scenario_ignore_exemption() {
    let env = TestEnv::new();
    env.write("src/widgets/own/ui.js", CROSS_SLICE_IMPORT);

    let without = env.check(&boundary_rules());
    assert_eq!(without.errors(), 1);

    let mut rules = boundary_rules();
    rules.cross_slice_imports.ignore = IgnorePatterns::new(["widgets/other/**"]);
    let with = env.check(&rules);
    assert!(with.is_clean(), "{:#?}", with.diagnostics());
}

/// SCENARIO: relative and absolute specifiers are never classified
#[test]
fn scenario_local_imports_are_skipped() {
    let env = TestEnv::new();
    env.write(
        "src/shared/lib/index.ts",
        "import { a } from './a'\n\
         import { b } from '../../app/b'\n\
         import c from '/abs/widgets/c'\n\
         const d = require('./d')\n",
    );

    let report = env.check(&boundary_rules());
    assert!(report.is_clean(), "{:#?}", report.diagnostics());
    assert_eq!(report.files_checked, 1);
}

/// SCENARIO: files outside the source root are not checked for imports
#[test]
fn scenario_files_outside_root_are_exempt() {
    let env = TestEnv::new();
    env.write("scripts/build.ts", UPWARD_IMPORT)
        .write("src/entities/user/index.ts", UPWARD_IMPORT);

    let report = env.check(&boundary_rules());

    assert_eq!(report.errors(), 1);
    assert_eq!(
        report.diagnostics()[0].location.path(),
        std::path::Path::new("src/entities/user/index.ts")
    );
}

/// SCENARIO: a warn-level rule reports but does not fail the run
#[test]
fn scenario_warn_level_does_not_fail() {
    let env = TestEnv::new();
    env.write("src/widgets/own/ui.ts", CROSS_SLICE_IMPORT);

    let mut rules = boundary_rules();
    rules.set_level(RuleId::NoCrossSliceImports, Level::Warn);
    let report = env.check(&rules);

    assert_eq!(report.warnings(), 1);
    assert!(report.is_success());
}
