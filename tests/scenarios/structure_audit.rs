//! Scenario: auditing the layout of the source root
//!
//! Each structural rule looks at the tree once per session, whichever file
//! the session starts with.

use std::path::Path;

use strata::application::{Diagnostic, Linter};
use strata::config::RuleSet;
use strata::domain::services::SessionGate;
use strata::domain::value_objects::{RuleId, Violation};
use strata::infrastructure::{GlobMatcher, LocalFs};

use crate::common::*;

fn matching<'r>(
    report: &'r strata::Report,
    pred: impl Fn(&Violation) -> bool + 'r,
) -> Vec<&'r Diagnostic> {
    report
        .diagnostics()
        .iter()
        .filter(|d| pred(&d.violation))
        .collect()
}

/// SCENARIO: the root holds only `app` and `shared`, three layers required
#[test]
fn scenario_missing_required_layer() {
    let env = TestEnv::new();
    env.write("src/app/providers/index.ts", "")
        .write("src/shared/ui/index.ts", "")
        .write("src/shared/api/index.ts", "");

    let mut rules = RuleSet::default();
    rules.layers.required = vec!["app".into(), "pages".into(), "shared".into()];
    let report = env.check(&rules);

    let missing = matching(&report, |v| matches!(v, Violation::MissingRequired { .. }));
    assert_eq!(missing.len(), 1, "{:#?}", report.diagnostics());
    assert!(matches!(
        &missing[0].violation,
        Violation::MissingRequired { name, .. } if name == "pages"
    ));
    assert_eq!(report.files_checked, 3);
}

/// SCENARIO: a disallowed entry that is also the deprecated layer
#[test]
fn scenario_disallowed_entry_and_deprecated_layer() {
    let env = TestEnv::new();
    env.write("src/app/providers/index.ts", "")
        .write("src/pages/home/index.ts", "")
        .write("src/shared/ui/index.ts", "")
        .mkdir("src/processes/checkout");

    let mut rules = RuleSet::default();
    rules.layers.allowed = vec!["app".into(), "pages".into(), "shared".into()];
    let report = env.check(&rules);

    let not_allowed = matching(&report, |v| matches!(v, Violation::NotAllowed { .. }));
    assert_eq!(not_allowed.len(), 1);
    assert!(matches!(
        &not_allowed[0].violation,
        Violation::NotAllowed { name, .. } if name == "processes"
    ));

    let deprecated = matching(&report, |v| matches!(v, Violation::DeprecatedLayer { .. }));
    assert_eq!(deprecated.len(), 1);
    assert_eq!(deprecated[0].rule, RuleId::NoProcessesLayer);
}

/// SCENARIO: a slice with both `index.ts` and `index.js`
#[test]
fn scenario_duplicate_public_entry() {
    let env = TestEnv::new();
    env.write("src/features/auth/index.ts", "")
        .write("src/features/auth/index.js", "")
        .write("src/features/auth/model.ts", "");

    let report = env.check(&RuleSet::default());

    let invalid = matching(&report, |v| matches!(v, Violation::InvalidPublicApi { .. }));
    assert_eq!(invalid.len(), 1);
    assert!(matches!(
        &invalid[0].violation,
        Violation::InvalidPublicApi { file, slice, .. } if file == "index.js" && slice == "auth"
    ));
    assert!(matching(&report, |v| matches!(v, Violation::MissingPublicApi { .. })).is_empty());
}

/// SCENARIO: a conforming project reports nothing
#[test]
fn scenario_conforming_project_is_clean() {
    let env = conforming_project();
    let report = env.check(&RuleSet::default());

    assert!(report.is_clean(), "{:#?}", report.diagnostics());
    assert_eq!(report.files_checked, 8);
}

/// SCENARIO: the tree changes mid-session; gated rules do not look again
#[test]
fn scenario_gated_rules_report_once_per_session() {
    let env = TestEnv::new();
    env.write("src/app/providers/index.ts", "")
        .write("src/shared/ui/index.ts", "");

    let rules = RuleSet::default();
    let fs = LocalFs::new();
    let matcher = GlobMatcher::new();
    let gate = SessionGate::new();
    let linter = Linter::new(&rules, &fs, &matcher, &gate, env.root());

    let mut first: Vec<(strata::Location, Violation)> = Vec::new();
    linter.check_file(&env.project_path("src/app/providers/index.ts"), &[], &mut first);
    assert!(first.is_empty(), "{first:#?}");

    env.mkdir("src/processes");
    let mut second: Vec<(strata::Location, Violation)> = Vec::new();
    linter.check_file(&env.project_path("src/shared/ui/index.ts"), &[], &mut second);
    assert!(second.is_empty(), "{second:#?}");

    gate.reset();
    let mut third: Vec<(strata::Location, Violation)> = Vec::new();
    linter.check_file(&env.project_path("src/shared/ui/index.ts"), &[], &mut third);
    let rules_hit: Vec<_> = third.iter().map(|(_, v)| v.rule()).collect();
    assert!(rules_hit.contains(&RuleId::NoProcessesLayer));
    assert!(rules_hit.contains(&RuleId::FsdLayers));
    assert_eq!(third[0].0.path(), Path::new("src/shared/ui/index.ts"));
}

/// SCENARIO: the source root is missing entirely
#[test]
fn scenario_missing_source_root() {
    let env = TestEnv::new();
    env.write("lib/widgets/header/index.ts", "");

    let report = env.check(&RuleSet::default());

    let invalid = matching(&report, |v| matches!(v, Violation::InvalidSrc { .. }));
    assert_eq!(invalid.len(), 1);
    assert!(report.diagnostics().iter().all(|d| d.rule == RuleId::FsdLayers));
}
