//! Scenario: a team adopts Strata on an existing project
//!
//! Journey:
//! 1. A conforming project passes `strata check`
//! 2. Someone adds a cross-slice import; the check fails
//! 3. The team downgrades the rule to `warn` in strata.toml; the check passes
//! 4. CI caps warnings with `--max-warnings 0`; the check fails again

use crate::common::*;

#[test]
fn scenario_team_adopts_strata() {
    let env = conforming_project();

    // Step 1
    let result = env.run(&["check"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("No problems found in 8 files"));

    // Step 2
    env.write("src/widgets/own/ui.ts", CROSS_SLICE_IMPORT)
        .write("src/widgets/own/index.ts", "export * from './ui'\n")
        .write("src/widgets/other/index.ts", "export const Card = 1\n");
    let result = env.run(&["check"]);
    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stdout.contains("src/widgets/own/ui.ts"));
    assert!(result.stdout.contains("no-cross-slice-imports"));

    // Step 3
    env.write("strata.toml", STRATA_TOML_WARN_ONLY);
    let result = env.run(&["check"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("1 warning"));

    // Step 4
    let result = env.run(&["check", "--max-warnings", "0"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("Too many warnings"));
}
