//! `strata check`

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;

use strata::application::{CheckOptions, CheckUseCase, Report};
use strata::infrastructure::{GlobMatcher, LocalFs, SourceWalker};

use crate::ui::json::events::{CompleteEvent, ErrorEvent, StartEvent, ViolationEvent};
use crate::ui::terminal::detect_capabilities;

const COMMAND: &str = "check";

pub fn cmd_check(
    paths: &[PathBuf],
    config_file: Option<&Path>,
    max_warnings: Option<usize>,
    json: bool,
) -> Result<ExitCode> {
    if json {
        crate::ui::json::emit_event(&StartEvent::new(COMMAND))?;
    }

    let project_root = Path::new(".");
    let (rules, extensions) = match strata::config::load_or_default(project_root, config_file)
        .and_then(|config| Ok((config.rule_set()?, config.extensions)))
    {
        Ok(loaded) => loaded,
        Err(err) if json => {
            crate::ui::json::emit_event(&ErrorEvent::new(COMMAND, err.to_string()))?;
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    let fs = LocalFs::new();
    let matcher = GlobMatcher::new();
    let use_case = CheckUseCase::new(&rules, SourceWalker::new(&extensions), &fs, &matcher);
    let report = use_case.execute(&CheckOptions {
        paths: paths.to_vec(),
        base: project_root.to_path_buf(),
    });

    let failed = has_failed(&report, max_warnings);

    if json {
        let mut out = std::io::stdout().lock();
        for diagnostic in report.diagnostics() {
            crate::ui::json::write_event(&mut out, &ViolationEvent::new(diagnostic))?;
        }
        crate::ui::json::write_event(
            &mut out,
            &CompleteEvent {
                event: "complete",
                command: COMMAND,
                success: !failed,
                files: report.files_checked,
                errors: report.errors(),
                warnings: report.warnings(),
            },
        )?;
    } else {
        let caps = detect_capabilities();
        let body = crate::ui::views::check::render_check_report(&report, caps.supports_color);
        if !body.is_empty() {
            println!("{body}");
        }
        print!(
            "{}",
            crate::ui::views::check::render_check_summary(
                &report,
                caps.supports_color,
                caps.supports_unicode
            )
        );
        if let Some(limit) = max_warnings.filter(|limit| report.warnings() > *limit) {
            eprintln!(
                "Too many warnings ({}, maximum {limit}).",
                report.warnings()
            );
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Any error, or more warnings than allowed.
fn has_failed(report: &Report, max_warnings: Option<usize>) -> bool {
    !report.is_success() || max_warnings.is_some_and(|limit| report.warnings() > limit)
}
