use strata::application::Report;
use strata::config::Level;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::{icon, IconKind};

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Findings grouped by file, one line per finding:
/// position, severity, message, rule id.
pub fn render_check_report(report: &Report, supports_color: bool) -> String {
    let mut out = String::new();

    for (index, (file, diagnostics)) in report.by_file().into_iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(
            &ColoredText::plain(file.display().to_string())
                .bold()
                .render(supports_color),
        );
        out.push('\n');

        for diagnostic in diagnostics {
            let position = match (diagnostic.location.line, diagnostic.location.column) {
                (Some(line), Some(column)) => format!("{line}:{column}"),
                _ => "-".to_string(),
            };
            let level = match diagnostic.level {
                Level::Error => ColoredText::error(format!("{:<7}", "error")),
                _ => ColoredText::warning(format!("{:<7}", "warning")),
            };
            out.push_str(&format!(
                "  {:<7} {}  {}  {}\n",
                position,
                level.render(supports_color),
                diagnostic.violation,
                ColoredText::dim(diagnostic.rule.as_str()).render(supports_color),
            ));
        }
    }

    out
}

pub fn render_check_summary(
    report: &Report,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let files = plural(report.files_checked, "file");
    let (errors, warnings) = (report.errors(), report.warnings());

    let line = if errors + warnings == 0 {
        ColoredText::success(format!(
            "{} No problems found in {files}",
            icon(IconKind::Success, supports_unicode)
        ))
    } else {
        let text = format!(
            "{} {} ({}, {}) in {files}",
            icon(
                if errors > 0 {
                    IconKind::Error
                } else {
                    IconKind::Warning
                },
                supports_unicode
            ),
            plural(errors + warnings, "problem"),
            plural(errors, "error"),
            plural(warnings, "warning"),
        );
        if errors > 0 {
            ColoredText::error(text)
        } else {
            ColoredText::warning(text)
        }
    };

    format!("{}\n", line.bold().render(supports_color))
}
