use strata::config::{preset_level, Level, Preset};
use strata::domain::value_objects::{RuleId, RuleKind};

use crate::ui::primitives::text::ColoredText;

fn kind_label(kind: RuleKind) -> &'static str {
    match kind {
        RuleKind::Structural => "structural",
        RuleKind::Boundary => "imports",
    }
}

/// Config keys a rule accepts besides `level`.
fn options(rule: RuleId) -> &'static [(&'static str, &'static str)] {
    match rule {
        RuleId::FsdLayers => &[
            ("src", "source root, default \"src\""),
            ("required", "entries that must exist in the source root"),
            ("allowed", "the only entries permitted in the source root"),
            ("ignore", "glob patterns for entries to skip"),
        ],
        RuleId::NoProcessesLayer | RuleId::NoUiInApp => {
            &[("src", "source root, default \"src\"")]
        }
        RuleId::PublicApi => &[
            ("src", "source root, default \"src\""),
            ("layers", "layers whose slices need a public API file"),
            ("filename", "public API file name, default \"index.ts\""),
            ("ignore", "glob patterns for slices to skip"),
        ],
        RuleId::NoLayerPublicApi => &[
            ("src", "source root, default \"src\""),
            ("layers", "layers that must not have a root public API file"),
            ("filename", "public API file name, default \"index.ts\""),
        ],
        RuleId::NoHigherLevelImports => &[
            ("src", "source root, default \"src\""),
            ("layers", "layer order, highest first"),
            ("ignore", "glob patterns for files and imports to skip"),
        ],
        RuleId::NoCrossSliceImports => &[
            ("src", "source root, default \"src\""),
            ("layers", "layers whose slices are isolated from each other"),
            ("ignore", "glob patterns for files and imports to skip"),
        ],
    }
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::Off => "off",
        Level::Warn => "warn",
        Level::Error => "error",
    }
}

/// One line per rule: id, kind, recommended level, summary.
pub fn render_rule_list(supports_color: bool) -> String {
    let mut out = String::new();
    for rule in RuleId::ALL {
        let level = level_label(preset_level(Preset::Recommended, rule));
        out.push_str(&format!(
            "{} {:<11} {:<6} {}\n",
            ColoredText::plain(format!("{:<24}", rule.as_str()))
                .bold()
                .render(supports_color),
            kind_label(rule.kind()),
            level,
            ColoredText::dim(rule.description()).render(supports_color),
        ));
    }
    out
}

pub fn render_rule_detail(rule: RuleId, supports_color: bool) -> String {
    let mut out = String::new();
    out.push_str(&ColoredText::plain(rule.as_str()).bold().render(supports_color));
    out.push('\n');
    out.push_str(rule.description());
    out.push_str("\n\n");
    out.push_str(&format!("  kind:        {}\n", kind_label(rule.kind())));
    out.push_str(&format!(
        "  recommended: {}\n",
        level_label(preset_level(Preset::Recommended, rule))
    ));
    out.push_str(&format!(
        "  all:         {}\n",
        level_label(preset_level(Preset::All, rule))
    ));
    out.push_str("\nOptions:\n");
    for (key, help) in options(rule) {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::info(format!("{key:<9}")).render(supports_color),
            help
        ));
    }
    out.push_str(&format!(
        "\nConfigure under [rules.{}] in strata.toml.\n",
        rule.as_str()
    ));
    out
}
