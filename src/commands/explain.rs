use std::process::ExitCode;

use anyhow::Result;

use strata::config::{preset_level, Preset};
use strata::domain::value_objects::RuleId;
use strata::StrataError;

use crate::ui::json::events::StartEvent;
use crate::ui::terminal::detect_capabilities;

fn rule_json(rule: RuleId) -> serde_json::Value {
    serde_json::json!({
        "id": rule.as_str(),
        "kind": rule.kind(),
        "description": rule.description(),
        "recommended": preset_level(Preset::Recommended, rule),
        "all": preset_level(Preset::All, rule),
    })
}

pub fn cmd_explain(rule: Option<&str>, json: bool) -> Result<ExitCode> {
    let rule = rule
        .map(|name| {
            name.parse::<RuleId>()
                .map_err(|name| StrataError::UnknownRule { name })
        })
        .transpose()?;

    if json {
        let mut out = std::io::stdout().lock();
        crate::ui::json::write_event(&mut out, &StartEvent::new("explain"))?;
        let rules: Vec<_> = match rule {
            Some(rule) => vec![rule_json(rule)],
            None => RuleId::ALL.into_iter().map(rule_json).collect(),
        };
        crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "explain",
                "rules": rules,
            }),
        )?;
        return Ok(ExitCode::SUCCESS);
    }

    let caps = detect_capabilities();
    match rule {
        Some(rule) => print!(
            "{}",
            crate::ui::views::explain::render_rule_detail(rule, caps.supports_color)
        ),
        None => {
            println!("Strata v{}\n", env!("CARGO_PKG_VERSION"));
            print!(
                "{}",
                crate::ui::views::explain::render_rule_list(caps.supports_color)
            );
            println!("\nRun 'strata explain <RULE>' for options.");
        }
    }
    Ok(ExitCode::SUCCESS)
}
