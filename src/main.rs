//! Strata CLI - layer and slice conformance checker
//!
//! Usage: strata <COMMAND>
//!
//! Commands:
//!   check    Check files and directories against the layer rules
//!   explain  Describe the available rules

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

/// `-v` flags win over `STRATA_LOG`; without either only warnings show.
fn log_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_env("STRATA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Check {
            paths,
            config,
            max_warnings,
        } => commands::check::cmd_check(paths, config.as_deref(), *max_warnings, cli.json),
        Commands::Explain { rule } => commands::explain::cmd_explain(rule.as_deref(), cli.json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            let caps = ui::terminal::detect_capabilities();
            eprintln!(
                "{} {err:#}",
                ui::primitives::text::ColoredText::error(ui::theme::icon(
                    ui::theme::IconKind::Error,
                    caps.supports_unicode
                ))
                .render(caps.supports_color)
            );
            ExitCode::FAILURE
        }
    }
}
