use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Strata - layer and slice conformance checker for feature-sliced source trees
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files and directories against the layer rules
    Check {
        /// Files or directories to analyze
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Config file (default: ./strata.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fail when more than this many warnings are reported
        #[arg(long)]
        max_warnings: Option<usize>,
    },

    /// Describe the available rules
    Explain {
        /// Rule id, e.g. no-cross-slice-imports
        rule: Option<String>,
    },
}
