//! Configuration module for Strata
//!
//! Precedence, highest first:
//! 1. CLI flags (`--config`)
//! 2. Environment variables (STRATA_*)
//! 3. Project config (`strata.toml`)
//! 4. Built-in defaults

mod loader;
mod resolve;
mod types;

pub use loader::{
    apply_overrides, load, load_or_default, parse, with_env_overrides, CONFIG_FILE,
};
pub use resolve::{preset_level, RuleSet};
pub use types::{
    Config, ImportRuleConfig, LayerPublicApiRuleConfig, LayersRuleConfig, Level, Preset,
    PublicApiRuleConfig, RulesConfig, SrcRuleConfig,
};
