//! Configuration type definitions
//!
//! Mirrors `strata.toml` one to one. Every field is optional; absent values
//! fall back to the rule's documented default when the config is resolved
//! into a `RuleSet`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::infrastructure::source::DEFAULT_EXTENSIONS;

/// Which rules are on before per-rule `level` overrides apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Every rule except `no-ui-in-app`.
    #[default]
    Recommended,
    All,
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recommended" => Ok(Preset::Recommended),
            "all" => Ok(Preset::All),
            other => Err(format!("unknown preset '{other}'")),
        }
    }
}

/// Severity a rule reports with, or `off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Off,
    Warn,
    Error,
}

impl Level {
    pub fn is_enabled(self) -> bool {
        self != Level::Off
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Off => "off",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root of `strata.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub preset: Preset,

    /// Source root shared by every rule that does not set its own `src`.
    #[serde(default)]
    pub src: Option<String>,

    /// File extensions the `check` command analyzes.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub rules: RulesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            src: None,
            extensions: default_extensions(),
            rules: RulesConfig::default(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

/// `[rules.*]` tables, one per rule id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RulesConfig {
    #[serde(default)]
    pub fsd_layers: LayersRuleConfig,
    #[serde(default)]
    pub no_processes_layer: SrcRuleConfig,
    #[serde(default)]
    pub public_api: PublicApiRuleConfig,
    #[serde(default)]
    pub no_layer_public_api: LayerPublicApiRuleConfig,
    #[serde(default)]
    pub no_ui_in_app: SrcRuleConfig,
    #[serde(default)]
    pub no_higher_level_imports: ImportRuleConfig,
    #[serde(default)]
    pub no_cross_slice_imports: ImportRuleConfig,
}

/// `[rules.fsd-layers]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayersRuleConfig {
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub required: Option<Vec<String>>,
    #[serde(default)]
    pub allowed: Option<Vec<String>>,
    #[serde(default)]
    pub ignore: Option<Vec<String>>,
}

/// `[rules.no-processes-layer]` and `[rules.no-ui-in-app]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SrcRuleConfig {
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub src: Option<String>,
}

/// `[rules.public-api]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicApiRuleConfig {
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub layers: Option<Vec<String>>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub ignore: Option<Vec<String>>,
}

/// `[rules.no-layer-public-api]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerPublicApiRuleConfig {
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub ignore: Option<Vec<String>>,
}

/// `[rules.no-higher-level-imports]` and `[rules.no-cross-slice-imports]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportRuleConfig {
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub layers: Option<Vec<String>>,
    #[serde(default)]
    pub ignore: Option<Vec<String>>,
}
