//! Rule identifiers
//!
//! Stable ids double as config table names and as Session Gate keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a rule audits the whole tree once or checks each file's imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Structural,
    Boundary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    FsdLayers,
    NoProcessesLayer,
    PublicApi,
    NoLayerPublicApi,
    NoUiInApp,
    NoHigherLevelImports,
    NoCrossSliceImports,
}

impl RuleId {
    pub const ALL: [RuleId; 7] = [
        RuleId::FsdLayers,
        RuleId::NoProcessesLayer,
        RuleId::PublicApi,
        RuleId::NoLayerPublicApi,
        RuleId::NoUiInApp,
        RuleId::NoHigherLevelImports,
        RuleId::NoCrossSliceImports,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::FsdLayers => "fsd-layers",
            RuleId::NoProcessesLayer => "no-processes-layer",
            RuleId::PublicApi => "public-api",
            RuleId::NoLayerPublicApi => "no-layer-public-api",
            RuleId::NoUiInApp => "no-ui-in-app",
            RuleId::NoHigherLevelImports => "no-higher-level-imports",
            RuleId::NoCrossSliceImports => "no-cross-slice-imports",
        }
    }

    pub fn kind(self) -> RuleKind {
        match self {
            RuleId::NoHigherLevelImports | RuleId::NoCrossSliceImports => RuleKind::Boundary,
            _ => RuleKind::Structural,
        }
    }

    /// Part of the `recommended` preset.
    pub fn is_recommended(self) -> bool {
        !matches!(self, RuleId::NoUiInApp)
    }

    pub fn description(self) -> &'static str {
        match self {
            RuleId::FsdLayers => "Enforce consistent layer structure in feature-sliced design.",
            RuleId::NoProcessesLayer => "Disallow the deprecated `processes` folder inside the source root.",
            RuleId::PublicApi => "Enforce consistent public API structure in slices.",
            RuleId::NoLayerPublicApi => {
                "Forbid layer-level public API files (index.ts) at the root of layers."
            }
            RuleId::NoUiInApp => "Forbid a `ui` segment inside the app layer.",
            RuleId::NoHigherLevelImports => "Forbid importing from higher layers.",
            RuleId::NoCrossSliceImports => "Forbid cross-imports between slices on the same layer.",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .into_iter()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| s.to_string())
    }
}
