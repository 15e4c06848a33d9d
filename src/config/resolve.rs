//! Turning a parsed `Config` into validated, strongly typed rule settings

use crate::domain::services::structure::DEFAULT_SRC;
use crate::domain::services::{
    CrossSliceImportsSettings, HigherLevelImportsSettings, LayerPublicApiSettings,
    LayerStructureSettings, PublicApiSettings, SrcSettings,
};
use crate::domain::value_objects::{IgnorePatterns, LayerOrder, RuleId};
use crate::error::{StrataError, StrataResult};

use super::types::{Config, Level, Preset};

/// Levels and settings for every rule, validated once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    levels: [Level; RuleId::ALL.len()],
    pub layers: LayerStructureSettings,
    pub processes_layer: SrcSettings,
    pub public_api: PublicApiSettings,
    pub layer_public_api: LayerPublicApiSettings,
    pub ui_in_app: SrcSettings,
    pub higher_level_imports: HigherLevelImportsSettings,
    pub cross_slice_imports: CrossSliceImportsSettings,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            levels: RuleId::ALL.map(|rule| preset_level(Preset::default(), rule)),
            layers: LayerStructureSettings::default(),
            processes_layer: SrcSettings::default(),
            public_api: PublicApiSettings::default(),
            layer_public_api: LayerPublicApiSettings::default(),
            ui_in_app: SrcSettings::default(),
            higher_level_imports: HigherLevelImportsSettings::default(),
            cross_slice_imports: CrossSliceImportsSettings::default(),
        }
    }
}

impl RuleSet {
    pub fn level(&self, rule: RuleId) -> Level {
        self.levels[index(rule)]
    }

    pub fn set_level(&mut self, rule: RuleId, level: Level) {
        self.levels[index(rule)] = level;
    }

    pub fn is_enabled(&self, rule: RuleId) -> bool {
        self.level(rule).is_enabled()
    }

    /// Enabled rules in catalogue order.
    pub fn enabled(&self) -> impl Iterator<Item = RuleId> + '_ {
        RuleId::ALL.into_iter().filter(|rule| self.is_enabled(*rule))
    }
}

// `RuleId::ALL` lists the variants in declaration order.
fn index(rule: RuleId) -> usize {
    rule as usize
}

/// Level a rule gets from the preset alone.
pub fn preset_level(preset: Preset, rule: RuleId) -> Level {
    match preset {
        Preset::All => Level::Error,
        Preset::Recommended if rule.is_recommended() => Level::Error,
        Preset::Recommended => Level::Off,
    }
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

fn trimmed_list(values: &[String]) -> Vec<String> {
    values.iter().map(|v| trimmed(v)).collect()
}

fn layer_order(rule: RuleId, layers: &[String]) -> StrataResult<LayerOrder> {
    LayerOrder::new(layers).map_err(|dup| StrataError::DuplicateLayer {
        rule: rule.to_string(),
        layer: dup.0,
    })
}

impl Config {
    /// Validate and resolve into per-rule settings.
    pub fn rule_set(&self) -> StrataResult<RuleSet> {
        let rules = &self.rules;
        let shared_src = self
            .src
            .as_deref()
            .map(trimmed)
            .unwrap_or_else(|| DEFAULT_SRC.to_string());
        let src = |own: &Option<String>| {
            own.as_deref()
                .map(trimmed)
                .unwrap_or_else(|| shared_src.clone())
        };
        let ignore = |own: &Option<Vec<String>>| {
            own.as_deref()
                .map(IgnorePatterns::new)
                .unwrap_or_default()
        };

        let mut set = RuleSet::default();

        let defaults = LayerStructureSettings::default();
        set.layers = LayerStructureSettings {
            src: src(&rules.fsd_layers.src),
            required: rules
                .fsd_layers
                .required
                .as_deref()
                .map(trimmed_list)
                .unwrap_or(defaults.required),
            allowed: rules
                .fsd_layers
                .allowed
                .as_deref()
                .map(trimmed_list)
                .unwrap_or(defaults.allowed),
            ignore: ignore(&rules.fsd_layers.ignore),
        };

        set.processes_layer = SrcSettings {
            src: src(&rules.no_processes_layer.src),
        };

        let defaults = PublicApiSettings::default();
        set.public_api = PublicApiSettings {
            src: src(&rules.public_api.src),
            layers: match &rules.public_api.layers {
                Some(layers) => layer_order(RuleId::PublicApi, layers)?,
                None => defaults.layers,
            },
            filename: rules
                .public_api
                .filename
                .as_deref()
                .map(trimmed)
                .unwrap_or(defaults.filename),
            ignore: ignore(&rules.public_api.ignore),
        };

        let defaults = LayerPublicApiSettings::default();
        set.layer_public_api = LayerPublicApiSettings {
            src: src(&rules.no_layer_public_api.src),
            filename: rules
                .no_layer_public_api
                .filename
                .as_deref()
                .map(trimmed)
                .unwrap_or(defaults.filename),
            ignore: ignore(&rules.no_layer_public_api.ignore),
        };

        set.ui_in_app = SrcSettings {
            src: src(&rules.no_ui_in_app.src),
        };

        set.higher_level_imports = HigherLevelImportsSettings {
            src: src(&rules.no_higher_level_imports.src),
            layers: match &rules.no_higher_level_imports.layers {
                Some(layers) => layer_order(RuleId::NoHigherLevelImports, layers)?,
                None => LayerOrder::default(),
            },
            ignore: ignore(&rules.no_higher_level_imports.ignore),
        };

        set.cross_slice_imports = CrossSliceImportsSettings {
            src: src(&rules.no_cross_slice_imports.src),
            layers: match &rules.no_cross_slice_imports.layers {
                Some(layers) => layer_order(RuleId::NoCrossSliceImports, layers)?,
                None => LayerOrder::isolated(),
            },
            ignore: ignore(&rules.no_cross_slice_imports.ignore),
        };

        let explicit = [
            (RuleId::FsdLayers, rules.fsd_layers.level),
            (RuleId::NoProcessesLayer, rules.no_processes_layer.level),
            (RuleId::PublicApi, rules.public_api.level),
            (RuleId::NoLayerPublicApi, rules.no_layer_public_api.level),
            (RuleId::NoUiInApp, rules.no_ui_in_app.level),
            (RuleId::NoHigherLevelImports, rules.no_higher_level_imports.level),
            (RuleId::NoCrossSliceImports, rules.no_cross_slice_imports.level),
        ];
        for (rule, level) in explicit {
            set.set_level(rule, level.unwrap_or_else(|| preset_level(self.preset, rule)));
        }

        Ok(set)
    }
}
