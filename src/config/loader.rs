//! Configuration loading
//!
//! `strata.toml` is strict: any key the schema does not know is an error,
//! with a "did you mean" hint for near misses.

use std::fs;
use std::path::Path;

use crate::error::{StrataError, StrataResult};

use super::types::{Config, Preset};

/// Config file looked up in the project root.
pub const CONFIG_FILE: &str = "strata.toml";

/// Parse config text. `file` is only used in error messages.
pub fn parse(content: &str, file: &Path) -> StrataResult<Config> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StrataError::ConfigParse {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(path_str) = unknown_paths.into_iter().next() {
        let key = path_str
            .split('.')
            .next_back()
            .unwrap_or(path_str.as_str())
            .to_string();
        return Err(StrataError::UnknownConfigKey {
            suggestion: suggest_key(&key),
            key: path_str,
            file: file.to_path_buf(),
        });
    }

    Ok(config)
}

/// Load and parse one config file.
pub fn load(path: &Path) -> StrataResult<Config> {
    let content = fs::read_to_string(path)?;
    parse(&content, path)
}

/// Load `explicit` if given, else `<project_root>/strata.toml` if present,
/// else defaults. Environment overrides apply on top in every case.
pub fn load_or_default(project_root: &Path, explicit: Option<&Path>) -> StrataResult<Config> {
    let config = match explicit {
        Some(path) => load(path)?,
        None => {
            let candidate = project_root.join(CONFIG_FILE);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "loading config");
                load(&candidate)?
            } else {
                tracing::debug!("no config file, using defaults");
                Config::default()
            }
        }
    };
    Ok(with_env_overrides(config))
}

/// Apply environment variable overrides (STRATA_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Same as `with_env_overrides`, reading variables through `lookup`.
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // STRATA_SRC
    if let Some(src) = lookup("STRATA_SRC") {
        let src = src.trim();
        if !src.is_empty() {
            config.src = Some(src.to_string());
        }
    }

    // STRATA_PRESET
    if let Some(preset) = lookup("STRATA_PRESET") {
        match preset.parse::<Preset>() {
            Ok(preset) => config.preset = preset,
            Err(err) => tracing::warn!(value = %preset, "ignoring STRATA_PRESET: {err}"),
        }
    }

    config
}

const KNOWN_KEYS: &[&str] = &[
    "preset",
    "src",
    "extensions",
    "rules",
    "level",
    "required",
    "allowed",
    "ignore",
    "layers",
    "filename",
    "fsd-layers",
    "no-processes-layer",
    "public-api",
    "no-layer-public-api",
    "no-ui-in-app",
    "no-higher-level-imports",
    "no-cross-slice-imports",
];

/// Closest known key within edit distance 2.
fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|candidate| (levenshtein(unknown, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ca != *cb));
            diagonal = above;
        }
    }

    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_basics() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("allowed", "allowed"), 0);
        assert_eq!(levenshtein("alowed", "allowed"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn suggestions_stay_close() {
        assert_eq!(suggest_key("requred").as_deref(), Some("required"));
        assert_eq!(suggest_key("fsd-layer").as_deref(), Some("fsd-layers"));
        assert_eq!(suggest_key("completely-different"), None);
    }
}
