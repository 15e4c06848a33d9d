//! Glob matcher backed by `globset`
//!
//! minimatch-like semantics: `*` and `?` stay inside one path segment, `**`
//! crosses segments. Compiled patterns (and compile failures) are cached.

use std::collections::HashMap;
use std::sync::Mutex;

use globset::GlobBuilder;

use crate::domain::ports::{PatternError, PatternMatcher};

type Compiled = Result<globset::GlobMatcher, PatternError>;

#[derive(Debug, Default)]
pub struct GlobMatcher {
    cache: Mutex<HashMap<String, Compiled>>,
}

impl GlobMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn compile(pattern: &str) -> Compiled {
        GlobBuilder::new(pattern)
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .map(|glob| glob.compile_matcher())
            .map_err(|err| {
                tracing::warn!(pattern, error = %err, "ignoring invalid glob pattern");
                PatternError::new(pattern, err.kind().to_string())
            })
    }
}

impl PatternMatcher for GlobMatcher {
    fn matches(&self, text: &str, pattern: &str) -> Result<bool, PatternError> {
        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let compiled = cache
            .entry(pattern.to_string())
            .or_insert_with(|| Self::compile(pattern));
        match compiled {
            Ok(matcher) => Ok(matcher.is_match(text)),
            Err(err) => Err(err.clone()),
        }
    }
}
