//! Ignore patterns value object
//!
//! A list of glob patterns that exempt a value (file path, import specifier,
//! directory entry) from checking. Matching goes through the `PatternMatcher`
//! port; a pattern the matcher cannot handle counts as "no match", so a broken
//! pattern can never hide a violation.

use crate::domain::ports::PatternMatcher;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnorePatterns {
    patterns: Vec<String>,
}

impl IgnorePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| p.as_ref().trim().to_string())
                .collect(),
        }
    }

    /// True on the first pattern that matches `value`.
    pub fn is_ignored(&self, value: &str, matcher: &dyn PatternMatcher) -> bool {
        self.patterns
            .iter()
            .any(|pattern| match matcher.matches(value, pattern) {
                Ok(matched) => matched,
                Err(err) => {
                    tracing::debug!(pattern = %pattern, value, error = %err, "pattern fault treated as no match");
                    false
                }
            })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
