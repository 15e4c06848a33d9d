//! PatternMatcher port - glob matching capability

use thiserror::Error;

/// A pattern the matcher could not compile or evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid pattern '{pattern}': {message}")]
pub struct PatternError {
    pub pattern: String,
    pub message: String,
}

impl PatternError {
    pub fn new(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

/// Glob matching over slash-separated text.
///
/// Implementations must be cheap to call repeatedly with the same pattern;
/// `GlobMatcher` caches compiled patterns.
pub trait PatternMatcher {
    fn matches(&self, text: &str, pattern: &str) -> Result<bool, PatternError>;
}

impl<T: PatternMatcher + ?Sized> PatternMatcher for &T {
    fn matches(&self, text: &str, pattern: &str) -> Result<bool, PatternError> {
        (**self).matches(text, pattern)
    }
}
