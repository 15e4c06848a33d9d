//! Source file discovery
//!
//! Walks the requested paths with `ignore::WalkBuilder`, so `.gitignore`,
//! `.ignore` and hidden-file rules apply, and keeps files with a configured
//! extension.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Default extensions for JS/TS-family source files.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts", "vue",
];

#[derive(Debug, Clone)]
pub struct SourceWalker {
    extensions: Vec<String>,
}

impl Default for SourceWalker {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().copied())
    }
}

impl SourceWalker {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
        }
    }

    pub fn is_source(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|known| *known == ext)
            })
            .unwrap_or(false)
    }

    /// Every source file under `roots`, sorted and without duplicates.
    /// Unreadable entries are logged and skipped.
    pub fn walk(&self, roots: &[PathBuf]) -> Vec<PathBuf> {
        let Some((first, rest)) = roots.split_first() else {
            return Vec::new();
        };

        let mut builder = WalkBuilder::new(first);
        for root in rest {
            builder.add(root);
        }
        builder.require_git(false);

        let mut files: Vec<PathBuf> = builder
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable path");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
            .map(|entry| entry.into_path())
            .filter(|path| self.is_source(path))
            .collect();

        files.sort();
        files.dedup();
        files
    }
}
