//! Local File System Implementation
//!
//! Implements the FileSystem port on `std::fs`.

use std::path::Path;

use crate::domain::ports::file_system::{EntryKind, FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn stat(&self, path: &Path) -> FsResult<EntryKind> {
        // metadata() follows symlinks, so a dangling link surfaces as NotFound
        let metadata = std::fs::metadata(path).map_err(|e| FsError::from_io(path, e))?;
        Ok(if metadata.is_dir() {
            EntryKind::Directory
        } else if metadata.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        })
    }

    fn list_entries(&self, path: &Path) -> FsResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| FsError::from_io(path, e))? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "unreadable directory entry");
                    continue;
                }
            };
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    tracing::debug!(path = %path.display(), name = ?raw, "skipping non UTF-8 entry name");
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }
}
