//! FileSystem port - abstraction over the directory reads the audits need
//!
//! This trait allows the domain layer to inspect the source tree without
//! depending on concrete implementations (local disk, in-memory).

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// Path does not exist (or is a dangling symlink)
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    /// Permission denied
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    /// I/O error
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Attach the offending path to an `io::Error`.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// What a path points at after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, fifos, devices
    Other,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MemoryFs` - in-memory tree with fault injection
pub trait FileSystem {
    /// Inspect a path, following symlinks
    fn stat(&self, path: &Path) -> FsResult<EntryKind>;

    /// Names of the immediate entries of a directory, sorted
    fn list_entries(&self, path: &Path) -> FsResult<Vec<String>>;

    /// Read file content as string
    fn read_to_string(&self, path: &Path) -> FsResult<String>;

    /// Check if the path exists
    fn exists(&self, path: &Path) -> bool {
        self.stat(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.stat(path), Ok(EntryKind::Directory))
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(self.stat(path), Ok(EntryKind::File))
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn stat(&self, path: &Path) -> FsResult<EntryKind> {
        (**self).stat(path)
    }

    fn list_entries(&self, path: &Path) -> FsResult<Vec<String>> {
        (**self).list_entries(path)
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        (**self).read_to_string(path)
    }
}
