//! In-memory File System
//!
//! A tree of files and directories held in a map, with injectable faults:
//! dangling entries that are listed but cannot be stat'ed, and directories
//! that stat fine but cannot be listed. Used by tests and by hosts that keep
//! the source tree in memory.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{EntryKind, FileSystem, FsError, FsResult};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    File(String),
    Dir,
    /// Shows up in listings, fails on stat (like a dangling symlink).
    Dangling,
    /// A directory whose listing fails.
    Unlistable,
    Special,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    nodes: BTreeMap<PathBuf, Node>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, path: &Path, node: Node) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(Node::Dir);
        }
        self.nodes.insert(path.to_path_buf(), node);
    }

    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), Node::Dir);
        self
    }

    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) -> &mut Self {
        self.insert(path.as_ref(), Node::File(content.into()));
        self
    }

    pub fn add_dangling(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), Node::Dangling);
        self
    }

    pub fn add_unlistable_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), Node::Unlistable);
        self
    }

    pub fn add_special(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), Node::Special);
        self
    }

    /// Builder form of `add_dir`.
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path);
        self
    }

    /// Builder form of `add_file`.
    pub fn with_file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn remove(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.nodes.retain(|key, _| !key.starts_with(path));
    }

    fn node(&self, path: &Path) -> FsResult<&Node> {
        self.nodes
            .get(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }
}

impl FileSystem for MemoryFs {
    fn stat(&self, path: &Path) -> FsResult<EntryKind> {
        match self.node(path)? {
            Node::File(_) => Ok(EntryKind::File),
            Node::Dir | Node::Unlistable => Ok(EntryKind::Directory),
            Node::Special => Ok(EntryKind::Other),
            Node::Dangling => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn list_entries(&self, path: &Path) -> FsResult<Vec<String>> {
        match self.node(path)? {
            Node::Dir => {}
            Node::Unlistable => return Err(FsError::PermissionDenied(path.to_path_buf())),
            _ => {
                return Err(FsError::Io {
                    path: path.to_path_buf(),
                    source: io::Error::other("not a directory"),
                })
            }
        }

        // BTreeMap keeps keys ordered, so children come out sorted.
        Ok(self
            .nodes
            .keys()
            .filter(|key| key.parent() == Some(path))
            .filter_map(|key| key.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect())
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        match self.node(path)? {
            Node::File(content) => Ok(content.clone()),
            _ => Err(FsError::Io {
                path: path.to_path_buf(),
                source: io::Error::other("not a file"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_are_created() {
        let fs = MemoryFs::new().with_file("src/app/main.ts", "");
        assert_eq!(fs.stat(Path::new("src")).unwrap(), EntryKind::Directory);
        assert_eq!(fs.stat(Path::new("src/app")).unwrap(), EntryKind::Directory);
        assert_eq!(fs.stat(Path::new("src/app/main.ts")).unwrap(), EntryKind::File);
    }

    #[test]
    fn lists_immediate_children_only() {
        let fs = MemoryFs::new()
            .with_file("src/widgets/header/index.ts", "")
            .with_dir("src/app")
            .with_file("src/main.ts", "");
        assert_eq!(
            fs.list_entries(Path::new("src")).unwrap(),
            vec!["app", "main.ts", "widgets"]
        );
    }

    #[test]
    fn injected_faults() {
        let mut fs = MemoryFs::new();
        fs.add_dangling("src/broken").add_unlistable_dir("src/locked");

        assert_eq!(
            fs.list_entries(Path::new("src")).unwrap(),
            vec!["broken", "locked"]
        );
        assert!(fs.stat(Path::new("src/broken")).is_err());
        assert_eq!(fs.stat(Path::new("src/locked")).unwrap(), EntryKind::Directory);
        assert!(fs.list_entries(Path::new("src/locked")).is_err());
    }

    #[test]
    fn remove_drops_subtree() {
        let mut fs = MemoryFs::new().with_file("src/pages/home/index.ts", "");
        fs.remove("src/pages");
        assert!(!fs.exists(Path::new("src/pages/home")));
        assert!(fs.exists(Path::new("src")));
    }
}
