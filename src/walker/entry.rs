//! Entry handle passed to visitors

use std::fs::{DirEntry, FileType};
use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
    /// Symbolic links are never followed, whatever they point at.
    Symlink,
    /// Sockets, FIFOs, device nodes.
    Other,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// One filesystem object found while walking.
///
/// Built by the walker for each enumerated entry and lent to the visitor for
/// the duration of a single callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    name: String,
    path: PathBuf,
    kind: EntryKind,
    depth: usize,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind, depth: usize) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            name,
            path,
            kind,
            depth,
        }
    }

    pub(crate) fn from_dir_entry(entry: &DirEntry, depth: usize) -> std::io::Result<Self> {
        let kind = EntryKind::from(entry.file_type()?);
        Ok(Self {
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.path(),
            kind,
            depth,
        })
    }

    /// Base name of the entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path: the walk root joined with every directory on the way down.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Distance from the walk root; immediate children are at depth 1.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True for real directories, the only entries a walk descends into.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }
}
