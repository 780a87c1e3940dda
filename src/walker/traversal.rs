//! DirectoryWalker - depth-first, pre-order traversal with callbacks

use std::fs::DirEntry;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::WalkError;

use super::entry::Entry;
use super::exclusions::Exclusions;
use super::visitor::EntryVisitor;

/// Walks a directory tree and reports every entry to an [`EntryVisitor`].
///
/// Directories are reported before their contents. Nothing is cached between
/// walks, so the same walker can be reused on any number of roots.
#[derive(Debug, Clone, Default)]
pub struct DirectoryWalker {
    exclusions: Exclusions,
    sort_entries: bool,
}

impl DirectoryWalker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exclusions(mut self, exclusions: Exclusions) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Visit entries in name order instead of the order the OS returns them.
    pub fn with_sorted_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    pub fn exclusions(&self) -> &Exclusions {
        &self.exclusions
    }

    /// Replace the exclusion set. The previous names are dropped, not merged.
    pub fn set_exclusions(&mut self, exclusions: Exclusions) {
        self.exclusions = exclusions;
    }

    /// Walk `root`, calling the visitor for each entry.
    ///
    /// With `recursive` unset only the immediate entries of `root` are visited;
    /// subdirectories are still reported to `visit_directory` but never entered.
    ///
    /// Fails with [`WalkError::NotFound`] before visiting anything if `root` is
    /// not an existing directory. The first error returned by the visitor ends
    /// the walk and is returned unchanged.
    pub fn walk<V>(
        &self,
        root: impl AsRef<Path>,
        recursive: bool,
        visitor: &mut V,
    ) -> Result<(), V::Error>
    where
        V: EntryVisitor + ?Sized,
    {
        self.walk_dir(root.as_ref(), recursive, 1, visitor)
    }

    fn walk_dir<V>(
        &self,
        path: &Path,
        recursive: bool,
        depth: usize,
        visitor: &mut V,
    ) -> Result<(), V::Error>
    where
        V: EntryVisitor + ?Sized,
    {
        if !path.is_dir() {
            return Err(WalkError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        debug!(path = %path.display(), depth, "walking directory");

        for dir_entry in self.read_entries(path)? {
            if self.exclusions.matches(&dir_entry.file_name()) {
                trace!(path = %dir_entry.path().display(), "skipping excluded entry");
                continue;
            }

            let entry =
                Entry::from_dir_entry(&dir_entry, depth).map_err(|source| WalkError::ReadDir {
                    path: path.to_path_buf(),
                    source,
                })?;

            if entry.is_dir() {
                visitor.visit_directory(&entry)?;
                if recursive {
                    self.walk_dir(entry.path(), recursive, depth + 1, visitor)?;
                }
            } else {
                visitor.visit_file(&entry)?;
            }
        }

        Ok(())
    }

    /// Read the immediate entries of a directory, sorted by name if configured.
    fn read_entries(&self, path: &Path) -> Result<Vec<DirEntry>, WalkError> {
        let read_dir_error = |source| WalkError::ReadDir {
            path: path.to_path_buf(),
            source,
        };

        let mut entries = std::fs::read_dir(path)
            .map_err(read_dir_error)?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(read_dir_error)?;

        if self.sort_entries {
            entries.sort_by_key(|a| a.file_name());
        }

        Ok(entries)
    }
}
