//! Directory walking logic
//!
//! [`DirectoryWalker`] enumerates a directory one level at a time and hands
//! every entry to an [`EntryVisitor`]:
//!
//! - directories go to `visit_directory`, then are descended into when the
//!   walk is recursive
//! - everything else (files, symlinks, sockets...) goes to `visit_file`
//!
//! Entries whose base name is listed in the walker's [`Exclusions`] are
//! skipped together with their whole subtree.

mod entry;
mod exclusions;
mod traversal;
mod visitor;

pub use entry::{Entry, EntryKind};
pub use exclusions::Exclusions;
pub use traversal::DirectoryWalker;
pub use visitor::{Callbacks, EntryVisitor, NoopVisitor};
