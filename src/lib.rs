//! dirwalk - walk a directory tree with callbacks and sum the numbers in `count` files

pub mod aggregate;
pub mod error;
pub mod output;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use aggregate::{CountAggregator, DEFAULT_TARGET, parse_decimal};
pub use error::{Result, WalkError};
pub use output::{TotalReport, print_total, print_total_json, write_total, write_total_json};
pub use walker::{Callbacks, DirectoryWalker, Entry, EntryKind, EntryVisitor, Exclusions, NoopVisitor};
