//! Error types for walking and aggregating

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalkError {
    /// The walk root (or a subdirectory about to be entered) is not an existing directory.
    #[error("folder: {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read file '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' does not contain a number: {content:?}", path.display())]
    InvalidNumber { path: PathBuf, content: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WalkError>;
