//! Error types for scaffold-init.
//!
//! All operations return `Result<T>` which aliases `Result<T, InitError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from initialization runs.
#[derive(Debug, Error)]
pub enum InitError {
    /// Invalid target name.
    #[error("Invalid name '{0}': {1}")]
    InvalidName(String, String),

    /// Invalid placeholder token.
    #[error("Invalid placeholder '{0}': {1}")]
    InvalidPlaceholder(String, String),

    /// Root directory missing or not a directory.
    #[error("Invalid root '{0}': {1}")]
    InvalidRoot(PathBuf, String),

    /// Rename destination is already taken.
    ///
    /// Never resolved automatically; the run aborts with the tree partially renamed.
    #[error("Cannot rename {from}: destination already exists: {to}")]
    DestinationExists { from: PathBuf, to: PathBuf },

    /// Rename syscall failed.
    #[error("Failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File could not be written back.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid UTF-8 and strict decoding was requested.
    #[error("{path} is not valid UTF-8 (first invalid byte at offset {offset})")]
    NonUtf8 { path: PathBuf, offset: usize },

    /// Directory traversal failed.
    #[error("Failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for scaffold-init operations.
pub type Result<T> = std::result::Result<T, InitError>;
