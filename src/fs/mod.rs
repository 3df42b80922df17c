//! File system passes over a scaffold tree.
//!
//! Initialization runs two passes over the same root, in order:
//!
//! 1. [`rename_entries`]: renames files and directories whose names contain
//!    the placeholder, descending into directories by their new names
//! 2. [`rewrite_contents`]: substitutes both placeholder spellings inside
//!    every file of the renamed tree
//!
//! Both passes prune `.git` directories and skip one [`Exclusion`] (the
//! running executable). Neither pass catches errors: the first failure aborts
//! the run and leaves whatever was already changed in place.

pub mod rename;
pub mod rewrite;

pub use rename::rename_entries;
pub use rewrite::{Decoding, rewrite_contents};

use crate::error::Result;

use same_file::Handle;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Version control metadata directory, never descended into.
pub const GIT_DIR: &str = ".git";

fn is_git_dir(name: &OsStr) -> bool {
    name == GIT_DIR
}

/// A file left alone by both passes.
///
/// Matched by file identity rather than by path, so the file is still
/// recognized after one of its parent directories has been renamed.
#[derive(Debug)]
pub struct Exclusion {
    path: PathBuf,
    handle: Handle,
}

impl Exclusion {
    /// Opens `path`, which must exist.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let handle = Handle::from_path(&path)?;
        Ok(Self { path, handle })
    }

    /// Path the exclusion was created with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if `path` refers to the excluded file.
    pub fn matches(&self, path: &Path) -> bool {
        if path == self.path {
            return true;
        }

        match Handle::from_path(path) {
            Ok(handle) => handle == self.handle,
            Err(e) => {
                log::trace!("Cannot open {} for identity check: {}", path.display(), e);
                false
            }
        }
    }
}
