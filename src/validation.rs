//! Pre-flight checks run before the tree is touched.
//!
//! The target name is deliberately not checked beyond being non-empty; any
//! other string is substituted as given.

use crate::error::{InitError, Result};
use crate::placeholder::Substitution;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Rejects an empty target name.
pub fn validate_target_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(InitError::InvalidName(
            name.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Warns when the target name reintroduces a placeholder.
///
/// Such a name leaves placeholder text behind after the run, so a second run
/// would substitute again. The run still proceeds.
pub fn warn_if_self_referential(substitution: &Substitution) {
    if substitution.is_self_referential() {
        log::warn!(
            "Name '{}' contains the placeholder '{}'; running again would substitute it again",
            substitution.name(),
            substitution.placeholder().hyphen()
        );
    }
}

/// Canonical path of the running executable.
pub fn current_executable() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let exe = exe
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", exe.display()))?;
    Ok(exe)
}

/// Resolves the directory an initialization run is scoped to.
///
/// An explicit root wins; otherwise the directory holding `executable` is
/// used. The result is canonical and guaranteed to be a directory.
pub fn resolve_root(explicit: Option<&Path>, executable: &Path) -> Result<PathBuf> {
    let root = match explicit {
        Some(root) => root.to_path_buf(),
        None => executable
            .parent()
            .map(Path::to_path_buf)
            .with_context(|| format!("{} has no parent directory", executable.display()))?,
    };

    let root = root
        .canonicalize()
        .map_err(|e| InitError::InvalidRoot(root.clone(), e.to_string()))?;

    if !root.is_dir() {
        return Err(InitError::InvalidRoot(root, "not a directory".to_string()));
    }

    Ok(root)
}
