//! Renaming pass.
//!
//! Walks the tree top-down. Each directory listing is read once up front, so
//! renaming entries never invalidates the listing being processed. Files are
//! renamed before subdirectories, and the walk then descends into each
//! subdirectory under its final name.

use super::Exclusion;
use crate::error::{InitError, Result};
use crate::placeholder::Substitution;
use crate::report::{EntryKind, Report};

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

/// Renames every file and directory under `root` whose name contains the
/// hyphen-style placeholder.
///
/// `exclude` (the running executable) is never renamed. Entries are handled
/// in file name order within each directory.
///
/// # Errors
///
/// - [`InitError::DestinationExists`] if a computed name is already taken
/// - [`InitError::Rename`] if the rename itself fails
/// - [`InitError::Io`] if a directory cannot be listed
///
/// Renames performed before the error are kept.
pub fn rename_entries(
    root: &Path,
    substitution: &Substitution,
    exclude: Option<&Exclusion>,
    report: &mut Report,
) -> Result<()> {
    rename_in_dir(root, substitution, exclude, report)
}

/// A subdirectory entry. Symlinks to directories are renamed like
/// directories but never descended into.
struct Subdir {
    name: OsString,
    is_symlink: bool,
}

fn rename_in_dir(
    dir: &Path,
    substitution: &Substitution,
    exclude: Option<&Exclusion>,
    report: &mut Report,
) -> Result<()> {
    let (files, dirs) = list_dir(dir)?;

    for name in files {
        let Some(new_name) = new_name_for(&name, substitution) else {
            continue;
        };

        let from = dir.join(&name);
        if exclude.is_some_and(|e| e.matches(&from)) {
            log::debug!("Not renaming running executable {}", from.display());
            continue;
        }

        rename_entry(&from, &dir.join(&new_name))?;
        report.renamed(EntryKind::File, &name.to_string_lossy(), &new_name);
    }

    let mut subdirs = Vec::with_capacity(dirs.len());
    for Subdir { name, is_symlink } in dirs {
        let name = match new_name_for(&name, substitution) {
            Some(new_name) => {
                rename_entry(&dir.join(&name), &dir.join(&new_name))?;
                report.renamed(EntryKind::Directory, &name.to_string_lossy(), &new_name);
                OsString::from(new_name)
            }
            None => name,
        };

        if !is_symlink {
            subdirs.push(name);
        }
    }

    for name in subdirs {
        rename_in_dir(&dir.join(name), substitution, exclude, report)?;
    }

    Ok(())
}

/// Reads `dir` once and splits it into files and directories, each sorted by
/// name. `.git` directories are dropped.
///
/// A symlink counts as a directory when its target is one.
fn list_dir(dir: &Path) -> Result<(Vec<OsString>, Vec<Subdir>)> {
    let mut files = Vec::new();
    let mut dirs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            if super::is_git_dir(&name) {
                log::debug!("Skipping {}", entry.path().display());
                continue;
            }
            dirs.push(Subdir {
                name,
                is_symlink: false,
            });
        } else if file_type.is_symlink() && entry.path().is_dir() {
            dirs.push(Subdir {
                name,
                is_symlink: true,
            });
        } else {
            files.push(name);
        }
    }

    files.sort();
    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok((files, dirs))
}

fn new_name_for(name: &OsStr, substitution: &Substitution) -> Option<String> {
    match name.to_str() {
        Some(name) => substitution.rename(name),
        None => {
            if name
                .to_string_lossy()
                .contains(substitution.placeholder().hyphen())
            {
                log::warn!(
                    "Leaving {} as is: name is not valid UTF-8",
                    name.to_string_lossy()
                );
            }
            None
        }
    }
}

fn rename_entry(from: &Path, to: &Path) -> Result<()> {
    // fs::rename silently replaces files on Unix.
    if fs::symlink_metadata(to).is_ok() {
        return Err(InitError::DestinationExists {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }

    fs::rename(from, to).map_err(|source| InitError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}
