//! Content rewriting pass.
//!
//! Every regular file under the root is decoded as UTF-8, both placeholder
//! spellings are substituted, and the result overwrites the file. Files are
//! treated as text regardless of their type; what happens to bytes that are
//! not valid UTF-8 is governed by [`Decoding`].

use super::Exclusion;
use crate::error::{InitError, Result};
use crate::placeholder::Substitution;
use crate::report::Report;

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// How file content that is not valid UTF-8 is handled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Decoding {
    /// Drop undecodable byte sequences and rewrite the rest.
    ///
    /// Binary files containing invalid sequences lose those bytes.
    #[default]
    Lossy,
    /// Abort the run on the first file that is not valid UTF-8.
    Strict,
    /// Leave files that are not valid UTF-8 untouched.
    Skip,
}

impl Decoding {
    /// Decodes `bytes` read from `path`.
    ///
    /// Returns `Ok(None)` when the file should be left alone.
    fn decode<'a>(
        self,
        path: &Path,
        bytes: &'a [u8],
        report: &mut Report,
    ) -> Result<Option<Cow<'a, str>>> {
        let err = match std::str::from_utf8(bytes) {
            Ok(text) => return Ok(Some(Cow::Borrowed(text))),
            Err(err) => err,
        };

        match self {
            Decoding::Lossy => {
                report.decoded_lossily(path);
                Ok(Some(Cow::Owned(drop_invalid(bytes))))
            }
            Decoding::Strict => Err(InitError::NonUtf8 {
                path: path.to_path_buf(),
                offset: err.valid_up_to(),
            }),
            Decoding::Skip => {
                report.skipped(path, "not valid UTF-8");
                Ok(None)
            }
        }
    }
}

/// Keeps the valid UTF-8 runs of `bytes`, discarding everything else.
fn drop_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Substitutes both placeholder spellings in every file under `root`.
///
/// `.git` directories are pruned and `exclude` (the running executable) is
/// skipped wherever it now lives. Files whose bytes would not change are not
/// written.
///
/// # Errors
///
/// - [`InitError::Walk`] if a directory cannot be traversed
/// - [`InitError::Read`] / [`InitError::Write`] on file I/O failures
/// - [`InitError::NonUtf8`] under [`Decoding::Strict`]
///
/// Files rewritten before the error keep their new content.
pub fn rewrite_contents(
    root: &Path,
    substitution: &Substitution,
    decoding: Decoding,
    exclude: Option<&Exclusion>,
    report: &mut Report,
) -> Result<()> {
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_pruned(e))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if exclude.is_some_and(|e| e.matches(path)) {
            report.skipped(path, "running executable");
            continue;
        }

        rewrite_file(path, substitution, decoding, report)?;
    }

    Ok(())
}

fn is_pruned(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && super::is_git_dir(entry.file_name())
}

fn rewrite_file(
    path: &Path,
    substitution: &Substitution,
    decoding: Decoding,
    report: &mut Report,
) -> Result<()> {
    let bytes = fs::read(path).map_err(|source| InitError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(text) = decoding.decode(path, &bytes, report)? else {
        return Ok(());
    };

    let new_content = substitution.apply(&text);
    if new_content.as_bytes() == bytes.as_slice() {
        report.unchanged(path);
        return Ok(());
    }

    fs::write(path, new_content).map_err(|source| InitError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    report.rewritten(path);

    Ok(())
}
