//! Console notices and run statistics.
//!
//! Every successful rename is announced as it happens; counters for both
//! passes are collected into a [`Summary`] and printed once the run finishes.

use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of renamed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => f.write_str("file"),
            EntryKind::Directory => f.write_str("directory"),
        }
    }
}

/// Counters collected over one initialization run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub renamed_files: usize,
    pub renamed_dirs: usize,
    pub rewritten_files: usize,
    pub unchanged_files: usize,
    /// Files left untouched: the running tool itself and, with
    /// [`Decoding::Skip`](crate::fs::Decoding::Skip), non-UTF-8 files.
    pub skipped_files: usize,
    /// Files whose undecodable bytes were dropped.
    pub lossy_files: usize,
}

impl Summary {
    pub fn renamed(&self) -> usize {
        self.renamed_files + self.renamed_dirs
    }

    /// Returns true if the run neither renamed nor rewrote anything.
    pub fn is_noop(&self) -> bool {
        self.renamed() == 0 && self.rewritten_files == 0
    }
}

/// Prints notices and accumulates a [`Summary`].
///
/// Paths in log output are shown relative to `root` with forward slashes.
#[derive(Debug)]
pub struct Report {
    root: PathBuf,
    quiet: bool,
    summary: Summary,
}

impl Report {
    pub fn new(root: impl Into<PathBuf>, quiet: bool) -> Self {
        Self {
            root: root.into(),
            quiet,
            summary: Summary::default(),
        }
    }

    fn display(&self, path: &Path) -> String {
        let relative =
            pathdiff::diff_paths(path, &self.root).unwrap_or_else(|| path.to_path_buf());
        relative.to_string_lossy().replace('\\', "/")
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn into_summary(self) -> Summary {
        self.summary
    }

    /// Announces a completed rename of `from` to `to` (bare entry names).
    pub fn renamed(&mut self, kind: EntryKind, from: &str, to: &str) {
        match kind {
            EntryKind::File => self.summary.renamed_files += 1,
            EntryKind::Directory => self.summary.renamed_dirs += 1,
        }

        if !self.quiet {
            println!("{:>12} {} {} -> {}", "Renamed".green().bold(), kind, from, to);
        }
    }

    pub fn rewritten(&mut self, path: &Path) {
        log::debug!("Rewrote {}", self.display(path));
        self.summary.rewritten_files += 1;
    }

    pub fn unchanged(&mut self, path: &Path) {
        log::trace!("No placeholders in {}", self.display(path));
        self.summary.unchanged_files += 1;
    }

    pub fn skipped(&mut self, path: &Path, reason: &str) {
        log::info!("Skipping {}: {}", self.display(path), reason);
        self.summary.skipped_files += 1;
    }

    pub fn decoded_lossily(&mut self, path: &Path) {
        log::warn!(
            "{} is not valid UTF-8; undecodable bytes were dropped",
            self.display(path)
        );
        self.summary.lossy_files += 1;
    }

    /// Prints the closing summary for a run that initialized `name`.
    pub fn print_summary(&self, name: &str) {
        if self.quiet {
            return;
        }

        let s = &self.summary;
        if s.is_noop() {
            println!("\n{}", "No placeholders found".yellow());
            return;
        }

        println!();
        println!(
            "{:>12} {} file{}, {} director{}",
            "Renamed".green().bold(),
            s.renamed_files,
            plural(s.renamed_files, "", "s"),
            s.renamed_dirs,
            plural(s.renamed_dirs, "y", "ies"),
        );
        println!(
            "{:>12} {} file{} ({} unchanged)",
            "Rewrote".green().bold(),
            s.rewritten_files,
            plural(s.rewritten_files, "", "s"),
            s.unchanged_files,
        );
        if s.skipped_files > 0 {
            println!(
                "{:>12} {} file{}",
                "Skipped".yellow().bold(),
                s.skipped_files,
                plural(s.skipped_files, "", "s"),
            );
        }
        if s.lossy_files > 0 {
            println!(
                "{:>12} {} file{} with undecodable bytes dropped",
                "Lossy".yellow().bold(),
                s.lossy_files,
                plural(s.lossy_files, "", "s"),
            );
        }

        println!(
            "{:>12} initializing {} in {}",
            "Finished".green().bold(),
            name.green().bold(),
            self.root.display()
        );
    }
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}
