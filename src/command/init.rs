//! Orchestration of an initialization run.
//!
//! The renaming pass always runs to completion before the content pass
//! starts, and both operate on the same root.

use crate::error::Result;
use crate::fs::{Decoding, Exclusion, rename_entries, rewrite_contents};
use crate::placeholder::{DEFAULT_PLACEHOLDER, Placeholder, Substitution};
use crate::report::{Report, Summary};
use crate::validation::{
    current_executable, resolve_root, validate_target_name, warn_if_self_referential,
};

use clap::Parser;
use std::path::PathBuf;

/// Arguments for an initialization run.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Name to initialize the scaffold with
    ///
    /// Replaces the placeholder verbatim in file names, directory names and
    /// file contents. The underscore spelling of the placeholder is replaced
    /// with this name after mapping `-` to `_`.
    #[arg(verbatim_doc_comment)]
    pub name: String,

    /// Directory to initialize (defaults to the directory of this executable)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Hyphen-style placeholder token to replace
    #[arg(long, value_name = "TOKEN", default_value = DEFAULT_PLACEHOLDER)]
    pub placeholder: String,

    /// How to treat file content that is not valid UTF-8
    #[arg(long, value_enum, value_name = "MODE", default_value_t = Decoding::Lossy)]
    pub decoding: Decoding,

    /// Do not print rename notices or the final summary
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Fully resolved inputs of an initialization run.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory the run is scoped to.
    pub root: PathBuf,
    pub name: String,
    pub placeholder: Placeholder,
    pub decoding: Decoding,
    /// File neither renamed nor rewritten. Must exist; it is recognized by
    /// identity, even after a parent directory is renamed.
    pub exclude: Option<PathBuf>,
    pub quiet: bool,
}

impl InitOptions {
    /// Options with the default placeholder, lossy decoding and no exclusion.
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
            placeholder: Placeholder::default(),
            decoding: Decoding::default(),
            exclude: None,
            quiet: false,
        }
    }
}

/// Runs both passes over `options.root`.
///
/// Stops at the first error; changes made up to that point stay on disk.
pub fn initialize(options: &InitOptions) -> Result<Summary> {
    validate_target_name(&options.name)?;

    let substitution = Substitution::new(options.placeholder.clone(), &options.name);
    warn_if_self_referential(&substitution);

    let exclusion = options.exclude.as_ref().map(Exclusion::new).transpose()?;
    let exclude = exclusion.as_ref();
    let mut report = Report::new(&options.root, options.quiet);

    log::info!(
        "Initializing '{}' in {} (placeholder '{}')",
        options.name,
        options.root.display(),
        options.placeholder.hyphen()
    );

    rename_entries(&options.root, &substitution, exclude, &mut report)?;
    log::debug!("Renaming pass finished: {} renamed", report.summary().renamed());

    rewrite_contents(
        &options.root,
        &substitution,
        options.decoding,
        exclude,
        &mut report,
    )?;
    log::debug!(
        "Content pass finished: {} rewritten",
        report.summary().rewritten_files
    );

    report.print_summary(&options.name);
    Ok(report.into_summary())
}

/// Executes an initialization run from command line arguments.
///
/// ## Phases
///
/// 1. Validate the placeholder
/// 2. Locate this executable and resolve the root
/// 3. Validate the name, rename entries, then rewrite contents, excluding
///    this executable
pub fn execute(args: InitArgs) -> Result<()> {
    let placeholder = Placeholder::new(&args.placeholder)?;

    let executable = current_executable()?;
    let root = resolve_root(args.root.as_deref(), &executable)?;
    log::debug!("Executable: {}", executable.display());

    let options = InitOptions {
        root,
        name: args.name,
        placeholder,
        decoding: args.decoding,
        exclude: Some(executable),
        quiet: args.quiet,
    };

    initialize(&options)?;
    Ok(())
}
