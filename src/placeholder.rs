//! Placeholder tokens and the name-derived replacements.
//!
//! A template marks everything that depends on the project name with one
//! token in two spellings:
//!
//! - **hyphen-style** (`plugin-name`): file names, directory names, crate names
//! - **underscore-style** (`plugin_name`): identifiers, derived from the
//!   hyphen-style token by mapping `-` to `_`
//!
//! The target name is substituted verbatim for the hyphen-style token and with
//! `-` mapped to `_` for the underscore-style token.

use crate::error::{InitError, Result};

/// Hyphen-style token used by the bundled templates.
pub const DEFAULT_PLACEHOLDER: &str = "plugin-name";

/// The two spellings of a placeholder token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    hyphen: String,
    underscore: String,
}

impl Placeholder {
    /// Builds a placeholder from its hyphen-style spelling.
    pub fn new(token: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(InitError::InvalidPlaceholder(
                token.to_string(),
                "cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            hyphen: token.to_string(),
            underscore: snake(token),
        })
    }

    pub fn hyphen(&self) -> &str {
        &self.hyphen
    }

    pub fn underscore(&self) -> &str {
        &self.underscore
    }
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            hyphen: DEFAULT_PLACEHOLDER.to_string(),
            underscore: snake(DEFAULT_PLACEHOLDER),
        }
    }
}

/// A placeholder bound to the target name it is replaced with.
#[derive(Debug, Clone)]
pub struct Substitution {
    placeholder: Placeholder,
    name: String,
    name_snake: String,
}

impl Substitution {
    pub fn new(placeholder: Placeholder, name: &str) -> Self {
        Self {
            placeholder,
            name: name.to_string(),
            name_snake: snake(name),
        }
    }

    pub fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the replacement for an entry name, or `None` if the name has no
    /// hyphen-style token or would stay the same.
    ///
    /// Only the hyphen-style token is recognized in names.
    pub fn rename(&self, file_name: &str) -> Option<String> {
        if !file_name.contains(self.placeholder.hyphen()) {
            return None;
        }

        let renamed = file_name.replace(self.placeholder.hyphen(), &self.name);
        (renamed != file_name).then_some(renamed)
    }

    /// Replaces both token spellings in `text`.
    ///
    /// Hyphen-style occurrences are replaced first, so text produced by that
    /// pass is itself subject to the underscore-style pass.
    pub fn apply(&self, text: &str) -> String {
        text.replace(self.placeholder.hyphen(), &self.name)
            .replace(self.placeholder.underscore(), &self.name_snake)
    }

    /// Returns true if applying this substitution again could find new matches
    /// in its own output.
    pub fn is_self_referential(&self) -> bool {
        self.name.contains(self.placeholder.hyphen())
            || self.name_snake.contains(self.placeholder.underscore())
    }
}

fn snake(s: &str) -> String {
    s.replace('-', "_")
}
