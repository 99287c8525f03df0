//! Function identities and the log-path grammar.
//!
//! An identity is a `(namespace, name)` pair naming a callable across
//! processes. Its log path is `{root}/{namespace}.{name}.log`, and the
//! reverse parse recovers the pair from a path. Components may not
//! contain `.` or a path separator, so the grammar is unambiguous in
//! both directions.

use crate::error::IdentityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix shared by every log file.
pub const LOG_SUFFIX: &str = ".log";

/// Stable identity of a callable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FnIdentity {
    namespace: String,
    name: String,
}

impl FnIdentity {
    /// Create an identity from its namespace and name.
    ///
    /// # Errors
    ///
    /// Returns an error if either component is empty or contains `.`
    /// or a path separator.
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let namespace = namespace.into();
        let name = name.into();
        check_component("namespace", &namespace)?;
        check_component("name", &name)?;
        Ok(Self { namespace, name })
    }

    /// Parse an identity string of the form `namespace.name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string has no `.` boundary or either
    /// side fails component validation.
    pub fn parse(input: &str) -> Result<Self, IdentityError> {
        let (namespace, name) = input.split_once('.').ok_or_else(|| {
            IdentityError::Unparseable {
                input: input.to_string(),
            }
        })?;
        Self::new(namespace, name)
    }

    /// Recover an identity from a log file path.
    ///
    /// Strips the `.log` suffix from the final path segment, then
    /// splits at the first `.` boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has no valid final segment, does
    /// not end in `.log`, or the stem does not parse as an identity.
    pub fn from_log_path(path: &Path) -> Result<Self, IdentityError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| IdentityError::NotALogFile {
                path: path.display().to_string(),
            })?;
        let stem = file_name
            .strip_suffix(LOG_SUFFIX)
            .ok_or_else(|| IdentityError::NotALogFile {
                path: path.display().to_string(),
            })?;
        Self::parse(stem)
    }

    /// The namespace component.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The name component.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The qualified `namespace.name` form.
    #[must_use]
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    /// The log file path for this identity under `root`.
    #[must_use]
    pub fn log_path(&self, root: &Path) -> PathBuf {
        root.join(format!("{}.{}{}", self.namespace, self.name, LOG_SUFFIX))
    }
}

impl fmt::Display for FnIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

fn check_component(field: &'static str, value: &str) -> Result<(), IdentityError> {
    if value.is_empty() {
        return Err(IdentityError::EmptyComponent { field });
    }
    if value.contains(['.', '/', '\\']) {
        return Err(IdentityError::InvalidComponent {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
