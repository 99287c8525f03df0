//! Core error types for REPRISE.

use std::fmt;

/// Error from deriving or parsing a function identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// A namespace or name component was empty
    EmptyComponent {
        /// Which component was empty
        field: &'static str,
    },

    /// A component contained a reserved character
    InvalidComponent {
        /// Which component was invalid
        field: &'static str,
        /// The offending value
        value: String,
    },

    /// A path did not end in the log-file suffix
    NotALogFile {
        /// The offending path
        path: String,
    },

    /// An identity string had no namespace/name boundary
    Unparseable {
        /// The offending input
        input: String,
    },
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyComponent { field } => write!(f, "Identity {} must be non-empty", field),
            Self::InvalidComponent { field, value } => {
                write!(f, "Identity {} may not contain '.' or a path separator: {}", field, value)
            }
            Self::NotALogFile { path } => write!(f, "Not a log file path: {}", path),
            Self::Unparseable { input } => {
                write!(f, "Identity string has no namespace/name boundary: {}", input)
            }
        }
    }
}

impl std::error::Error for IdentityError {}

/// Error from registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A callable is already registered under this identity
    AlreadyRegistered {
        /// The qualified identity
        identity: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRegistered { identity } => {
                write!(f, "Callable already registered: {}", identity)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_error_display() {
        let err = IdentityError::EmptyComponent { field: "namespace" };
        assert_eq!(format!("{}", err), "Identity namespace must be non-empty");

        let err = IdentityError::NotALogFile {
            path: "logs/readme.txt".to_string(),
        };
        assert!(format!("{}", err).contains("readme.txt"));
    }

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::AlreadyRegistered {
            identity: "pkg.add".to_string(),
        };
        assert_eq!(format!("{}", err), "Callable already registered: pkg.add");
    }

    #[test]
    fn test_error_equality() {
        let err1 = IdentityError::EmptyComponent { field: "name" };
        let err2 = IdentityError::EmptyComponent { field: "name" };
        assert_eq!(err1, err2);
    }
}
