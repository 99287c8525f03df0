//! Append-only log store.
//!
//! Each append opens the target file, writes one record line, and
//! closes the handle before returning; no handle outlives a record.
//! Serialization of concurrent appends to one file is the caller's
//! responsibility.

use crate::codec::{self, EncodeError};
use crate::record::Record;
use reprise_core::{FnIdentity, Kwargs, Value, LOG_SUFFIX};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Store error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// I/O failure while appending or reading
    Io {
        /// The file involved
        path: String,
        /// The underlying failure
        reason: String,
    },
    /// A record could not be encoded for the wire
    Encode {
        /// Why encoding failed
        reason: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, reason } => write!(f, "Log I/O failed for {}: {}", path, reason),
            Self::Encode { reason } => write!(f, "Record encoding failed: {}", reason),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<EncodeError> for StoreError {
    fn from(err: EncodeError) -> Self {
        Self::Encode {
            reason: err.to_string(),
        }
    }
}

/// Append-only store for function log files under a configured root.
#[derive(Debug, Clone)]
pub struct LogStore {
    root: PathBuf,
}

impl LogStore {
    /// Create a store rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The log file path for an identity under this store's root.
    #[must_use]
    pub fn log_path(&self, identity: &FnIdentity) -> PathBuf {
        identity.log_path(&self.root)
    }

    /// Append a call record for `identity`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the append fails; the caller
    /// decides whether to continue.
    pub fn append_call(
        &self,
        identity: &FnIdentity,
        args: &[Value],
        kwargs: &Kwargs,
    ) -> Result<(), StoreError> {
        self.append(identity, &Record::call(args.to_vec(), kwargs.clone()))
    }

    /// Append a return record for `identity`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the append fails.
    pub fn append_return(
        &self,
        identity: &FnIdentity,
        result: &Value,
        execution_time: f64,
    ) -> Result<(), StoreError> {
        self.append(identity, &Record::ret(result.clone(), execution_time))
    }

    /// Append an error record for `identity`.
    ///
    /// # Errors
    ///
    /// Returns an error if the append fails.
    pub fn append_error(&self, identity: &FnIdentity, message: &str) -> Result<(), StoreError> {
        self.append(identity, &Record::error(message))
    }

    fn append(&self, identity: &FnIdentity, record: &Record) -> Result<(), StoreError> {
        let path = self.log_path(identity);
        let line = codec::encode_record(record)?;
        let io_err = |err: std::io::Error| StoreError::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_err)?;
        file.write_all(line.as_bytes()).map_err(io_err)?;
        file.write_all(b"\n").map_err(io_err)?;
        Ok(())
    }

    /// Read every record in a log file, in file order.
    ///
    /// Malformed trailing bytes end the stream silently: append-only
    /// files may be read while still being written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn read_all(path: &Path) -> Result<Vec<Record>, StoreError> {
        let file = fs::File::open(path).map_err(|err| StoreError::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let Ok(line) = line else { break };
            if line.is_empty() {
                continue;
            }
            match codec::decode_record(&line) {
                Ok(record) => records.push(record),
                Err(_) => break,
            }
        }
        Ok(records)
    }

    /// List every log file in a directory, sorted for deterministic
    /// iteration.
    ///
    /// An unreadable directory yields an empty list plus a diagnostic.
    #[must_use]
    pub fn list_log_files(dir: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), %err, "could not list log directory");
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(LOG_SUFFIX))
            })
            .collect();
        paths.sort();
        paths
    }
}
