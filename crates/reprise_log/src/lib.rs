//! REPRISE Function Log
//!
//! Line-oriented, append-only log files recording function invocations.
//! Call and Return records are canonically encoded; Error records stay
//! plain text so fault messages remain greppable.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod record;
pub mod store;

pub use codec::{DecodeError, EncodeError, ERROR_PREFIX};
pub use record::Record;
pub use store::{LogStore, StoreError};
