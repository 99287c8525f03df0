//! REPRISE Capture
//!
//! Wraps target callables so their first few invocations are recorded
//! to per-function log files, then steps out of the way. The wrapper
//! is transparent: callers observe exactly the results and faults the
//! unwrapped function would have produced.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod recorder;
pub mod trace;

pub use config::CaptureConfig;
pub use recorder::Recorder;
pub use trace::{NullTracer, StdoutTracer, Tracer};
