//! REPRISE Replay
//!
//! Reconstructs test cases from captured log files, re-invokes the
//! recorded callables, and aggregates pass/fail/skip verdicts. A bad
//! log file degrades the summary, never the run.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod summary;
pub mod testcase;

pub use engine::{ReplayEngine, Skip, Verdict};
pub use summary::TestSummary;
pub use testcase::TestCase;
