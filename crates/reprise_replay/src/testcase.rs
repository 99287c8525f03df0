//! Test cases reconstructed from log files.

use reprise_core::{FnIdentity, Kwargs, NativeFn, Value};
use std::sync::Arc;

/// A replayable test case: captured inputs, the expected output, and
/// the resolved live callable.
///
/// Derived from a log file, never stored back to one.
#[derive(Clone)]
pub struct TestCase {
    /// Identity recovered from the log path
    pub identity: FnIdentity,
    /// Captured positional arguments
    pub args: Vec<Value>,
    /// Captured keyword arguments
    pub kwargs: Kwargs,
    /// The output recorded at capture time
    pub expected: Value,
    /// The callable to re-invoke
    pub func: Arc<dyn NativeFn>,
}
