//! Replay engine: log files in, verdicts out.

use crate::summary::TestSummary;
use crate::testcase::TestCase;
use reprise_core::{FnIdentity, FnRegistry};
use reprise_log::{LogStore, Record};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Why a log file produced no verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// The records do not begin with a Call followed by a Return
    /// (empty or unreadable file, lone call, or malformed stream)
    Malformed {
        /// The log file
        path: String,
    },
    /// The capture recorded a fault, so there is no expected output
    /// to compare against
    CapturedError {
        /// The log file
        path: String,
    },
    /// The identity could not be resolved to a live callable
    Unresolved {
        /// The log file
        path: String,
    },
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { path } => write!(f, "No call/return pair in {}", path),
            Self::CapturedError { path } => {
                write!(f, "Capture in {} ended in a fault", path)
            }
            Self::Unresolved { path } => {
                write!(f, "No live callable for {}", path)
            }
        }
    }
}

/// Outcome of evaluating one test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Replayed output matched the recording
    Passed,
    /// Replayed output diverged, or the callable faulted where the
    /// recording promised a normal return
    Failed,
}

/// Replay engine for verifying captured log files.
pub struct ReplayEngine {
    registry: Arc<FnRegistry>,
}

impl ReplayEngine {
    /// Create an engine resolving against `registry`.
    #[must_use]
    pub fn new(registry: Arc<FnRegistry>) -> Self {
        Self { registry }
    }

    /// Reconstruct a test case from a log file.
    ///
    /// The first two records must be a `Call` followed by a `Return`;
    /// the identity embedded in the path must resolve to a live
    /// callable.
    ///
    /// # Errors
    ///
    /// Returns the skip reason when no comparable case exists. A skip
    /// is an expected outcome, not a fault.
    pub fn build_test_case(&self, path: &Path) -> Result<TestCase, Skip> {
        let display = path.display().to_string();
        let records = LogStore::read_all(path).map_err(|_| Skip::Malformed {
            path: display.clone(),
        })?;

        let mut records = records.into_iter();
        match (records.next(), records.next()) {
            (Some(Record::Call { args, kwargs }), Some(Record::Return { result, .. })) => {
                let identity =
                    FnIdentity::from_log_path(path).map_err(|_| Skip::Unresolved {
                        path: display.clone(),
                    })?;
                let func = self.registry.resolve(&identity).ok_or(Skip::Unresolved {
                    path: display,
                })?;
                Ok(TestCase {
                    identity,
                    args,
                    kwargs,
                    expected: result,
                    func,
                })
            }
            (Some(Record::Call { .. }), Some(Record::Error { .. })) => {
                Err(Skip::CapturedError { path: display })
            }
            _ => Err(Skip::Malformed { path: display }),
        }
    }

    /// Re-invoke a test case's callable and compare outputs.
    ///
    /// The captured arguments are replayed as recorded; missing
    /// pieces are empty collections, so the calling convention
    /// degrades rather than faults. Comparison is structural
    /// equality.
    #[must_use]
    pub fn verify(&self, case: &TestCase) -> Verdict {
        match case.func.call(&case.args, &case.kwargs) {
            Ok(actual) if actual == case.expected => Verdict::Passed,
            Ok(_) => Verdict::Failed,
            // The recording promised a normal return that did not
            // reproduce
            Err(_) => Verdict::Failed,
        }
    }

    /// Verify every log file and accumulate a summary.
    ///
    /// Cases are independent; iteration follows the input order so
    /// output is reproducible. One bad file degrades the summary, not
    /// the run.
    #[must_use]
    pub fn run_suite<P: AsRef<Path>>(&self, paths: &[P]) -> TestSummary {
        let mut summary = TestSummary::default();
        for path in paths {
            let path = path.as_ref();
            match self.build_test_case(path) {
                Ok(case) => match self.verify(&case) {
                    Verdict::Passed => {
                        tracing::debug!(case = %case.identity, "passed");
                        summary.passed += 1;
                    }
                    Verdict::Failed => {
                        tracing::debug!(case = %case.identity, "failed");
                        summary.failed += 1;
                    }
                },
                Err(skip) => {
                    tracing::debug!(path = %path.display(), %skip, "skipped");
                    summary.skipped += 1;
                }
            }
        }
        summary
    }

    /// Evaluate one log file to a terminal state.
    #[must_use]
    pub fn run_one(&self, path: &Path) -> Result<Verdict, Skip> {
        self.build_test_case(path).map(|case| self.verify(&case))
    }
}
