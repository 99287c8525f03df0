//! Aggregate verification counters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Counters over one verification run.
///
/// `passed + failed + skipped` always equals the number of log files
/// processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSummary {
    /// Cases whose replayed output matched the recording
    pub passed: usize,
    /// Cases whose replayed output diverged from the recording
    pub failed: usize,
    /// Log files that yielded no comparable case
    pub skipped: usize,
}

impl TestSummary {
    /// Total number of log files processed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    /// Whether the run had no failures.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for TestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.passed, self.failed, self.skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_total() {
        let summary = TestSummary {
            passed: 3,
            failed: 1,
            skipped: 2,
        };
        assert_eq!(summary.total(), 6);
        assert!(!summary.is_success());
    }

    #[test]
    fn test_summary_success_ignores_skips() {
        let summary = TestSummary {
            passed: 0,
            failed: 0,
            skipped: 5,
        };
        assert!(summary.is_success());
    }

    #[test]
    fn test_summary_display() {
        let summary = TestSummary {
            passed: 1,
            failed: 2,
            skipped: 3,
        };
        assert_eq!(summary.to_string(), "1 2 3");
    }
}
