//! Capture configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the instrumentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Whether capture is enabled at all; when false, wrapping is a
    /// zero-overhead passthrough
    pub enabled: bool,
    /// Root directory for log files
    pub log_root: PathBuf,
    /// How many invocations of each wrapped callable are recorded
    /// before the wrapper becomes a pure passthrough
    pub budget: u64,
    /// Emit console trace lines bracketing each captured call
    pub verbose: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_root: PathBuf::from("logs"),
            budget: 2,
            verbose: false,
        }
    }
}

impl CaptureConfig {
    /// Set the log root.
    #[must_use]
    pub fn with_log_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.log_root = root.into();
        self
    }

    /// Set the capture budget.
    #[must_use]
    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    /// Enable console trace lines.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Disable capture entirely.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CaptureConfig::default();
        assert!(config.enabled);
        assert_eq!(config.budget, 2);
        assert_eq!(config.log_root, PathBuf::from("logs"));
        assert!(!config.verbose);
    }

    #[test]
    fn test_config_builders() {
        let config = CaptureConfig::default()
            .with_log_root("captures")
            .with_budget(5)
            .verbose()
            .disabled();
        assert_eq!(config.log_root, PathBuf::from("captures"));
        assert_eq!(config.budget, 5);
        assert!(config.verbose);
        assert!(!config.enabled);
    }
}
