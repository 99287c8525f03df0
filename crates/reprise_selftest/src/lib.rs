//! REPRISE Self-Test
//!
//! End-to-end harness: registers synthetic callables with known
//! input/output pairs, drives them through capture into a temporary
//! log root, replays the resulting logs, and reports the summary.
//! The temporary artifacts are deleted when the harness finishes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fixtures;

use reprise_capture::{CaptureConfig, Recorder};
use reprise_core::Kwargs;
use reprise_log::LogStore;
use reprise_replay::{ReplayEngine, TestSummary};
use std::sync::Arc;
use thiserror::Error;

/// Harness infrastructure failure.
///
/// Distinct from test failures, which land in the summary.
#[derive(Debug, Error)]
pub enum SelfTestError {
    /// The temporary workspace could not be created
    #[error("could not create self-test workspace: {0}")]
    Workspace(#[from] std::io::Error),

    /// A fixture faulted while being captured
    #[error("fixture {identity} faulted during capture: {message}")]
    Fixture {
        /// The fixture's qualified identity
        identity: String,
        /// The fault message
        message: String,
    },
}

/// Capture every fixture, replay the logs, and summarize.
///
/// A healthy build reports no failures and no skips.
///
/// # Errors
///
/// Returns an error only on harness infrastructure failure; test
/// failures are reported through the summary.
pub fn run() -> Result<TestSummary, SelfTestError> {
    let workspace = tempfile::tempdir()?;
    tracing::debug!(root = %workspace.path().display(), "self-test workspace");

    let fixture_set = fixtures::all();
    // Budget must cover every fixture input so each pair is recorded
    let budget = fixture_set
        .iter()
        .map(|fixture| fixture.inputs.len() as u64)
        .max()
        .unwrap_or(0);
    let recorder = Recorder::new(
        CaptureConfig::default()
            .with_log_root(workspace.path())
            .with_budget(budget),
    );

    for fixture in fixture_set {
        let wrapped = recorder.wrap(fixture.identity.clone(), fixture.func);
        for input in &fixture.inputs {
            wrapped
                .call(input, &Kwargs::new())
                .map_err(|fault| SelfTestError::Fixture {
                    identity: fixture.identity.qualified(),
                    message: fault.message,
                })?;
        }
    }

    let engine = ReplayEngine::new(Arc::new(fixtures::registry()));
    let paths = LogStore::list_log_files(workspace.path());
    let summary = engine.run_suite(&paths);

    // TempDir drop removes the generated artifacts
    Ok(summary)
}
