//! REPRISE CLI
//!
//! Command-line interface for replaying captured function logs as
//! regression tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

use clap::{Parser, Subcommand};
use color_eyre::Result;
use reprise_log::LogStore;
use reprise_replay::{ReplayEngine, TestSummary};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reprise")]
#[command(about = "REPRISE - record function calls now, verify them later", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay every log file in a directory and verify the recordings
    Verify {
        /// Directory containing log files
        #[arg(short, long)]
        logs: PathBuf,
    },
    /// Decode and print the records in a log file
    Inspect {
        /// Path to the log file
        #[arg(short, long)]
        log: PathBuf,
    },
    /// Capture and replay the built-in fixtures end to end
    Selftest,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reprise=info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Verify { logs } => {
            let registry = Arc::new(reprise_selftest::fixtures::registry());
            let engine = ReplayEngine::new(registry);
            let paths = LogStore::list_log_files(&logs);
            Ok(report(&engine.run_suite(&paths)))
        }
        Commands::Inspect { log } => {
            let records = LogStore::read_all(&log)?;
            for record in records {
                println!("{}", serde_json::to_string(&record)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Selftest => {
            let summary = reprise_selftest::run()?;
            Ok(report(&summary))
        }
    }
}

/// Print the summary as `passed failed skipped` and map it to the
/// process exit code.
fn report(summary: &TestSummary) -> ExitCode {
    println!("{}", summary);
    if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
