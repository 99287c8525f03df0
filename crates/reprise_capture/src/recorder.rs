//! Budgeted instrumentation wrapper.

use crate::config::CaptureConfig;
use crate::trace::{NullTracer, StdoutTracer, Tracer};
use reprise_core::{CallResult, FnIdentity, Kwargs, NativeFn, Value};
use reprise_log::LogStore;
use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Wraps target callables so their invocations are captured.
pub struct Recorder {
    config: CaptureConfig,
    tracer: Arc<dyn Tracer>,
}

impl Recorder {
    /// Create a recorder from a configuration.
    #[must_use]
    pub fn new(config: CaptureConfig) -> Self {
        let tracer: Arc<dyn Tracer> = if config.verbose {
            Arc::new(StdoutTracer)
        } else {
            Arc::new(NullTracer)
        };
        Self { config, tracer }
    }

    /// Replace the console tracer.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Arc<dyn Tracer>) -> Self {
        self.tracer = tracer;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Wrap a callable under an identity.
    ///
    /// When capture is disabled this returns `func` itself, so
    /// disabling instrumentation has no residual cost. Otherwise the
    /// returned wrapper records the first `budget` invocations and
    /// passes every later one straight through.
    #[must_use]
    pub fn wrap(&self, identity: FnIdentity, func: Arc<dyn NativeFn>) -> Arc<dyn NativeFn> {
        if !self.config.enabled {
            return func;
        }
        tracing::debug!(identity = %identity, "instrumenting callable");
        Arc::new(Instrumented {
            identity,
            inner: func,
            store: LogStore::new(&self.config.log_root),
            budget: self.config.budget,
            invocations: AtomicU64::new(0),
            tracer: Arc::clone(&self.tracer),
        })
    }
}

/// A wrapped callable with a private invocation counter.
///
/// The counter belongs to this wrapper instance alone and is never
/// reset. Append order within the log file matches invocation order
/// only for callers on one thread; concurrent callers must not share
/// a log file.
struct Instrumented {
    identity: FnIdentity,
    inner: Arc<dyn NativeFn>,
    store: LogStore,
    budget: u64,
    invocations: AtomicU64,
    tracer: Arc<dyn Tracer>,
}

impl NativeFn for Instrumented {
    fn call(&self, args: &[Value], kwargs: &Kwargs) -> CallResult {
        let invocation = self.invocations.fetch_add(1, Ordering::SeqCst) + 1;
        if invocation > self.budget {
            return self.inner.call(args, kwargs);
        }

        // Logging is best-effort: a capture failure is reported but
        // must never keep the wrapped callable from running.
        let path = self.store.log_path(&self.identity);
        if let Some(dir) = path.parent() {
            if let Err(err) = fs::create_dir_all(dir) {
                tracing::warn!(dir = %dir.display(), %err, "could not create log directory");
            }
        }
        if let Err(err) = self.store.append_call(&self.identity, args, kwargs) {
            tracing::warn!(identity = %self.identity, %err, "could not record call");
        }
        self.tracer.call(&self.identity, args, kwargs);

        let start = Instant::now();
        match self.inner.call(args, kwargs) {
            Ok(result) => {
                let elapsed = start.elapsed().as_secs_f64();
                if let Err(err) = self.store.append_return(&self.identity, &result, elapsed) {
                    tracing::warn!(identity = %self.identity, %err, "could not record return");
                }
                self.tracer.ret(&self.identity, &result);
                Ok(result)
            }
            Err(fault) => {
                if let Err(err) = self.store.append_error(&self.identity, &fault.message) {
                    tracing::warn!(identity = %self.identity, %err, "could not record fault");
                }
                self.tracer.error(&self.identity, &fault.message);
                // The caller observes the identical fault, recorded or not
                Err(fault)
            }
        }
    }
}
