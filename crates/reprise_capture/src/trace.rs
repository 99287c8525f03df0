//! Console tracing of captured invocations.
//!
//! Purely observational: trace output is never consumed by the core
//! and may be disabled without affecting capture semantics.

use reprise_core::{FnIdentity, Kwargs, Value};

/// Collaborator that renders the phases of a captured invocation.
pub trait Tracer: Send + Sync {
    /// A call is about to run.
    fn call(&self, identity: &FnIdentity, args: &[Value], kwargs: &Kwargs);
    /// The call returned normally.
    fn ret(&self, identity: &FnIdentity, result: &Value);
    /// The call faulted.
    fn error(&self, identity: &FnIdentity, message: &str);
}

/// Tracer that prints bracketing lines to stdout.
pub struct StdoutTracer;

impl Tracer for StdoutTracer {
    fn call(&self, identity: &FnIdentity, args: &[Value], kwargs: &Kwargs) {
        println!("<{}>CALL", identity.qualified());
        println!("{}", format_args_line(args));
        println!("{}", format_kwargs_line(kwargs));
    }

    fn ret(&self, identity: &FnIdentity, result: &Value) {
        println!("</{}>RETURN {}", identity.qualified(), result);
    }

    fn error(&self, identity: &FnIdentity, message: &str) {
        println!("<{}>ERROR {}", identity.qualified(), message);
    }
}

/// Tracer that emits nothing.
pub struct NullTracer;

impl Tracer for NullTracer {
    fn call(&self, _identity: &FnIdentity, _args: &[Value], _kwargs: &Kwargs) {}
    fn ret(&self, _identity: &FnIdentity, _result: &Value) {}
    fn error(&self, _identity: &FnIdentity, _message: &str) {}
}

/// Comma-joined preview of positional arguments.
#[must_use]
pub fn format_args_line(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-joined `key=value` preview of keyword arguments.
#[must_use]
pub fn format_kwargs_line(kwargs: &Kwargs) -> String {
    kwargs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(", ")
}
