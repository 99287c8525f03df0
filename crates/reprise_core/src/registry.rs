//! Registry mapping function identities to live callables.
//!
//! Resolution is an explicit, process-populated lookup rather than
//! dynamic loading: a process registers the callables it knows about
//! at startup, and replay resolves identities against that table. A
//! miss is a normal outcome (the recorded function may no longer
//! exist), so lookups return `Option` rather than an error.

use crate::error::RegistryError;
use crate::identity::FnIdentity;
use crate::value::{Kwargs, Value};
use indexmap::IndexMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Fault raised by a callable's own execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFault {
    /// The fault message, recorded verbatim
    pub message: String,
}

impl CallFault {
    /// Create a fault with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CallFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CallFault {}

/// Result of invoking a callable.
pub type CallResult = Result<Value, CallFault>;

/// A live callable that instrumentation can wrap and the replay
/// engine can re-invoke.
pub trait NativeFn: Send + Sync {
    /// Invoke with positional and keyword arguments.
    fn call(&self, args: &[Value], kwargs: &Kwargs) -> CallResult;
}

impl<F> NativeFn for F
where
    F: Fn(&[Value], &Kwargs) -> CallResult + Send + Sync,
{
    fn call(&self, args: &[Value], kwargs: &Kwargs) -> CallResult {
        self(args, kwargs)
    }
}

/// Registry of callables keyed by qualified identity.
pub struct FnRegistry {
    entries: IndexMap<String, Arc<dyn NativeFn>>,
}

impl FnRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register a callable under an identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity is already registered.
    pub fn register(
        &mut self,
        identity: &FnIdentity,
        func: Arc<dyn NativeFn>,
    ) -> Result<(), RegistryError> {
        let key = identity.qualified();
        if self.entries.contains_key(&key) {
            return Err(RegistryError::AlreadyRegistered { identity: key });
        }
        self.entries.insert(key, func);
        Ok(())
    }

    /// Resolve an identity to a live callable.
    #[must_use]
    pub fn resolve(&self, identity: &FnIdentity) -> Option<Arc<dyn NativeFn>> {
        self.entries.get(&identity.qualified()).map(Arc::clone)
    }

    /// Resolve the identity embedded in a log file path.
    ///
    /// An unparseable path resolves to `None`, like any other miss.
    #[must_use]
    pub fn resolve_path(&self, path: &Path) -> Option<Arc<dyn NativeFn>> {
        let identity = FnIdentity::from_log_path(path).ok()?;
        self.resolve(&identity)
    }

    /// Check whether an identity is registered.
    #[must_use]
    pub fn contains(&self, identity: &FnIdentity) -> bool {
        self.entries.contains_key(&identity.qualified())
    }

    /// List all registered qualified identities.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// The number of registered callables.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FnRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double() -> Arc<dyn NativeFn> {
        Arc::new(|args: &[Value], _kwargs: &Kwargs| match args {
            [Value::Int(x)] => Ok(Value::Int(2 * x)),
            _ => Err(CallFault::new("double expects one integer")),
        })
    }

    #[test]
    fn test_registry_new() {
        let registry = FnRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_registry_register_and_resolve() {
        let mut registry = FnRegistry::new();
        let identity = FnIdentity::new("pkg", "double").unwrap();
        registry.register(&identity, double()).unwrap();

        assert!(registry.contains(&identity));
        let func = registry.resolve(&identity).unwrap();
        let result = func.call(&[Value::Int(5)], &Kwargs::new()).unwrap();
        assert_eq!(result, Value::Int(10));
    }

    #[test]
    fn test_registry_register_duplicate() {
        let mut registry = FnRegistry::new();
        let identity = FnIdentity::new("pkg", "double").unwrap();
        registry.register(&identity, double()).unwrap();

        let result = registry.register(&identity, double());
        assert!(matches!(
            result,
            Err(RegistryError::AlreadyRegistered { .. })
        ));
    }

    #[test]
    fn test_registry_miss_is_none() {
        let registry = FnRegistry::new();
        let identity = FnIdentity::new("gone", "fn").unwrap();
        assert!(registry.resolve(&identity).is_none());
    }

    #[test]
    fn test_registry_resolve_path() {
        let mut registry = FnRegistry::new();
        let identity = FnIdentity::new("pkg", "double").unwrap();
        registry.register(&identity, double()).unwrap();

        assert!(registry.resolve_path(Path::new("logs/pkg.double.log")).is_some());
        assert!(registry.resolve_path(Path::new("logs/pkg.other.log")).is_none());
        assert!(registry.resolve_path(Path::new("logs/not-a-log.txt")).is_none());
    }

    #[test]
    fn test_registry_list_order() {
        let mut registry = FnRegistry::new();
        registry
            .register(&FnIdentity::new("pkg", "b").unwrap(), double())
            .unwrap();
        registry
            .register(&FnIdentity::new("pkg", "a").unwrap(), double())
            .unwrap();
        assert_eq!(registry.list(), vec!["pkg.b", "pkg.a"]);
    }

    #[test]
    fn test_call_fault_display() {
        let fault = CallFault::new("boom");
        assert_eq!(fault.to_string(), "boom");
    }
}
