//! Synthetic fixture callables with known input/output pairs.

use reprise_core::{CallFault, CallResult, FnIdentity, FnRegistry, Kwargs, NativeFn, Value};
use std::sync::Arc;

/// Namespace shared by every fixture.
pub const NAMESPACE: &str = "selftest";

/// One fixture: a callable plus the inputs to drive it with.
pub struct Fixture {
    /// Identity the fixture is registered and logged under
    pub identity: FnIdentity,
    /// The callable itself
    pub func: Arc<dyn NativeFn>,
    /// Positional-argument lists to invoke it with, in order
    pub inputs: Vec<Vec<Value>>,
}

fn add(args: &[Value], _kwargs: &Kwargs) -> CallResult {
    match args {
        [Value::Int(x), Value::Int(y)] => Ok(Value::Int(x + y)),
        _ => Err(CallFault::new("add expects two integers")),
    }
}

fn multiply(args: &[Value], _kwargs: &Kwargs) -> CallResult {
    match args {
        [Value::Int(x), Value::Int(y)] => Ok(Value::Int(x * y)),
        _ => Err(CallFault::new("multiply expects two integers")),
    }
}

fn upper(args: &[Value], _kwargs: &Kwargs) -> CallResult {
    match args {
        [Value::Str(s)] => Ok(Value::Str(s.to_uppercase())),
        _ => Err(CallFault::new("upper expects one string")),
    }
}

fn sort_ints(args: &[Value], _kwargs: &Kwargs) -> CallResult {
    match args {
        [Value::Seq(items)] => {
            let mut ints = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Int(x) => ints.push(*x),
                    other => {
                        return Err(CallFault::new(format!(
                            "sort expects integers, got {}",
                            other.kind()
                        )));
                    }
                }
            }
            ints.sort_unstable();
            Ok(Value::Seq(ints.into_iter().map(Value::Int).collect()))
        }
        _ => Err(CallFault::new("sort expects one sequence")),
    }
}

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}

/// All fixtures, in registration order.
#[must_use]
pub fn all() -> Vec<Fixture> {
    vec![
        Fixture {
            identity: FnIdentity::new(NAMESPACE, "add").expect("static identity"),
            func: Arc::new(add),
            inputs: vec![ints(&[1, 2]), ints(&[3, 4]), ints(&[5, 6])],
        },
        Fixture {
            identity: FnIdentity::new(NAMESPACE, "multiply").expect("static identity"),
            func: Arc::new(multiply),
            inputs: vec![ints(&[2, 3]), ints(&[4, 5]), ints(&[6, 7])],
        },
        Fixture {
            identity: FnIdentity::new(NAMESPACE, "upper").expect("static identity"),
            func: Arc::new(upper),
            inputs: vec![
                vec![Value::from("hello")],
                vec![Value::from("world")],
                vec![Value::from("foo")],
            ],
        },
        Fixture {
            identity: FnIdentity::new(NAMESPACE, "sort").expect("static identity"),
            func: Arc::new(sort_ints),
            inputs: vec![
                vec![Value::Seq(ints(&[3, 1, 2]))],
                vec![Value::Seq(ints(&[6, 4, 5]))],
                vec![Value::Seq(ints(&[9, 7, 8]))],
            ],
        },
    ]
}

/// A registry holding every fixture.
#[must_use]
pub fn registry() -> FnRegistry {
    let mut registry = FnRegistry::new();
    for fixture in all() {
        registry
            .register(&fixture.identity, fixture.func)
            .expect("fixture identities are distinct");
    }
    registry
}
