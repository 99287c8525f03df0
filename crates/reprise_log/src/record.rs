//! Record types written to function log files.

use reprise_core::{Kwargs, Value};
use serde::{Deserialize, Serialize};

/// One typed entry in a function's log file.
///
/// A well-formed capture session appends exactly one `Call` followed
/// by exactly one `Return` or `Error` per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Record {
    /// Arguments of one invocation
    Call {
        /// Positional arguments, in call order
        args: Vec<Value>,
        /// Keyword arguments, in declaration order
        kwargs: Kwargs,
    },
    /// Normal return of an invocation
    Return {
        /// The returned value
        result: Value,
        /// Elapsed wall-clock time of the call, in seconds
        execution_time: f64,
    },
    /// Fault raised by an invocation
    Error {
        /// The fault message, recorded verbatim
        message: String,
    },
}

impl Record {
    /// Build a call record.
    #[must_use]
    pub fn call(args: Vec<Value>, kwargs: Kwargs) -> Self {
        Self::Call { args, kwargs }
    }

    /// Build a return record.
    #[must_use]
    pub fn ret(result: Value, execution_time: f64) -> Self {
        Self::Return {
            result,
            execution_time,
        }
    }

    /// Build an error record.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Whether this is a call record.
    #[must_use]
    pub const fn is_call(&self) -> bool {
        matches!(self, Self::Call { .. })
    }

    /// Whether this is a return record.
    #[must_use]
    pub const fn is_return(&self) -> bool {
        matches!(self, Self::Return { .. })
    }

    /// Whether this is an error record.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_constructors() {
        let call = Record::call(vec![Value::Int(1)], Kwargs::new());
        assert!(call.is_call());
        assert!(!call.is_return());

        let ret = Record::ret(Value::Int(2), 0.5);
        assert!(ret.is_return());

        let err = Record::error("boom");
        assert!(err.is_error());
    }

    #[test]
    fn test_record_equality() {
        let a = Record::call(vec![Value::Int(1)], Kwargs::new());
        let b = Record::call(vec![Value::Int(1)], Kwargs::new());
        assert_eq!(a, b);
    }
}
