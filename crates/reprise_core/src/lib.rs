//! REPRISE Core
//!
//! Function identities, the schema-less payload value model, and the
//! registry that maps identities back to live callables at replay time.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod identity;
pub mod registry;
pub mod value;

pub use error::{IdentityError, RegistryError};
pub use identity::{FnIdentity, LOG_SUFFIX};
pub use registry::{CallFault, CallResult, FnRegistry, NativeFn};
pub use value::{Kwargs, Value};
