//! parachute_core: Value model, parameter schemas, and error types.
//!
//! Provides the dynamic argument `Value`, the explicit `Signature` schema
//! that stands in for runtime call-signature introspection, the `FuncInfo`
//! descriptor, and the error types shared across the workspace.

pub mod error;
pub mod funcinfo;
pub mod signature;
pub mod value;

// Re-export commonly used types
pub use error::{BindError, ContractError, Error};
pub use funcinfo::FuncInfo;
pub use signature::{Param, Signature, SignatureBuilder};
pub use value::{ArgMap, Value};
