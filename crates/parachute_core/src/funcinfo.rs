//! The call descriptor passed as first argument to a wrapped validator.
//!
//! A [`FuncInfo`] names the target signature to bind against and carries the
//! inner-scope flag: when set, the caller supplies a single already-bound
//! argument map instead of raw call arguments. Descriptors are built
//! immediately before a call and have no persistence beyond it.

use crate::error::ContractError;
use crate::signature::Signature;
use crate::value::Value;
use std::sync::Arc;

/// Descriptor pairing a target signature with the binding mode.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncInfo {
    target: Arc<Signature>,
    inner_scope: bool,
}

impl FuncInfo {
    pub fn new(target: Arc<Signature>, inner_scope: bool) -> Self {
        Self {
            target,
            inner_scope,
        }
    }

    /// Validating factory for a dynamically-sourced flag value.
    ///
    /// Rejects any non-boolean flag at construction, so a malformed
    /// descriptor never reaches the binder.
    pub fn from_flag(target: Arc<Signature>, flag: &Value) -> Result<Self, ContractError> {
        match flag {
            Value::Bool(inner_scope) => Ok(Self::new(target, *inner_scope)),
            other => Err(ContractError::NonBooleanFlag {
                found: other.type_name(),
            }),
        }
    }

    /// The signature used to bind call arguments.
    pub fn target(&self) -> &Signature {
        &self.target
    }

    /// Whether the caller supplies an already-bound argument map.
    pub fn inner_scope(&self) -> bool {
        self.inner_scope
    }
}
