//! Explicit parameter schemas.
//!
//! Rust has no runtime call-signature reflection, so a target function's
//! declared signature is registered once as an explicit [`Signature`]: an
//! ordered list of named parameters with optional defaults, plus the
//! optional names of a catch-all positional parameter (collects excess
//! positional arguments) and a catch-all keyword parameter (collects
//! unmatched keyword arguments). Schemas are validated when built, so
//! malformed declarations are rejected at registration time rather than at
//! every call.

use crate::error::ContractError;
use crate::value::Value;
use rustc_hash::FxHashMap;

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    name: String,
    default: Option<Value>,
}

impl Param {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default value filled in when the parameter is not supplied,
    /// if the parameter is optional.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// The declared call signature of a target function.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    name: String,
    params: Vec<Param>,
    /// Parameter name -> position in `params`.
    index: FxHashMap<String, usize>,
    varargs: Option<String>,
    varkw: Option<String>,
}

impl Signature {
    /// Start building a signature for the target function `name`.
    pub fn builder(name: impl Into<String>) -> SignatureBuilder {
        SignatureBuilder {
            name: name.into(),
            params: Vec::new(),
            varargs: None,
            varkw: None,
        }
    }

    /// The target function's name, used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameters in declaration order, excluding the catch-alls.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Position of a declared (non-catch-all) parameter.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Name of the catch-all positional parameter, if declared.
    pub fn varargs(&self) -> Option<&str> {
        self.varargs.as_deref()
    }

    /// Name of the catch-all keyword parameter, if declared.
    pub fn varkw(&self) -> Option<&str> {
        self.varkw.as_deref()
    }

    /// Whether `name` is declared by this signature, counting both
    /// catch-all parameter names.
    pub fn declares(&self, name: &str) -> bool {
        self.index.contains_key(name)
            || self.varargs.as_deref() == Some(name)
            || self.varkw.as_deref() == Some(name)
    }
}

/// Builder for [`Signature`] with registration-time validation.
#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    name: String,
    params: Vec<Param>,
    varargs: Option<String>,
    varkw: Option<String>,
}

impl SignatureBuilder {
    /// Declare a required parameter.
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.params.push(Param {
            name: name.into(),
            default: None,
        });
        self
    }

    /// Declare an optional parameter with a default value.
    pub fn optional(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.params.push(Param {
            name: name.into(),
            default: Some(default.into()),
        });
        self
    }

    /// Declare a catch-all positional parameter.
    pub fn varargs(mut self, name: impl Into<String>) -> Self {
        self.varargs = Some(name.into());
        self
    }

    /// Declare a catch-all keyword parameter.
    pub fn varkw(mut self, name: impl Into<String>) -> Self {
        self.varkw = Some(name.into());
        self
    }

    /// Validate and build the signature.
    ///
    /// Rejects duplicate parameter names (including collisions with either
    /// catch-all name) and a required parameter declared after an optional
    /// one.
    pub fn build(self) -> Result<Signature, ContractError> {
        let mut index = FxHashMap::default();
        let mut seen_optional = false;
        for (pos, param) in self.params.iter().enumerate() {
            if index.insert(param.name.clone(), pos).is_some() {
                return Err(ContractError::DuplicateParameter {
                    signature: self.name,
                    name: param.name.clone(),
                });
            }
            if param.default.is_some() {
                seen_optional = true;
            } else if seen_optional {
                return Err(ContractError::RequiredAfterOptional {
                    signature: self.name,
                    name: param.name.clone(),
                });
            }
        }
        for catch_all in [self.varargs.as_deref(), self.varkw.as_deref()]
            .into_iter()
            .flatten()
        {
            if index.contains_key(catch_all) {
                return Err(ContractError::DuplicateParameter {
                    signature: self.name,
                    name: catch_all.to_string(),
                });
            }
        }
        if let (Some(va), Some(kw)) = (self.varargs.as_deref(), self.varkw.as_deref()) {
            if va == kw {
                return Err(ContractError::DuplicateParameter {
                    signature: self.name,
                    name: kw.to_string(),
                });
            }
        }
        Ok(Signature {
            name: self.name,
            params: self.params,
            index,
            varargs: self.varargs,
            varkw: self.varkw,
        })
    }
}
