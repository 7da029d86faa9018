//! Error types for descriptor contracts and call-argument binding.
//!
//! Two failure families exist. [`ContractError`] covers malformed inputs at
//! the construction or descriptor boundary: a first call argument that is
//! not a descriptor, a non-boolean inner-scope flag, or an ill-formed
//! parameter schema. [`BindError`] covers call-time arguments that do not
//! satisfy the target signature. Both are fatal to the call; there is no
//! retry or fallback path.

use thiserror::Error;

/// A violation of the decorator's call or construction contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("expected a FuncInfo descriptor as first argument")]
    MissingDescriptor,

    #[error("expected a FuncInfo descriptor as first argument, got {found}")]
    NotADescriptor { found: &'static str },

    #[error("inner-scope flag of FuncInfo must be boolean, got {found}")]
    NonBooleanFlag { found: &'static str },

    #[error("duplicate parameter '{name}' in signature '{signature}'")]
    DuplicateParameter { signature: String, name: String },

    #[error("required parameter '{name}' follows an optional parameter in signature '{signature}'")]
    RequiredAfterOptional { signature: String, name: String },
}

/// Call-time arguments that cannot be bound to the target signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("{function}() takes {expected} positional arguments but {given} were given")]
    TooManyPositional {
        function: String,
        expected: usize,
        given: usize,
    },

    #[error("{function}() got an unexpected keyword argument '{name}'")]
    UnexpectedKeyword { function: String, name: String },

    #[error("{function}() got multiple values for argument '{name}'")]
    DuplicateArgument { function: String, name: String },

    #[error("{function}() missing required argument '{name}'")]
    MissingArgument { function: String, name: String },

    #[error("{function}() expects a single argument map in inner-scope mode, got {found}")]
    ExpectedArgumentMap { function: String, found: String },

    #[error("{function}() catch-all entry '{name}' must hold a map, got {found}")]
    CatchAllNotAMap {
        function: String,
        name: String,
        found: &'static str,
    },
}

/// Top-level error for the decorator surface.
///
/// Binder failures convert via `From`; validator failures are carried in
/// [`Error::Validation`] and pass through the decorator unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Binding(#[from] BindError),

    #[error("{0}")]
    Validation(String),
}
