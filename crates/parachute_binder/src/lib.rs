//! parachute_binder: Call-argument binding and the parachute decorator.
//!
//! Binds call-time arguments against a target signature into one flattened
//! parameter-name -> value map, folds catch-all keyword contents into the
//! top level, and hands the result to a wrapped validator as a single
//! structured argument.

mod binder;
mod wrap;

pub use binder::{bind_call, bind_inner, merge_catch_all};
pub use wrap::parachute;
