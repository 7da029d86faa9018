//! The parachute decorator.
//!
//! Wraps a parameter-validation function so it receives one flattened
//! argument map instead of raw call arguments. The returned closure is
//! stateless and reentrant; concurrent calls are independent.

use crate::binder::{bind_call, bind_inner, merge_catch_all};
use parachute_core::error::{ContractError, Error};
use parachute_core::value::{ArgMap, Value};

/// Wrap the validator `f`.
///
/// The returned `wrapped(args, kwargs)` expects `args[0]` to be a
/// [`Value::Func`] descriptor; the remaining arguments are bound against the
/// descriptor's target signature. With the inner-scope flag set, the sole
/// remaining positional argument must be an already-bound map and `kwargs`
/// is ignored; otherwise full call-argument binding applies. The catch-all
/// keyword entry is folded into the top level before `f` is invoked with the
/// result. `f`'s return value and errors pass through unmodified.
pub fn parachute<F, T>(f: F) -> impl Fn(&[Value], &ArgMap) -> Result<T, Error>
where
    F: Fn(&ArgMap) -> Result<T, Error>,
{
    move |args, kwargs| {
        let (first, rest) = args
            .split_first()
            .ok_or(ContractError::MissingDescriptor)?;
        let info = match first {
            Value::Func(info) => info,
            other => {
                return Err(ContractError::NotADescriptor {
                    found: other.type_name(),
                }
                .into())
            }
        };

        let mut bound = if info.inner_scope() {
            bind_inner(info.target(), rest)?
        } else {
            bind_call(info.target(), rest, kwargs)?
        };
        merge_catch_all(info.target(), &mut bound)?;

        f(&bound)
    }
}
