//! The binding engine.
//!
//! Full binding follows standard call-argument resolution:
//! 1. Bind positional arguments to declared parameters in order
//! 2. Collect excess positionals under the catch-all positional name
//! 3. Bind keyword arguments to declared parameters by name
//! 4. Collect unmatched keywords under the catch-all keyword name
//! 5. Fill defaults for unsupplied optional parameters
//! 6. Error on missing required parameters
//!
//! Inner-scope binding instead filters an already-bound map down to the
//! names the signature declares; nothing is defaulted.

use parachute_core::error::BindError;
use parachute_core::signature::Signature;
use parachute_core::value::{ArgMap, Value};

/// Bind raw positional and keyword arguments against `sig`.
///
/// The result contains every declared parameter name in declaration order,
/// followed by the catch-all positional entry (a list) and the catch-all
/// keyword entry (a map) when the signature declares them. Catch-all
/// entries are present even when empty, mirroring the declared signature.
pub fn bind_call(sig: &Signature, args: &[Value], kwargs: &ArgMap) -> Result<ArgMap, BindError> {
    let params = sig.params();
    let mut slots: Vec<Option<Value>> = vec![None; params.len()];
    let mut extra_positional: Vec<Value> = Vec::new();

    // ========================================================================
    // Phase 1: positional arguments
    // ========================================================================
    for (pos, arg) in args.iter().enumerate() {
        if pos < params.len() {
            slots[pos] = Some(arg.clone());
        } else if sig.varargs().is_some() {
            extra_positional.push(arg.clone());
        } else {
            return Err(BindError::TooManyPositional {
                function: sig.name().to_string(),
                expected: params.len(),
                given: args.len(),
            });
        }
    }

    // ========================================================================
    // Phase 2: keyword arguments
    // ========================================================================
    let mut extra_keywords = ArgMap::new();
    for (name, value) in kwargs {
        if let Some(pos) = sig.position(name) {
            if slots[pos].is_some() {
                return Err(BindError::DuplicateArgument {
                    function: sig.name().to_string(),
                    name: name.clone(),
                });
            }
            slots[pos] = Some(value.clone());
        } else if sig.varkw().is_some() {
            extra_keywords.insert(name.clone(), value.clone());
        } else {
            return Err(BindError::UnexpectedKeyword {
                function: sig.name().to_string(),
                name: name.clone(),
            });
        }
    }

    // ========================================================================
    // Phase 3: defaults and assembly in declaration order
    // ========================================================================
    let mut bound = ArgMap::with_capacity(params.len() + 2);
    for (param, slot) in params.iter().zip(slots) {
        let value = match slot {
            Some(v) => v,
            None => param
                .default()
                .cloned()
                .ok_or_else(|| BindError::MissingArgument {
                    function: sig.name().to_string(),
                    name: param.name().to_string(),
                })?,
        };
        bound.insert(param.name().to_string(), value);
    }
    if let Some(rest) = sig.varargs() {
        bound.insert(rest.to_string(), Value::List(extra_positional));
    }
    if let Some(kw) = sig.varkw() {
        bound.insert(kw.to_string(), Value::Map(extra_keywords));
    }
    Ok(bound)
}

/// Bind in inner-scope mode: the sole argument is an already-bound map.
///
/// Keys not declared by `sig` are silently dropped. Missing parameters are
/// NOT filled with defaults; the caller asserts the map is already bound.
pub fn bind_inner(sig: &Signature, args: &[Value]) -> Result<ArgMap, BindError> {
    let map = match args {
        [Value::Map(map)] => map,
        [other] => {
            return Err(BindError::ExpectedArgumentMap {
                function: sig.name().to_string(),
                found: other.type_name().to_string(),
            })
        }
        _ => {
            return Err(BindError::ExpectedArgumentMap {
                function: sig.name().to_string(),
                found: format!("{} positional arguments", args.len()),
            })
        }
    };
    Ok(map
        .iter()
        .filter(|(name, _)| sig.declares(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect())
}

/// Fold the catch-all keyword entry of `bound` into the top level.
///
/// If `sig` declares a catch-all keyword parameter and `bound` holds an
/// entry under that name, the entry is removed and its contents merged as
/// an overwrite-update: on key collision the catch-all value wins, while an
/// already-present key keeps its original position.
pub fn merge_catch_all(sig: &Signature, bound: &mut ArgMap) -> Result<(), BindError> {
    let Some(kw_name) = sig.varkw() else {
        return Ok(());
    };
    let Some(entry) = bound.shift_remove(kw_name) else {
        return Ok(());
    };
    match entry {
        Value::Map(extras) => {
            for (name, value) in extras {
                bound.insert(name, value);
            }
            Ok(())
        }
        other => Err(BindError::CatchAllNotAMap {
            function: sig.name().to_string(),
            name: kw_name.to_string(),
            found: other.type_name(),
        }),
    }
}
