//! End-to-end decorator tests.
//!
//! Drives the full surface: build a signature, construct a descriptor, call
//! the wrapped validator, and check the flattened argument map it receives.

use parachute_binder::parachute;
use parachute_core::arg_map;
use parachute_core::{ArgMap, BindError, ContractError, Error, FuncInfo, Signature, Value};
use std::sync::Arc;

/// Helper: t(a, b=2, **kw)
fn target() -> Arc<Signature> {
    Arc::new(
        Signature::builder("t")
            .required("a")
            .optional("b", 2)
            .varkw("kw")
            .build()
            .unwrap(),
    )
}

/// Helper: a wrapped validator that returns the map it was given.
fn wrapped_echo() -> impl Fn(&[Value], &ArgMap) -> Result<ArgMap, Error> {
    parachute(|args: &ArgMap| Ok(args.clone()))
}

// ============================================================================
// Full binding mode
// ============================================================================

#[test]
fn test_full_binding_with_default_and_extra_keyword() {
    // t(a, b=2, **kw); wrapped(FuncInfo(t, false), 1, c=3) -> {a: 1, b: 2, c: 3}
    let wrapped = wrapped_echo();
    let info = Value::from(FuncInfo::new(target(), false));

    let got = wrapped(&[info, Value::Int(1)], &arg_map! { "c" => 3 }).unwrap();
    assert_eq!(got, arg_map! { "a" => 1, "b" => 2, "c" => 3 });
}

#[test]
fn test_full_binding_produces_exactly_declared_names() {
    let wrapped = wrapped_echo();
    let info = Value::from(FuncInfo::new(target(), false));

    let got = wrapped(&[info, Value::Int(1), Value::Int(5)], &ArgMap::new()).unwrap();
    let keys: Vec<_> = got.keys().map(String::as_str).collect();
    // Catch-all keyword name never appears post-merge
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(got["b"], Value::Int(5));
}

#[test]
fn test_full_binding_arity_errors() {
    let wrapped = wrapped_echo();

    let info = Value::from(FuncInfo::new(target(), false));
    let err = wrapped(&[info], &ArgMap::new()).unwrap_err();
    assert_eq!(
        err,
        Error::Binding(BindError::MissingArgument {
            function: "t".into(),
            name: "a".into(),
        })
    );

    let info = Value::from(FuncInfo::new(target(), false));
    let args = [info, Value::Int(1), Value::Int(2), Value::Int(3)];
    let err = wrapped(&args, &ArgMap::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::Binding(BindError::TooManyPositional { .. })
    ));
}

#[test]
fn test_unknown_keyword_without_catch_all() {
    // t2(a) declares no catch-all keyword parameter
    let sig = Arc::new(Signature::builder("t2").required("a").build().unwrap());
    let wrapped = wrapped_echo();
    let info = Value::from(FuncInfo::new(sig, false));

    let err = wrapped(&[info, Value::Int(1)], &arg_map! { "z" => 0 }).unwrap_err();
    assert_eq!(
        err,
        Error::Binding(BindError::UnexpectedKeyword {
            function: "t2".into(),
            name: "z".into(),
        })
    );
}

// ============================================================================
// Inner-scope mode
// ============================================================================

#[test]
fn test_inner_scope_filters_and_skips_defaults() {
    // wrapped(FuncInfo(t, true), {a: 5, b: 9, z: 99}) -> {a: 5, b: 9}
    let wrapped = wrapped_echo();
    let info = Value::from(FuncInfo::new(target(), true));
    let input = Value::Map(arg_map! { "a" => 5, "b" => 9, "z" => 99 });

    let got = wrapped(&[info, input], &ArgMap::new()).unwrap();
    assert_eq!(got, arg_map! { "a" => 5, "b" => 9 });
}

#[test]
fn test_inner_scope_missing_keys_not_defaulted() {
    let wrapped = wrapped_echo();
    let info = Value::from(FuncInfo::new(target(), true));
    let input = Value::Map(arg_map! { "a" => 5 });

    let got = wrapped(&[info, input], &ArgMap::new()).unwrap();
    assert!(!got.contains_key("b"));
}

#[test]
fn test_inner_scope_catch_all_entry_is_merged() {
    let wrapped = wrapped_echo();
    let info = Value::from(FuncInfo::new(target(), true));
    let input = Value::Map(arg_map! {
        "a" => 1,
        "kw" => Value::Map(arg_map! { "a" => 7, "c" => 3 }),
    });

    let got = wrapped(&[info, input], &ArgMap::new()).unwrap();
    // Last-write-wins: the catch-all's entries overwrite the top level
    assert_eq!(got, arg_map! { "a" => 7, "c" => 3 });
}

// ============================================================================
// Descriptor contract
// ============================================================================

#[test]
fn test_plain_integer_descriptor_rejected() {
    let wrapped = wrapped_echo();
    let err = wrapped(&[Value::Int(3), Value::Int(1)], &ArgMap::new()).unwrap_err();
    assert_eq!(
        err,
        Error::Contract(ContractError::NotADescriptor { found: "int" })
    );
}

#[test]
fn test_non_boolean_flag_rejected_at_construction() {
    let err = FuncInfo::from_flag(target(), &Value::Str("true".into())).unwrap_err();
    assert_eq!(err, ContractError::NonBooleanFlag { found: "str" });
}

// ============================================================================
// Statelessness
// ============================================================================

#[test]
fn test_repeat_calls_are_identical() {
    let wrapped = wrapped_echo();
    let kwargs = arg_map! { "c" => 3 };

    let call = || {
        let info = Value::from(FuncInfo::new(target(), false));
        wrapped(&[info, Value::Int(1)], &kwargs).unwrap()
    };
    let first = call();
    let second = call();
    assert_eq!(first, second);
    assert_eq!(first, arg_map! { "a" => 1, "b" => 2, "c" => 3 });
}

#[test]
fn test_validator_result_returned_unchanged() {
    // A validator with real checking logic: result is its own, untouched
    let wrapped = parachute(|args: &ArgMap| match args["a"].as_int() {
        Some(n) if n > 0 => Ok(n * 10),
        _ => Err(Error::Validation("a must be a positive int".into())),
    });
    let info = Value::from(FuncInfo::new(target(), false));
    assert_eq!(wrapped(&[info, Value::Int(4)], &ArgMap::new()), Ok(40));

    let info = Value::from(FuncInfo::new(target(), false));
    assert_eq!(
        wrapped(&[info, Value::Int(0)], &ArgMap::new()),
        Err(Error::Validation("a must be a positive int".into()))
    );
}
