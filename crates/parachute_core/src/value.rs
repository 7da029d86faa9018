//! Dynamic argument values.
//!
//! Call-time arguments are dynamically typed: a validator does not know at
//! compile time what shape its target function's arguments take. `Value`
//! covers the scalar and container shapes that occur in argument lists, plus
//! a descriptor variant so the first argument slot of a wrapped call can be
//! checked at runtime rather than assumed.

use crate::funcinfo::FuncInfo;
use indexmap::IndexMap;
use std::sync::Arc;

/// An argument mapping from parameter name to bound value.
///
/// Insertion order is preserved (declaration order after full binding, input
/// order after inner-scope filtering), though no ordering is semantically
/// significant.
pub type ArgMap = IndexMap<String, Value>;

/// A dynamically typed argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(ArgMap),
    /// A call descriptor occupying the first argument slot of a wrapped call.
    Func(Arc<FuncInfo>),
}

impl Value {
    /// The name of this value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Func(_) => "funcinfo",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ArgMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_func(&self) -> Option<&Arc<FuncInfo>> {
        match self {
            Value::Func(info) => Some(info),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<ArgMap> for Value {
    fn from(map: ArgMap) -> Self {
        Value::Map(map)
    }
}

impl From<FuncInfo> for Value {
    fn from(info: FuncInfo) -> Self {
        Value::Func(Arc::new(info))
    }
}

impl From<Arc<FuncInfo>> for Value {
    fn from(info: Arc<FuncInfo>) -> Self {
        Value::Func(info)
    }
}

/// Build an [`ArgMap`] from `name => value` pairs.
///
/// Values go through [`Value::from`], so plain literals work:
///
/// ```
/// use parachute_core::arg_map;
/// let args = arg_map! { "a" => 1, "b" => "two" };
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! arg_map {
    () => { $crate::value::ArgMap::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::value::ArgMap::new();
        $(map.insert(String::from($key), $crate::value::Value::from($value));)+
        map
    }};
}
