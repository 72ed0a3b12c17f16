//! Opaque value - one already-parsed JSON-like node of an audit change

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A schema-less value as handed over by the wire parser
///
/// Integers that do not fit `i64` land in [`OpaqueValue::Float`], the same way
/// the wire format itself would lose precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpaqueValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<OpaqueValue>),
    Object(BTreeMap<String, OpaqueValue>),
}

impl OpaqueValue {
    /// Short name of the node shape, used in mismatch errors
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Look up a field of an object node
    pub fn field(&self, name: &str) -> Option<&OpaqueValue> {
        match self {
            Self::Object(map) => map.get(name),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for OpaqueValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&str> for OpaqueValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for OpaqueValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for OpaqueValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for OpaqueValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
