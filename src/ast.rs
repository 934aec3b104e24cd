use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::JsonconError;

/// A resolved value produced by expression evaluation or read from the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
}

/// Named values visible to expressions, in declaration order.
pub type ConstantsTable = IndexMap<String, Value>;

/// One line of converted output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ConfigLine {
    Constant { name: String, value: Value },
    Entry { key: String, value: Value },
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Fails on infinities and NaN anywhere in the value, lists included.
    pub fn ensure_finite(&self) -> Result<(), JsonconError> {
        match self {
            Value::Float(n) if !n.is_finite() => Err(JsonconError::unsupported_value("non-finite float")),
            Value::List(items) => items.iter().try_for_each(Value::ensure_finite),
            _ => Ok(()),
        }
    }

    /// Converts an evaluated value back into the JSON document.
    pub fn to_json(&self) -> Result<serde_json::Value, JsonconError> {
        Ok(match self {
            Value::Integer(n) => serde_json::Value::from(*n),
            Value::Float(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .ok_or_else(|| JsonconError::unsupported_value("non-finite float"))?,
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => serde_json::Value::Array(
                items.iter().map(Value::to_json).collect::<Result<_, _>>()?,
            ),
        })
    }
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = JsonconError;

    fn try_from(json: &serde_json::Value) -> Result<Self, Self::Error> {
        match json {
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(JsonconError::unsupported_value("number"))
                }
            }
            serde_json::Value::String(s) => Ok(Value::String(s.clone())),
            serde_json::Value::Array(items) => Ok(Value::List(
                items.iter().map(Value::try_from).collect::<Result<_, _>>()?,
            )),
            serde_json::Value::Bool(_) => Err(JsonconError::unsupported_value("boolean")),
            serde_json::Value::Null => Err(JsonconError::unsupported_value("null")),
            serde_json::Value::Object(_) => Err(JsonconError::unsupported_value("object")),
        }
    }
}

/// Renders a value in config text syntax: numbers bare, strings quoted,
/// lists as `{a, b, c}`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", crate::utils::format_float(*n)),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Display for ConfigLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLine::Constant { name, value } => write!(f, "{} is {};", name, value),
            ConfigLine::Entry { key, value } => write!(f, "{} {};", key, value),
        }
    }
}

/// Returns the inner expression if `s` is wrapped in `.[` and `].`.
pub fn strip_marker(s: &str) -> Option<&str> {
    s.strip_prefix(".[")?.strip_suffix("].")
}
