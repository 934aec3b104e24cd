// Author: Dustin Pilgrim
// License: MIT

use crate::{JsonconError, Value};

fn type_error(expected: &str, value: &Value, hint: &str) -> JsonconError {
    JsonconError::TypeError {
        message: format!("Expected {}, got {} {}", expected, value.type_name(), value),
        hint: Some(hint.into()),
        code: Some(401),
    }
}

/// Whole numbers as `i64`; floats count when they have no fractional part.
fn whole_number(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(n) => Some(*n),
        Value::Float(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => Some(*n as i64),
        _ => None,
    }
}

fn integer_in_range<T: TryFrom<i64>>(value: Value, type_name: &str) -> Result<T, JsonconError> {
    let n = whole_number(&value)
        .ok_or_else(|| type_error("integer", &value, "Use a whole number in your document"))?;
    T::try_from(n).map_err(|_| JsonconError::TypeError {
        message: format!("Number {} out of range for {}", n, type_name),
        hint: Some(format!("Use a number that fits in {}", type_name)),
        code: Some(402),
    })
}

impl TryFrom<Value> for String {
    type Error = JsonconError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(type_error("string", &other, "Use a string value in your document")),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = JsonconError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_f64()
            .ok_or_else(|| type_error("number", &value, "Use a number value in your document"))
    }
}

impl TryFrom<Value> for f32 {
    type Error = JsonconError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

impl TryFrom<Value> for i64 {
    type Error = JsonconError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        integer_in_range(value, "i64")
    }
}

impl TryFrom<Value> for i32 {
    type Error = JsonconError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        integer_in_range(value, "i32")
    }
}

impl TryFrom<Value> for u16 {
    type Error = JsonconError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        integer_in_range(value, "u16")
    }
}

impl TryFrom<Value> for u32 {
    type Error = JsonconError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        integer_in_range(value, "u32")
    }
}

impl TryFrom<Value> for u64 {
    type Error = JsonconError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        integer_in_range(value, "u64")
    }
}

impl TryFrom<Value> for usize {
    type Error = JsonconError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        integer_in_range(value, "usize")
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = JsonconError>,
{
    type Error = JsonconError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => items.into_iter().map(T::try_from).collect(),
            other => Err(type_error("list", &other, "Use a JSON array in your document")),
        }
    }
}
