use std::cmp::Ordering;

use super::*;
use crate::lexer;

const OPERATORS: [&str; 4] = ["+", "-", "*", "/"];

fn is_operator(token: &str) -> bool {
    OPERATORS.contains(&token)
}

pub(super) fn evaluate(parser: &Parser, expr: &str) -> Result<Value, JsonconError> {
    let expr = expr.trim();

    // `sort` takes the whole remainder as a single operand
    let mut head = expr.splitn(2, char::is_whitespace);
    if head.next() == Some("sort") {
        let rest = head.next().unwrap_or("").trim();
        return sort(parser.parse_operand(rest)?);
    }

    let tokens = lexer::words(expr);
    let (operator, operands) = match tokens.as_slice() {
        [] => {
            return Err(JsonconError::UnsupportedOperator {
                operator: String::new(),
                hint: Some("The expression is empty".into()),
                code: Some(201),
            });
        }
        [lhs, op, rhs] if !is_operator(lhs) && is_operator(op) => (*op, vec![*lhs, *rhs]),
        [op, rest @ ..] => (*op, rest.to_vec()),
    };

    if !is_operator(operator) {
        return Err(JsonconError::UnsupportedOperator {
            operator: operator.to_string(),
            hint: Some("Supported operators are +, -, *, / and sort".into()),
            code: Some(201),
        });
    }

    let values = operands
        .iter()
        .map(|token| parser.parse_operand(token))
        .collect::<Result<Vec<_>, _>>()?;

    log::trace!("evaluating '{}' with {} operand(s)", operator, values.len());

    match operator {
        "+" => {
            let mut values = values.into_iter();
            let first = values.next().ok_or_else(|| arity(operator, "needs at least one operand"))?;
            values.try_fold(check_number(operator, first)?, |acc, v| add(operator, acc, v))
        }
        "-" => match values.len() {
            0 => Err(arity(operator, "needs at least one operand")),
            1 => negate(operator, values.into_iter().next().unwrap_or(Value::Integer(0))),
            _ => {
                let mut values = values.into_iter();
                let first = values.next().unwrap_or(Value::Integer(0));
                let rest = values.try_fold(Value::Integer(0), |acc, v| add(operator, acc, v))?;
                subtract(operator, first, rest)
            }
        },
        "*" => values
            .into_iter()
            .try_fold(Value::Integer(1), |acc, v| multiply(operator, acc, v)),
        _ => {
            let [lhs, rhs] = <[Value; 2]>::try_from(values).map_err(|values| {
                arity(operator, &format!("division requires two operands, got {}", values.len()))
            })?;
            divide(operator, lhs, rhs)
        }
    }
}

fn arity(operator: &str, message: &str) -> JsonconError {
    JsonconError::ArityError {
        operator: operator.to_string(),
        message: message.to_string(),
        hint: None,
        code: Some(202),
    }
}

fn overflow(operator: &str) -> JsonconError {
    JsonconError::Overflow {
        message: format!("integer result of '{}' does not fit in 64 bits", operator),
        hint: Some("Mix in a decimal operand such as 1.0 to compute in floating point".into()),
        code: Some(206),
    }
}

fn check_number(operator: &str, value: Value) -> Result<Value, JsonconError> {
    match value {
        Value::Integer(_) | Value::Float(_) => Ok(value),
        other => Err(JsonconError::OperandTypeError {
            operator: operator.to_string(),
            found: other.type_name().to_string(),
            hint: Some("Arithmetic works on integers and floats only".into()),
            code: Some(204),
        }),
    }
}

fn as_number(operator: &str, value: &Value) -> Result<f64, JsonconError> {
    value.as_f64().ok_or_else(|| JsonconError::OperandTypeError {
        operator: operator.to_string(),
        found: value.type_name().to_string(),
        hint: Some("Arithmetic works on integers and floats only".into()),
        code: Some(204),
    })
}

fn add(operator: &str, lhs: Value, rhs: Value) -> Result<Value, JsonconError> {
    match (&lhs, &rhs) {
        (Value::Integer(a), Value::Integer(b)) => {
            a.checked_add(*b).map(Value::Integer).ok_or_else(|| overflow(operator))
        }
        _ => Ok(Value::Float(as_number(operator, &lhs)? + as_number(operator, &rhs)?)),
    }
}

fn subtract(operator: &str, lhs: Value, rhs: Value) -> Result<Value, JsonconError> {
    match (&lhs, &rhs) {
        (Value::Integer(a), Value::Integer(b)) => {
            a.checked_sub(*b).map(Value::Integer).ok_or_else(|| overflow(operator))
        }
        _ => Ok(Value::Float(as_number(operator, &lhs)? - as_number(operator, &rhs)?)),
    }
}

fn multiply(operator: &str, lhs: Value, rhs: Value) -> Result<Value, JsonconError> {
    match (&lhs, &rhs) {
        (Value::Integer(a), Value::Integer(b)) => {
            a.checked_mul(*b).map(Value::Integer).ok_or_else(|| overflow(operator))
        }
        _ => Ok(Value::Float(as_number(operator, &lhs)? * as_number(operator, &rhs)?)),
    }
}

fn negate(operator: &str, value: Value) -> Result<Value, JsonconError> {
    match value {
        Value::Integer(n) => n.checked_neg().map(Value::Integer).ok_or_else(|| overflow(operator)),
        Value::Float(n) => Ok(Value::Float(-n)),
        other => Err(JsonconError::OperandTypeError {
            operator: operator.to_string(),
            found: other.type_name().to_string(),
            hint: Some("Arithmetic works on integers and floats only".into()),
            code: Some(204),
        }),
    }
}

/// True division: the result is always a float.
fn divide(operator: &str, lhs: Value, rhs: Value) -> Result<Value, JsonconError> {
    let numerator = as_number(operator, &lhs)?;
    let denominator = as_number(operator, &rhs)?;
    if denominator == 0.0 {
        return Err(JsonconError::DivisionByZero {
            hint: Some(format!("Denominator {} evaluated to zero", rhs)),
            code: Some(205),
        });
    }
    Ok(Value::Float(numerator / denominator))
}

fn sort(value: Value) -> Result<Value, JsonconError> {
    let mut items = match value {
        Value::List(items) => items,
        other => return Err(sort_error(other.type_name())),
    };

    let all_numbers = items.iter().all(|v| matches!(v, Value::Integer(_) | Value::Float(_)));
    let all_strings = items.iter().all(|v| matches!(v, Value::String(_)));

    if all_numbers {
        items.sort_by(compare_numbers);
    } else if all_strings {
        items.sort_by(|a, b| match (a, b) {
            (Value::String(a), Value::String(b)) => a.cmp(b),
            _ => Ordering::Equal,
        });
    } else if items.iter().any(|v| matches!(v, Value::List(_))) {
        return Err(sort_error("list containing nested lists"));
    } else {
        return Err(sort_error("list mixing numbers and strings"));
    }

    Ok(Value::List(items))
}

fn compare_numbers(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => x.cmp(y),
        (Value::Integer(x), Value::Float(y)) => compare_integer_float(*x, *y),
        (Value::Float(x), Value::Integer(y)) => compare_integer_float(*y, *x).reverse(),
        _ => {
            let (x, y) = (a.as_f64().unwrap_or_default(), b.as_f64().unwrap_or_default());
            x.partial_cmp(&y).unwrap_or_else(|| x.total_cmp(&y))
        }
    }
}

/// Exact comparison without rounding `n` to the nearest float.
fn compare_integer_float(n: i64, f: f64) -> Ordering {
    // i64::MIN and 2^63 are both exact floats
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    if f.is_nan() {
        return (n as f64).total_cmp(&f);
    }
    if f >= -LOWER {
        return Ordering::Less;
    }
    if f < LOWER {
        return Ordering::Greater;
    }
    match n.cmp(&(f.trunc() as i64)) {
        Ordering::Equal => 0.0f64.partial_cmp(&f.fract()).unwrap_or(Ordering::Equal),
        other => other,
    }
}

fn sort_error(found: &str) -> JsonconError {
    JsonconError::SortTypeError {
        found: found.to_string(),
        hint: Some("sort takes a list of numbers or a list of strings, e.g. sort {3, 1, 2}".into()),
        code: Some(203),
    }
}
