use super::*;
use crate::ast::strip_marker;
use crate::lexer;
use crate::utils::{is_float_literal, is_integer_literal};

pub(super) fn parse_operand(parser: &Parser, token: &str) -> Result<Value, JsonconError> {
    if is_integer_literal(token) {
        return token.parse::<i64>().map(Value::Integer).map_err(|_| JsonconError::Overflow {
            message: format!("Integer literal {} does not fit in 64 bits", token),
            hint: Some("Use a decimal literal such as 1.0 for values beyond the 64-bit range".into()),
            code: Some(206),
        });
    }

    if is_float_literal(token) {
        let n = token.parse::<f64>().map_err(|_| JsonconError::unknown_operand(token))?;
        if !n.is_finite() {
            return Err(JsonconError::Overflow {
                message: format!("Decimal literal {} is out of the 64-bit float range", token),
                hint: None,
                code: Some(206),
            });
        }
        return Ok(Value::Float(n));
    }

    if let Some(value) = parser.constants.get(token) {
        return Ok(value.clone());
    }

    if let Some(inner) = strip_marker(token) {
        return parser.evaluate(inner);
    }

    if let Some(body) = list_body(token) {
        let items = lexer::items(body)
            .into_iter()
            .map(|item| parse_operand(parser, item))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Value::List(items));
    }

    Err(JsonconError::unknown_operand(token))
}

fn list_body(token: &str) -> Option<&str> {
    token
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .or_else(|| token.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')))
}
